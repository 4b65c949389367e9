use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A team belongs to one club and is registered to at most one league at a
/// time (`league_id = None` means unregistered).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub club_id: u32,
    pub league_id: Option<u32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub club_id: u32,
    pub league_id: Option<u32>,
}
