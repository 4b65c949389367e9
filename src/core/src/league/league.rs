use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A competitive grouping of teams within a competition, against which
/// matches and standings are scoped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub competition_id: u32,
    pub max_teams: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLeague {
    pub name: String,
    pub competition_id: u32,
    pub max_teams: u32,
}
