use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competition {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub organizer_id: u32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCompetition {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub organizer_id: u32,
}

/// Partial update. Absent fields are left untouched; nullable fields use a
/// double `Option` so an explicit `null` clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompetitionChanges {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub is_active: Option<bool>,
}
