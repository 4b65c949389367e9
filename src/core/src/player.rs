use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: u32,
    pub team_id: u32,
    pub date_of_birth: NaiveDateTime,
    pub position: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: u32,
    pub team_id: u32,
    pub date_of_birth: NaiveDateTime,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<u32>,
    pub date_of_birth: Option<NaiveDateTime>,
    #[serde(default)]
    pub position: Option<Option<String>>,
}

/// Per-player totals for a single match. One row per (match, player) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStat {
    pub id: u32,
    pub match_id: u32,
    pub player_id: u32,
    pub goals: u32,
    pub assists: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayerStat {
    pub match_id: u32,
    pub player_id: u32,
    pub goals: u32,
    pub assists: u32,
}
