use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// A single fixture. Scores are non-null if and only if the match went
/// through score recording, which also forces the status to `Completed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: u32,
    pub league_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub scheduled_date: NaiveDateTime,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Match {
    /// The recorded (own, opponent) score pair from `team_id`'s perspective,
    /// or `None` when the match has no scores or does not involve the team.
    pub fn score_for(&self, team_id: u32) -> Option<(i32, i32)> {
        let (home, away) = (self.home_score?, self.away_score?);

        if self.home_team_id == team_id {
            Some((home, away))
        } else if self.away_team_id == team_id {
            Some((away, home))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMatch {
    pub league_id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub scheduled_date: NaiveDateTime,
}

/// Score recording input. Unsigned on the wire, so negative scores are
/// rejected before they reach the store.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchScoreUpdate {
    pub match_id: u32,
    pub home_score: u32,
    pub away_score: u32,
}
