use crate::r#match::{Match, MatchStatus};
use crate::Team;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const POINTS_PER_WIN: u32 = 3;
pub const POINTS_PER_DRAW: u32 = 1;

/// One persisted standings row. Fully derived from completed matches and
/// replaced wholesale on every recomputation; one row per (league, team).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueStanding {
    pub id: u32,
    pub league_id: u32,
    pub team_id: u32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: u32,
    pub updated_at: NaiveDateTime,
}

impl LeagueStanding {
    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// Aggregated record for one team, before the store assigns row identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRecord {
    pub team_id: u32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: u32,
}

pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Derives a record for every team in `teams`, scanning only matches
    /// with status `Completed`. Teams without a single completed match get
    /// an all-zero record. The output follows the order of `teams`.
    pub fn calculate(teams: &[Team], matches: &[Match]) -> Vec<TeamRecord> {
        teams
            .iter()
            .map(|team| Self::record_for_team(team.id, matches))
            .collect()
    }

    fn record_for_team(team_id: u32, matches: &[Match]) -> TeamRecord {
        let mut record = TeamRecord {
            team_id,
            ..TeamRecord::default()
        };

        for m in matches {
            if m.status != MatchStatus::Completed {
                continue;
            }

            let Some((own, opponent)) = m.score_for(team_id) else {
                continue;
            };

            record.games_played += 1;
            record.goals_for += own;
            record.goals_against += opponent;

            if own > opponent {
                record.wins += 1;
            } else if own < opponent {
                record.losses += 1;
            } else {
                record.draws += 1;
            }
        }

        record.points = POINTS_PER_WIN * record.wins + POINTS_PER_DRAW * record.draws;

        record
    }
}

/// Display order: points descending, then goal difference descending. The
/// sort is stable, so rows tied on both keys keep their storage order.
pub fn sort_table(rows: &mut [LeagueStanding]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
    });
}
