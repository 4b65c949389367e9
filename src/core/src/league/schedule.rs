use crate::Team;
use crate::error::{DomainError, DomainResult};
use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;
use log::debug;

/// Days between consecutively generated fixtures.
pub const FIXTURE_SPACING_DAYS: i64 = 7;

/// Kick-off time every fixture is normalized to.
pub const KICKOFF_HOUR: u32 = 15;

/// One generated pairing, not yet persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleFixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub date: NaiveDateTime,
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Produces a full single round-robin fixture list for `teams`.
    ///
    /// Pairings are enumerated over the slice in its given order: for every
    /// `(i, j)` with `i < j`, team `i` is at home. The `k`-th pairing is
    /// scheduled `7 * k` days after the anchor, so fixtures are spaced
    /// sequentially rather than grouped into proper rounds. Callers that
    /// need a deterministic schedule must pass the teams ordered by id.
    pub fn round_robin(teams: &[Team], now: NaiveDateTime) -> DomainResult<Vec<ScheduleFixture>> {
        if teams.len() < 2 {
            return Err(DomainError::Validation(String::from(
                "League must have at least 2 teams to generate schedule",
            )));
        }

        let anchor = Self::anchor(now);

        let fixtures: Vec<ScheduleFixture> = teams
            .iter()
            .tuple_combinations()
            .enumerate()
            .map(|(round, (home, away))| ScheduleFixture {
                home_team_id: home.id,
                away_team_id: away.id,
                date: anchor + Duration::days(FIXTURE_SPACING_DAYS * round as i64),
            })
            .collect();

        debug!(
            "round robin: {} fixtures for {} teams from {}",
            fixtures.len(),
            teams.len(),
            anchor
        );

        Ok(fixtures)
    }

    /// The generation moment normalized to the fixed kick-off time of day.
    pub fn anchor(now: NaiveDateTime) -> NaiveDateTime {
        now.date().and_hms_opt(KICKOFF_HOUR, 0, 0).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn create_test_team(id: u32) -> Team {
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        Team {
            id,
            name: format!("Team {}", id),
            club_id: 1,
            league_id: Some(1),
            created_at: now,
            updated_at: now,
        }
    }

    fn test_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 2)
            .unwrap()
            .and_hms_opt(10, 42, 31)
            .unwrap()
    }

    #[test]
    fn four_teams_produce_six_fixtures_each_pair_once() {
        let teams: Vec<Team> = (1..=4).map(create_test_team).collect();

        let fixtures = ScheduleGenerator::round_robin(&teams, test_now()).unwrap();

        assert_eq!(fixtures.len(), 6);

        let pairs: HashSet<(u32, u32)> = fixtures
            .iter()
            .map(|f| (f.home_team_id.min(f.away_team_id), f.home_team_id.max(f.away_team_id)))
            .collect();

        assert_eq!(pairs.len(), 6);
        for i in 1..=4u32 {
            for j in (i + 1)..=4 {
                assert!(pairs.contains(&(i, j)), "missing pairing {} vs {}", i, j);
            }
        }
    }

    #[test]
    fn fixture_count_is_n_choose_two() {
        for n in 2..=10usize {
            let teams: Vec<Team> = (1..=n as u32).map(create_test_team).collect();
            let fixtures = ScheduleGenerator::round_robin(&teams, test_now()).unwrap();
            assert_eq!(fixtures.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn earlier_team_in_retrieval_order_is_at_home() {
        let teams: Vec<Team> = (1..=4).map(create_test_team).collect();

        let fixtures = ScheduleGenerator::round_robin(&teams, test_now()).unwrap();

        for fixture in &fixtures {
            assert!(fixture.home_team_id < fixture.away_team_id);
        }

        // Nested-loop enumeration order.
        let ordered: Vec<(u32, u32)> = fixtures
            .iter()
            .map(|f| (f.home_team_id, f.away_team_id))
            .collect();
        assert_eq!(ordered, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn fixtures_are_spaced_seven_days_from_anchor() {
        let teams: Vec<Team> = (1..=4).map(create_test_team).collect();

        let fixtures = ScheduleGenerator::round_robin(&teams, test_now()).unwrap();

        let anchor = NaiveDate::from_ymd_opt(2024, 9, 2)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();

        for (k, fixture) in fixtures.iter().enumerate() {
            assert_eq!(fixture.date, anchor + Duration::days(7 * k as i64));
        }
    }

    #[test]
    fn single_team_fails_validation() {
        let teams = vec![create_test_team(1)];

        let err = ScheduleGenerator::round_robin(&teams, test_now()).unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("must have at least 2 teams"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn no_teams_fails_validation() {
        assert!(ScheduleGenerator::round_robin(&[], test_now()).is_err());
    }
}
