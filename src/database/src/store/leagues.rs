use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{
    League, LeagueStanding, Match, MatchStatus, NewLeague, ScheduleGenerator,
    StandingsCalculator, sort_table,
};
use log::{info, warn};

impl Database {
    pub fn create_league(&mut self, input: &NewLeague) -> DomainResult<League> {
        self.ensure_competition(input.competition_id)?;

        let now = Self::timestamp();
        let league = League {
            id: self.league_seq.next(),
            name: input.name.clone(),
            competition_id: input.competition_id,
            max_teams: input.max_teams,
            created_at: now,
            updated_at: now,
        };

        self.leagues.push(league.clone());

        Ok(league)
    }

    pub fn leagues_by_competition(&self, competition_id: u32) -> Vec<League> {
        self.leagues
            .iter()
            .filter(|l| l.competition_id == competition_id)
            .cloned()
            .collect()
    }

    /// Generates a full single round-robin schedule for the league and
    /// persists it as one bulk insert. Every created match starts out
    /// `Scheduled` with null scores.
    ///
    /// Not idempotent: a second call appends a second fixture set. Callers
    /// own the guard against double generation.
    pub fn generate_league_schedule(&mut self, league_id: u32) -> DomainResult<Vec<Match>> {
        if !self.leagues.iter().any(|l| l.id == league_id) {
            warn!("schedule generation failed: league {} not found", league_id);
            return Err(DomainError::NotFound(format!(
                "League with id {} not found",
                league_id
            )));
        }

        let teams = self.teams_by_league(league_id);
        let fixtures = ScheduleGenerator::round_robin(&teams, Self::timestamp())?;

        let now = Self::timestamp();
        let mut created = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            created.push(Match {
                id: self.match_seq.next(),
                league_id,
                home_team_id: fixture.home_team_id,
                away_team_id: fixture.away_team_id,
                scheduled_date: fixture.date,
                home_score: None,
                away_score: None,
                status: MatchStatus::Scheduled,
                created_at: now,
                updated_at: now,
            });
        }

        self.matches.extend_from_slice(&created);

        info!(
            "league {}: schedule generated, {} fixtures for {} teams",
            league_id,
            created.len(),
            teams.len()
        );

        Ok(created)
    }

    /// Recomputes the standings table from the league's completed matches
    /// and swaps it in wholesale: the old rows are deleted and the fresh
    /// rows inserted in one step, never patched incrementally. Rows come
    /// back in team-retrieval (insertion) order, not display order.
    ///
    /// Must be invoked explicitly after score recording; it is not a side
    /// effect of `update_match_score`.
    pub fn update_league_standings(&mut self, league_id: u32) -> DomainResult<Vec<LeagueStanding>> {
        if !self.leagues.iter().any(|l| l.id == league_id) {
            return Err(DomainError::NotFound(format!(
                "League with id {} not found",
                league_id
            )));
        }

        let completed = self.completed_matches_by_league(league_id);
        let teams = self.teams_by_league(league_id);

        let records = StandingsCalculator::calculate(&teams, &completed);

        let now = Self::timestamp();
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            rows.push(LeagueStanding {
                id: self.standing_seq.next(),
                league_id,
                team_id: record.team_id,
                games_played: record.games_played,
                wins: record.wins,
                losses: record.losses,
                draws: record.draws,
                goals_for: record.goals_for,
                goals_against: record.goals_against,
                points: record.points,
                updated_at: now,
            });
        }

        self.standings.retain(|s| s.league_id != league_id);
        self.standings.extend_from_slice(&rows);

        info!(
            "league {}: standings recomputed from {} completed matches",
            league_id,
            completed.len()
        );

        Ok(rows)
    }

    /// Read path: rows ordered by points descending, then goal difference
    /// descending. Full ties keep storage order.
    pub fn get_league_standings(&self, league_id: u32) -> Vec<LeagueStanding> {
        let mut rows: Vec<LeagueStanding> = self
            .standings
            .iter()
            .filter(|s| s.league_id == league_id)
            .cloned()
            .collect();

        sort_table(&mut rows);

        rows
    }
}

#[cfg(test)]
mod tests {
    use crate::store::support;
    use chrono::Timelike;
    use core::error::DomainError;
    use core::{MatchScoreUpdate, MatchStatus};
    use std::collections::HashSet;

    fn record_score(db: &mut crate::Database, match_id: u32, home: u32, away: u32) {
        db.update_match_score(&MatchScoreUpdate {
            match_id,
            home_score: home,
            away_score: away,
        })
        .unwrap();
    }

    #[test]
    fn schedule_covers_every_pair_exactly_once() {
        let (mut db, league_id, team_ids) = support::seeded_league(4);

        let matches = db.generate_league_schedule(league_id).unwrap();

        assert_eq!(matches.len(), 6);

        let pairs: HashSet<(u32, u32)> = matches
            .iter()
            .map(|m| {
                (
                    m.home_team_id.min(m.away_team_id),
                    m.home_team_id.max(m.away_team_id),
                )
            })
            .collect();
        assert_eq!(pairs.len(), 6);

        for (i, &a) in team_ids.iter().enumerate() {
            for &b in &team_ids[i + 1..] {
                assert!(pairs.contains(&(a.min(b), a.max(b))));
            }
        }

        for m in &matches {
            assert_eq!(m.status, MatchStatus::Scheduled);
            assert_eq!(m.home_score, None);
            assert_eq!(m.away_score, None);
            assert_eq!(m.league_id, league_id);
        }

        assert_eq!(db.matches_by_league(league_id), matches);
    }

    #[test]
    fn fixtures_are_a_week_apart_at_fixed_kickoff() {
        let (mut db, league_id, _) = support::seeded_league(4);

        let matches = db.generate_league_schedule(league_id).unwrap();

        let anchor = matches[0].scheduled_date;
        assert_eq!((anchor.hour(), anchor.minute(), anchor.second()), (15, 0, 0));

        for (k, m) in matches.iter().enumerate() {
            assert_eq!(m.scheduled_date, anchor + chrono::Duration::days(7 * k as i64));
        }
    }

    #[test]
    fn generation_fails_for_missing_league() {
        let (mut db, _, _) = support::seeded_league(2);

        let err = db.generate_league_schedule(404).unwrap_err();

        assert_eq!(
            err,
            DomainError::NotFound("League with id 404 not found".to_string())
        );
        assert!(db.matches_by_league(404).is_empty());
    }

    #[test]
    fn generation_fails_below_two_teams_and_persists_nothing() {
        let (mut db, league_id, _) = support::seeded_league(1);

        let err = db.generate_league_schedule(league_id).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert!(msg.contains("must have at least 2 teams")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(db.matches_by_league(league_id).is_empty());
    }

    #[test]
    fn repeated_generation_doubles_the_fixture_list() {
        // Documented non-idempotence: no dedup, no replace-existing.
        let (mut db, league_id, _) = support::seeded_league(3);

        db.generate_league_schedule(league_id).unwrap();
        db.generate_league_schedule(league_id).unwrap();

        assert_eq!(db.matches_by_league(league_id).len(), 6);
    }

    #[test]
    fn standings_scenario_win_plus_draw() {
        let (mut db, league_id, team_ids) = support::seeded_league(4);
        let matches = db.generate_league_schedule(league_id).unwrap();

        let (a, b, c) = (team_ids[0], team_ids[1], team_ids[2]);

        let a_vs_b = matches
            .iter()
            .find(|m| m.home_team_id == a && m.away_team_id == b)
            .unwrap()
            .id;
        let a_vs_c = matches
            .iter()
            .find(|m| m.home_team_id == a && m.away_team_id == c)
            .unwrap()
            .id;

        record_score(&mut db, a_vs_b, 3, 1);
        record_score(&mut db, a_vs_c, 2, 2);

        let rows = db.update_league_standings(league_id).unwrap();
        assert_eq!(rows.len(), 4);

        let row_a = rows.iter().find(|r| r.team_id == a).unwrap();
        assert_eq!(row_a.games_played, 2);
        assert_eq!(row_a.wins, 1);
        assert_eq!(row_a.draws, 1);
        assert_eq!(row_a.losses, 0);
        assert_eq!(row_a.goals_for, 5);
        assert_eq!(row_a.goals_against, 3);
        assert_eq!(row_a.points, 4);

        // D never played: all-zero row, but a row nonetheless.
        let row_d = rows.iter().find(|r| r.team_id == team_ids[3]).unwrap();
        assert_eq!(row_d.games_played, 0);
        assert_eq!(row_d.points, 0);
    }

    #[test]
    fn standings_without_completed_matches_are_all_zero() {
        let (mut db, league_id, team_ids) = support::seeded_league(3);
        db.generate_league_schedule(league_id).unwrap();

        let rows = db.update_league_standings(league_id).unwrap();

        assert_eq!(rows.len(), team_ids.len());
        for row in &rows {
            assert_eq!(row.games_played, 0);
            assert_eq!(row.wins + row.losses + row.draws, 0);
            assert_eq!(row.goals_for, 0);
            assert_eq!(row.goals_against, 0);
            assert_eq!(row.points, 0);
        }
    }

    #[test]
    fn standings_for_missing_league_fail() {
        let (mut db, _, _) = support::seeded_league(2);

        let err = db.update_league_standings(404).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn recomputation_replaces_rows_wholesale() {
        let (mut db, league_id, team_ids) = support::seeded_league(2);
        let matches = db.generate_league_schedule(league_id).unwrap();

        record_score(&mut db, matches[0].id, 2, 0);
        let first = db.update_league_standings(league_id).unwrap();
        assert_eq!(first.len(), 2);

        // Re-score the same match the other way and recompute.
        record_score(&mut db, matches[0].id, 0, 5);
        let second = db.update_league_standings(league_id).unwrap();

        assert_eq!(second.len(), 2);
        let winner = second.iter().find(|r| r.team_id == team_ids[1]).unwrap();
        assert_eq!((winner.wins, winner.points), (1, 3));
        let loser = second.iter().find(|r| r.team_id == team_ids[0]).unwrap();
        assert_eq!((loser.wins, loser.losses, loser.points), (0, 1, 0));

        // Exactly one row per team survives, no stale duplicates.
        assert_eq!(db.get_league_standings(league_id).len(), 2);
    }

    #[test]
    fn standings_read_is_ordered_by_points_then_goal_difference() {
        let (mut db, league_id, team_ids) = support::seeded_league(4);
        let matches = db.generate_league_schedule(league_id).unwrap();

        let find = |home: u32, away: u32| {
            matches
                .iter()
                .find(|m| m.home_team_id == home && m.away_team_id == away)
                .unwrap()
                .id
        };

        let (a, b, c, d) = (team_ids[0], team_ids[1], team_ids[2], team_ids[3]);

        record_score(&mut db, find(a, b), 1, 0); // A 3 pts, gd +1
        record_score(&mut db, find(c, d), 4, 0); // C 3 pts, gd +4
        record_score(&mut db, find(a, c), 0, 0); // A 4 pts, C 4 pts
        record_score(&mut db, find(b, d), 2, 2); // B 1 pt, D 1 pt

        db.update_league_standings(league_id).unwrap();
        let table = db.get_league_standings(league_id);

        let order: Vec<u32> = table.iter().map(|r| r.team_id).collect();
        // C leads A on goal difference at equal points; B precedes D in
        // storage order at a full tie.
        assert_eq!(order, vec![c, a, b, d]);

        for pair in table.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            assert!(
                x.points > y.points
                    || (x.points == y.points && x.goal_difference() >= y.goal_difference())
            );
        }
    }

    #[test]
    fn standings_ignore_cancelled_and_in_progress_matches() {
        let (mut db, league_id, team_ids) = support::seeded_league(2);
        let matches = db.generate_league_schedule(league_id).unwrap();

        record_score(&mut db, matches[0].id, 3, 2);

        // Tamper the status after scoring: no longer completed, no longer
        // aggregated.
        {
            let m = db
                .matches
                .iter_mut()
                .find(|m| m.id == matches[0].id)
                .unwrap();
            m.status = MatchStatus::Cancelled;
        }

        let rows = db.update_league_standings(league_id).unwrap();
        for row in &rows {
            assert_eq!(row.games_played, 0);
        }
        assert_eq!(rows.len(), team_ids.len());
    }
}
