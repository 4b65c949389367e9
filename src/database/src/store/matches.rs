use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{Match, MatchScoreUpdate, MatchStatus, NewMatch};
use log::info;

impl Database {
    pub fn create_match(&mut self, input: &NewMatch) -> DomainResult<Match> {
        self.ensure_league(input.league_id)?;
        self.ensure_team(input.home_team_id)?;
        self.ensure_team(input.away_team_id)?;

        let now = Self::timestamp();
        let m = Match {
            id: self.match_seq.next(),
            league_id: input.league_id,
            home_team_id: input.home_team_id,
            away_team_id: input.away_team_id,
            scheduled_date: input.scheduled_date,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };

        self.matches.push(m.clone());

        Ok(m)
    }

    pub fn matches_by_league(&self, league_id: u32) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.league_id == league_id)
            .cloned()
            .collect()
    }

    pub(crate) fn completed_matches_by_league(&self, league_id: u32) -> Vec<Match> {
        self.matches
            .iter()
            .filter(|m| m.league_id == league_id && m.status == MatchStatus::Completed)
            .cloned()
            .collect()
    }

    /// Records a final score and forces the match to `Completed`, whatever
    /// its previous status. Re-recording silently overwrites the old score.
    /// Standings are not touched here; callers recompute them explicitly.
    pub fn update_match_score(&mut self, update: &MatchScoreUpdate) -> DomainResult<Match> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == update.match_id)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Match with id {} not found", update.match_id))
            })?;

        m.home_score = Some(update.home_score as i32);
        m.away_score = Some(update.away_score as i32);
        m.status = MatchStatus::Completed;
        m.updated_at = Self::timestamp();

        info!(
            "match {} completed: {} - {}",
            m.id, update.home_score, update.away_score
        );

        Ok(m.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::support;
    use core::error::DomainError;
    use core::{MatchScoreUpdate, MatchStatus, NewMatch};

    #[test]
    fn created_match_is_scheduled_with_null_scores() {
        let (mut db, league_id, team_ids) = support::seeded_league(2);

        let m = db
            .create_match(&NewMatch {
                league_id,
                home_team_id: team_ids[0],
                away_team_id: team_ids[1],
                scheduled_date: support::date(2024, 10, 12),
            })
            .unwrap();

        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.home_score, None);
        assert_eq!(m.away_score, None);
        assert_eq!(db.matches_by_league(league_id), vec![m]);
    }

    #[test]
    fn create_match_rejects_dangling_league() {
        let (mut db, _, team_ids) = support::seeded_league(2);

        let err = db
            .create_match(&NewMatch {
                league_id: 404,
                home_team_id: team_ids[0],
                away_team_id: team_ids[1],
                scheduled_date: support::date(2024, 10, 12),
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn score_recording_forces_completed() {
        let (mut db, league_id, team_ids) = support::seeded_league(2);
        let m = db
            .create_match(&NewMatch {
                league_id,
                home_team_id: team_ids[0],
                away_team_id: team_ids[1],
                scheduled_date: support::date(2024, 10, 12),
            })
            .unwrap();

        let completed = db
            .update_match_score(&MatchScoreUpdate {
                match_id: m.id,
                home_score: 3,
                away_score: 1,
            })
            .unwrap();

        assert_eq!(completed.status, MatchStatus::Completed);
        assert_eq!(completed.home_score, Some(3));
        assert_eq!(completed.away_score, Some(1));
    }

    #[test]
    fn rescoring_a_completed_match_overwrites_silently() {
        let (mut db, league_id, team_ids) = support::seeded_league(2);
        let m = db
            .create_match(&NewMatch {
                league_id,
                home_team_id: team_ids[0],
                away_team_id: team_ids[1],
                scheduled_date: support::date(2024, 10, 12),
            })
            .unwrap();

        db.update_match_score(&MatchScoreUpdate {
            match_id: m.id,
            home_score: 3,
            away_score: 1,
        })
        .unwrap();

        let rescored = db
            .update_match_score(&MatchScoreUpdate {
                match_id: m.id,
                home_score: 0,
                away_score: 0,
            })
            .unwrap();

        assert_eq!(rescored.status, MatchStatus::Completed);
        assert_eq!(rescored.home_score, Some(0));
        assert_eq!(rescored.away_score, Some(0));
    }

    #[test]
    fn scoring_a_missing_match_fails() {
        let (mut db, _, _) = support::seeded_league(2);

        let err = db
            .update_match_score(&MatchScoreUpdate {
                match_id: 17,
                home_score: 1,
                away_score: 1,
            })
            .unwrap_err();

        assert_eq!(err, DomainError::NotFound("Match with id 17 not found".to_string()));
    }
}
