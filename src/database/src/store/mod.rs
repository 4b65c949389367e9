mod clubs;
mod competitions;
mod leagues;
mod matches;
mod players;
mod teams;
mod users;

use chrono::{NaiveDateTime, Utc};
use core::error::{DomainError, DomainResult};
use core::{Club, Competition, League, LeagueStanding, Match, Player, PlayerStat, Team, User};

/// Monotonic id source for one table. Ids start at 1.
#[derive(Debug, Default)]
pub(crate) struct Sequence(u32);

impl Sequence {
    pub(crate) fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// The in-memory relational store. One `Vec` per table, equality-filter
/// reads, and single-call bulk mutations so every operation is all-or-nothing
/// for its callers.
///
/// Concurrency is delegated to whoever owns the instance: the server wraps
/// it in one `RwLock` and takes the lock once per request-scoped operation,
/// which serializes the bulk insert and the delete-then-insert pair.
#[derive(Debug, Default)]
pub struct Database {
    pub(crate) users: Vec<User>,
    pub(crate) competitions: Vec<Competition>,
    pub(crate) leagues: Vec<League>,
    pub(crate) clubs: Vec<Club>,
    pub(crate) teams: Vec<Team>,
    pub(crate) players: Vec<Player>,
    pub(crate) matches: Vec<Match>,
    pub(crate) player_stats: Vec<PlayerStat>,
    pub(crate) standings: Vec<LeagueStanding>,

    pub(crate) user_seq: Sequence,
    pub(crate) competition_seq: Sequence,
    pub(crate) league_seq: Sequence,
    pub(crate) club_seq: Sequence,
    pub(crate) team_seq: Sequence,
    pub(crate) player_seq: Sequence,
    pub(crate) match_seq: Sequence,
    pub(crate) player_stat_seq: Sequence,
    pub(crate) standing_seq: Sequence,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    pub(crate) fn timestamp() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    // Referential checks. Failures surface as constraint violations, the
    // same way the relational store would reject a dangling foreign key.

    pub(crate) fn ensure_user(&self, id: u32) -> DomainResult<()> {
        if self.users.iter().any(|u| u.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("user", id))
        }
    }

    pub(crate) fn ensure_competition(&self, id: u32) -> DomainResult<()> {
        if self.competitions.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("competition", id))
        }
    }

    pub(crate) fn ensure_league(&self, id: u32) -> DomainResult<()> {
        if self.leagues.iter().any(|l| l.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("league", id))
        }
    }

    pub(crate) fn ensure_club(&self, id: u32) -> DomainResult<()> {
        if self.clubs.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("club", id))
        }
    }

    pub(crate) fn ensure_team(&self, id: u32) -> DomainResult<()> {
        if self.teams.iter().any(|t| t.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("team", id))
        }
    }

    pub(crate) fn ensure_match(&self, id: u32) -> DomainResult<()> {
        if self.matches.iter().any(|m| m.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("match", id))
        }
    }

    pub(crate) fn ensure_player(&self, id: u32) -> DomainResult<()> {
        if self.players.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(Self::fk_violation("player", id))
        }
    }

    fn fk_violation(entity: &str, id: u32) -> DomainError {
        DomainError::Constraint(format!(
            "foreign key violation: {} with id {} does not exist",
            entity, id
        ))
    }
}
