pub mod club;
pub mod competition;
pub mod error;
pub mod league;
pub mod r#match;
pub mod player;
pub mod team;
pub mod user;
pub mod utils;

pub use club::{Club, ClubChanges, NewClub};
pub use competition::{Competition, CompetitionChanges, NewCompetition};
pub use error::{DomainError, DomainResult};
pub use league::{
    League, LeagueStanding, NewLeague, ScheduleFixture, ScheduleGenerator, StandingsCalculator,
    TeamRecord, sort_table,
};
pub use player::{NewPlayer, NewPlayerStat, Player, PlayerChanges, PlayerStat};
pub use r#match::{Match, MatchScoreUpdate, MatchStatus, NewMatch};
pub use team::{NewTeam, Team};
pub use user::{NewUser, User, UserRole};
