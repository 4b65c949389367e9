use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{NewTeam, Team};
use log::info;

impl Database {
    pub fn create_team(&mut self, input: &NewTeam) -> DomainResult<Team> {
        self.ensure_club(input.club_id)?;
        if let Some(league_id) = input.league_id {
            self.ensure_league(league_id)?;
        }

        let now = Self::timestamp();
        let team = Team {
            id: self.team_seq.next(),
            name: input.name.clone(),
            club_id: input.club_id,
            league_id: input.league_id,
            created_at: now,
            updated_at: now,
        };

        self.teams.push(team.clone());

        Ok(team)
    }

    pub fn teams_by_club(&self, club_id: u32) -> Vec<Team> {
        self.teams
            .iter()
            .filter(|t| t.club_id == club_id)
            .cloned()
            .collect()
    }

    /// Teams registered to a league, ordered by team id ascending. The
    /// schedule generator relies on this order being deterministic.
    pub fn teams_by_league(&self, league_id: u32) -> Vec<Team> {
        let mut teams: Vec<Team> = self
            .teams
            .iter()
            .filter(|t| t.league_id == Some(league_id))
            .cloned()
            .collect();

        teams.sort_by_key(|t| t.id);

        teams
    }

    /// Registers a team to a league by setting its `league_id`. Re-registering
    /// a team simply moves it.
    pub fn register_team(&mut self, team_id: u32, league_id: u32) -> DomainResult<Team> {
        if !self.leagues.iter().any(|l| l.id == league_id) {
            return Err(DomainError::NotFound(String::from("League not found")));
        }

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| DomainError::NotFound(String::from("Team not found")))?;

        team.league_id = Some(league_id);
        team.updated_at = Self::timestamp();

        info!("team {} registered to league {}", team_id, league_id);

        Ok(team.clone())
    }
}
