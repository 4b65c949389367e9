use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{NewPlayer, NewPlayerStat, Player, PlayerChanges, PlayerStat};

impl Database {
    pub fn create_player(&mut self, input: &NewPlayer) -> DomainResult<Player> {
        self.ensure_team(input.team_id)?;
        self.ensure_free_jersey(input.team_id, input.jersey_number, None)?;

        let now = Self::timestamp();
        let player = Player {
            id: self.player_seq.next(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            jersey_number: input.jersey_number,
            team_id: input.team_id,
            date_of_birth: input.date_of_birth,
            position: input.position.clone(),
            created_at: now,
            updated_at: now,
        };

        self.players.push(player.clone());

        Ok(player)
    }

    pub fn players_by_team(&self, team_id: u32) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect()
    }

    pub fn update_player(&mut self, id: u32, changes: &PlayerChanges) -> DomainResult<Player> {
        // The uniqueness check needs the player's team before the mutable
        // borrow of the row.
        if let Some(jersey_number) = changes.jersey_number {
            let team_id = self
                .players
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.team_id)
                .ok_or_else(|| {
                    DomainError::NotFound(format!("Player with id {} not found", id))
                })?;
            self.ensure_free_jersey(team_id, jersey_number, Some(id))?;
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Player with id {} not found", id)))?;

        if let Some(first_name) = &changes.first_name {
            player.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            player.last_name = last_name.clone();
        }
        if let Some(jersey_number) = changes.jersey_number {
            player.jersey_number = jersey_number;
        }
        if let Some(date_of_birth) = changes.date_of_birth {
            player.date_of_birth = date_of_birth;
        }
        if let Some(position) = &changes.position {
            player.position = position.clone();
        }
        player.updated_at = Self::timestamp();

        Ok(player.clone())
    }

    /// Deleting an absent player is a no-op, matching the underlying
    /// store's unconditional delete.
    pub fn delete_player(&mut self, id: u32) {
        self.players.retain(|p| p.id != id);
    }

    pub fn create_player_stat(&mut self, input: &NewPlayerStat) -> DomainResult<PlayerStat> {
        self.ensure_match(input.match_id)?;
        self.ensure_player(input.player_id)?;

        if self
            .player_stats
            .iter()
            .any(|s| s.match_id == input.match_id && s.player_id == input.player_id)
        {
            return Err(DomainError::Constraint(format!(
                "unique constraint violation: stats for player {} in match {} already recorded",
                input.player_id, input.match_id
            )));
        }

        let now = Self::timestamp();
        let stat = PlayerStat {
            id: self.player_stat_seq.next(),
            match_id: input.match_id,
            player_id: input.player_id,
            goals: input.goals,
            assists: input.assists,
            created_at: now,
            updated_at: now,
        };

        self.player_stats.push(stat.clone());

        Ok(stat)
    }

    pub fn player_stats_by_match(&self, match_id: u32) -> Vec<PlayerStat> {
        self.player_stats
            .iter()
            .filter(|s| s.match_id == match_id)
            .cloned()
            .collect()
    }

    fn ensure_free_jersey(
        &self,
        team_id: u32,
        jersey_number: u32,
        exclude_player: Option<u32>,
    ) -> DomainResult<()> {
        let taken = self.players.iter().any(|p| {
            p.team_id == team_id
                && p.jersey_number == jersey_number
                && Some(p.id) != exclude_player
        });

        if taken {
            Err(DomainError::Constraint(format!(
                "unique constraint violation: jersey number {} is already taken in team {}",
                jersey_number, team_id
            )))
        } else {
            Ok(())
        }
    }
}
