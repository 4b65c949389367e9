use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{Competition, CompetitionChanges, NewCompetition};

impl Database {
    pub fn create_competition(&mut self, input: &NewCompetition) -> DomainResult<Competition> {
        self.ensure_user(input.organizer_id)?;

        let now = Self::timestamp();
        let competition = Competition {
            id: self.competition_seq.next(),
            name: input.name.clone(),
            description: input.description.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            organizer_id: input.organizer_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.competitions.push(competition.clone());

        Ok(competition)
    }

    pub fn competitions(&self) -> Vec<Competition> {
        self.competitions.clone()
    }

    pub fn competition_by_id(&self, id: u32) -> Option<Competition> {
        self.competitions.iter().find(|c| c.id == id).cloned()
    }

    pub fn update_competition(
        &mut self,
        id: u32,
        changes: &CompetitionChanges,
    ) -> DomainResult<Competition> {
        let competition = self
            .competitions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Competition with id {} not found", id))
            })?;

        if let Some(name) = &changes.name {
            competition.name = name.clone();
        }
        if let Some(description) = &changes.description {
            competition.description = description.clone();
        }
        if let Some(start_date) = changes.start_date {
            competition.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            competition.end_date = end_date;
        }
        if let Some(is_active) = changes.is_active {
            competition.is_active = is_active;
        }
        competition.updated_at = Self::timestamp();

        Ok(competition.clone())
    }
}
