use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{Club, ClubChanges, NewClub};

impl Database {
    pub fn create_club(&mut self, input: &NewClub) -> DomainResult<Club> {
        self.ensure_user(input.manager_id)?;

        let now = Self::timestamp();
        let club = Club {
            id: self.club_seq.next(),
            name: input.name.clone(),
            description: input.description.clone(),
            contact_email: input.contact_email.clone(),
            contact_phone: input.contact_phone.clone(),
            manager_id: input.manager_id,
            created_at: now,
            updated_at: now,
        };

        self.clubs.push(club.clone());

        Ok(club)
    }

    pub fn clubs(&self) -> Vec<Club> {
        self.clubs.clone()
    }

    pub fn clubs_by_manager(&self, manager_id: u32) -> Vec<Club> {
        self.clubs
            .iter()
            .filter(|c| c.manager_id == manager_id)
            .cloned()
            .collect()
    }

    pub fn update_club(&mut self, id: u32, changes: &ClubChanges) -> DomainResult<Club> {
        let club = self
            .clubs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Club with id {} not found", id)))?;

        if let Some(name) = &changes.name {
            club.name = name.clone();
        }
        if let Some(description) = &changes.description {
            club.description = description.clone();
        }
        if let Some(contact_email) = &changes.contact_email {
            club.contact_email = contact_email.clone();
        }
        if let Some(contact_phone) = &changes.contact_phone {
            club.contact_phone = contact_phone.clone();
        }
        club.updated_at = Self::timestamp();

        Ok(club.clone())
    }
}
