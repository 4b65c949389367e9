use crate::store::Database;
use core::error::{DomainError, DomainResult};
use core::{NewUser, User};
use log::info;

impl Database {
    pub fn create_user(&mut self, input: &NewUser) -> DomainResult<User> {
        if self.users.iter().any(|u| u.email == input.email) {
            return Err(DomainError::Constraint(format!(
                "unique constraint violation: email '{}' is already registered",
                input.email
            )));
        }

        let now = Self::timestamp();
        let user = User {
            id: self.user_seq.next(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            role: input.role,
            created_at: now,
            updated_at: now,
        };

        info!("user created: {} ({:?})", user.email, user.role);

        self.users.push(user.clone());

        Ok(user)
    }

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}
