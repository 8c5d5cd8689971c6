//! User service enforcing username uniqueness and existence checks

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// User service; the entry point callers use instead of the repository.
///
/// The existence and uniqueness checks are plain reads followed by a write.
/// They are not atomic: a concurrent insert of the same username can still
/// reach the unique constraint and surface as a storage error, and a row
/// removed between the read and the write of `change_email` surfaces as
/// `NotFound`.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user after checking the username is free
    #[instrument(skip(self, email))]
    pub async fn add_user(&self, username: &str, email: &str) -> Result<User, DomainError> {
        if self.repository.select_by_username(username).await?.is_some() {
            warn!(username = %username, "Rejected duplicate username");
            return Err(DomainError::already_exists(username));
        }

        let user = self.repository.insert(NewUser::new(username, email)).await?;
        info!(user_id = %user.id(), "Created user");

        Ok(user)
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, DomainError> {
        debug!("Looking up user by id");

        self.repository
            .select_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Get a user by username
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DomainError> {
        debug!("Looking up user by username");

        self.repository
            .select_by_username(username)
            .await?
            .ok_or_else(|| DomainError::username_not_found(username))
    }

    /// List all users ordered by ID
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.select_all().await
    }

    /// Delete a user.
    ///
    /// A missing row fails with the same `NotFound` by ID as the lookups, so
    /// the message reads `User not found with id: <id>` rather than naming
    /// the deletion.
    #[instrument(skip(self))]
    pub async fn remove_user(&self, id: UserId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(id));
        }

        info!(user_id = %id, "Removed user");
        Ok(())
    }

    /// Change a user's email, keeping ID and username
    #[instrument(skip(self, new_email))]
    pub async fn change_email(&self, id: UserId, new_email: &str) -> Result<User, DomainError> {
        let mut user = self.get_user_by_id(id).await?;
        user.set_email(new_email);

        let updated = self
            .repository
            .update(&user)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;
        info!(user_id = %id, "Changed user email");

        Ok(updated)
    }
}
