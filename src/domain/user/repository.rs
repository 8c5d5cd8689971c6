//! User repository trait

use async_trait::async_trait;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Persistence port for users.
///
/// Absence is reported as `None` or `false`, never as an error. Errors are
/// reserved for storage faults, including unique constraint violations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its generated ID
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Get a user by ID
    async fn select_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by username
    async fn select_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// List all users ordered by ascending ID
    async fn select_all(&self) -> Result<Vec<User>, DomainError>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Replace username and email of the row with the user's ID.
    ///
    /// Returns `None` when no row has that ID.
    async fn update(&self, user: &User) -> Result<Option<User>, DomainError>;
}
