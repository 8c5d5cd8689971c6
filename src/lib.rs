//! User Registry
//!
//! A PostgreSQL-backed store for user records with a service layer that
//! enforces:
//! - Username uniqueness at creation
//! - Existence checks before fetch, update and delete

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, NewUser, User, UserId, UserKey, UserRepository};
pub use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository, UserService};

use std::sync::Arc;

use infrastructure::storage::{self, PostgresConfig};
use tracing::info;

/// Connect to PostgreSQL and create the user repository
pub async fn create_user_repository(config: &AppConfig) -> anyhow::Result<PostgresUserRepository> {
    let pool = storage::connect(&PostgresConfig::from(&config.database)).await?;
    Ok(PostgresUserRepository::new(pool))
}

/// Connect to PostgreSQL and build the user service on top of it
pub async fn create_user_service(
    config: &AppConfig,
) -> anyhow::Result<UserService<PostgresUserRepository>> {
    let repository = Arc::new(create_user_repository(config).await?);
    info!("User service ready");

    Ok(UserService::new(repository))
}
