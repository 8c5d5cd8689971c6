use std::fmt;

use thiserror::Error;

use super::user::UserId;

/// Key a user lookup was made with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(UserId),
    Username(String),
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id: {}", id),
            Self::Username(username) => write!(f, "username: {}", username),
        }
    }
}

impl From<UserId> for UserKey {
    fn from(id: UserId) -> Self {
        Self::Id(id)
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found with {key}")]
    NotFound { key: UserKey },

    #[error("Username already exists: {username}")]
    AlreadyExists { username: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found(key: impl Into<UserKey>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn username_not_found(username: impl Into<String>) -> Self {
        Self::NotFound {
            key: UserKey::Username(username.into()),
        }
    }

    pub fn already_exists(username: impl Into<String>) -> Self {
        Self::AlreadyExists {
            username: username.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
