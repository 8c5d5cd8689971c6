//! Domain layer - Core entities, ports and errors

pub mod error;
pub mod user;

pub use error::{DomainError, UserKey};
pub use user::{NewUser, User, UserId, UserRepository};
