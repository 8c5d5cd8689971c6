//! User domain
//!
//! Entity types and the persistence port for users.

mod entity;
mod repository;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
