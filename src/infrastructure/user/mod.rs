//! User infrastructure module
//!
//! Repository implementations backed by PostgreSQL and by memory, and the
//! user service that sits in front of them.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
