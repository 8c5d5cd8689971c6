//! Storage infrastructure - Database connectivity

mod postgres;

pub use postgres::{connect, PostgresConfig};
