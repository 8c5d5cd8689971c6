//! CLI module for the user registry
//!
//! Each subcommand maps onto one user service operation, plus `init` which
//! creates the users table on a fresh database.

mod users;

pub use users::run;

use clap::{Parser, Subcommand};

/// User Registry - manage user records stored in PostgreSQL
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the users table if it does not exist
    Init,

    /// Add a user
    Add { username: String, email: String },

    /// Show a user by ID
    Get { id: i64 },

    /// Show a user by username
    Find { username: String },

    /// List all users ordered by ID
    List,

    /// Delete a user by ID
    Remove { id: i64 },

    /// Change a user's email
    ChangeEmail { id: i64, email: String },
}
