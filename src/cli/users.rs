//! User subcommands

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::UserId;
use crate::infrastructure::logging;
use crate::infrastructure::user::UserService;

use super::{Cli, Command};

/// Load configuration, wire the service and execute one subcommand
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    let repository = Arc::new(crate::create_user_repository(&config).await?);
    let service = UserService::new(Arc::clone(&repository));

    match cli.command {
        Command::Init => {
            repository.ensure_table().await?;
            info!("Users table is ready");
        }
        Command::Add { username, email } => {
            print_json(&service.add_user(&username, &email).await?)?;
        }
        Command::Get { id } => {
            print_json(&service.get_user_by_id(UserId::new(id)).await?)?;
        }
        Command::Find { username } => {
            print_json(&service.get_user_by_username(&username).await?)?;
        }
        Command::List => {
            print_json(&service.get_all_users().await?)?;
        }
        Command::Remove { id } => {
            service.remove_user(UserId::new(id)).await?;
            info!(user_id = id, "User removed");
        }
        Command::ChangeEmail { id, email } => {
            print_json(&service.change_email(UserId::new(id), &email).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
