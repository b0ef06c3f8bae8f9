use clap::Subcommand;
use sqlx::SqlitePool;

use crate::cli::{utils, OutputFormat};
use crate::database::DatabaseManager;

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the cafe table if it does not exist")]
    Init,

    #[command(about = "Check that the database answers")]
    Health,
}

pub async fn handle(cmd: DbCommands, pool: &SqlitePool, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        DbCommands::Init => {
            DatabaseManager::create_all(pool).await?;
            utils::output_success(&output_format, "Cafe table is ready.")
        }
        DbCommands::Health => {
            DatabaseManager::health_check(pool).await?;
            utils::output_success(&output_format, "Database is reachable.")
        }
    }
}
