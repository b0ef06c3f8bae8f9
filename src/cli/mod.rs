pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::{config, DatabaseConfig};
use crate::database::DatabaseManager;
use crate::services::CafeService;

#[derive(Parser)]
#[command(name = "cafe")]
#[command(about = "Cafe CLI - manage the cafe database without going through HTTP")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, env = "DATABASE_URL", help = "SQLite database URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Database setup and checks")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },

    #[command(about = "Cafe record operations")]
    Data {
        #[command(subcommand)]
        cmd: commands::data::DataCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Open the pool named on the command line, falling back to the configured one
pub async fn open_pool(database_url: Option<String>) -> anyhow::Result<SqlitePool> {
    let database = match database_url {
        Some(url) => DatabaseConfig {
            url,
            ..config().database.clone()
        },
        None => config().database.clone(),
    };

    DatabaseManager::connect(&database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", database.url, e))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let pool = open_pool(cli.database_url).await?;

    match cli.command {
        Commands::Db { cmd } => commands::db::handle(cmd, &pool, output_format).await,
        Commands::Data { cmd } => {
            let service = CafeService::from_pool(pool.clone(), config().security.api_key.clone());
            commands::data::handle(cmd, &service, output_format).await
        }
    }
}
