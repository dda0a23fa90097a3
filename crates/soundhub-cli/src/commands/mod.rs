//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod migrate;
pub mod serve;
pub mod stats;

use clap::{Parser, Subcommand};

use soundhub_core::config::{AppConfig, StoreProvider};
use soundhub_core::error::AppError;
use soundhub_database::DatabasePool;

use crate::output::OutputFormat;

/// SoundHub admin backend
#[derive(Debug, Parser)]
#[command(name = "soundhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the SoundHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Print catalog collection counts
    Stats,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format),
            Commands::Stats => stats::execute(&self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path).map_err(|e| e.context("Failed to load config"))
}

/// Helper: connect to PostgreSQL. Offline commands need a persistent store.
pub async fn connect_database(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.store.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(format!(
            "This command needs store.provider = \"postgres\" (configured: {})",
            config.store.provider
        )));
    }
    DatabasePool::connect(&config.database).await
}
