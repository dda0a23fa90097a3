//! Configuration management commands.

use clap::{Args, Subcommand};
use serde_json::Value;

use soundhub_auth::jwt::JwtEncoder;
use soundhub_auth::password::PasswordHasher;
use soundhub_core::config::AppConfig;
use soundhub_core::error::AppError;
use soundhub_database::connection::redact_url;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
    /// Validate the configuration file
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_record(&masked(&config)?, format)?;
        }
        ConfigCommand::Validate => match super::load_config(config_path).and_then(|config| {
            JwtEncoder::new(&config.auth)?;
            PasswordHasher::from_config(&config.auth)?;
            Ok(config)
        }) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Store", &config.store.provider.to_string());
                output::print_kv("Database", &redact_url(&config.database.url));
                output::print_kv("Protect metrics", &config.auth.protect_metrics.to_string());
                output::print_kv(
                    "Bootstrap admin",
                    config
                        .auth
                        .bootstrap_admin
                        .as_ref()
                        .map_or("none", |b| b.email.as_str()),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out_path, default_config)?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

/// Serializes the config with the signing secret and database password hidden.
fn masked(config: &AppConfig) -> Result<Value, AppError> {
    let mut value = serde_json::to_value(config)?;
    if let Some(secret) = value.pointer_mut("/auth/jwt_secret") {
        *secret = Value::String("****".to_string());
    }
    if let Some(url) = value.pointer_mut("/database/url") {
        *url = Value::String(redact_url(&config.database.url));
    }
    Ok(value)
}
