//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default so the server can start from an
//! empty configuration.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, BootstrapAdminConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{StoreConfig, StoreProvider};

use crate::error::AppError;

/// Prefix for environment variable overrides (`SOUNDHUB__AUTH__JWT_SECRET`).
const ENV_PREFIX: &str = "SOUNDHUB";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay + env vars).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Document store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a base TOML file.
    ///
    /// The file is optional; environment variables prefixed with
    /// `SOUNDHUB__` are layered on top.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::load_layered(path, None)
    }

    /// Load configuration from a base file plus an environment overlay.
    ///
    /// For `path = "config/default.toml"` and `env = Some("production")`
    /// the overlay is `config/production.toml`.
    pub fn load_layered(path: &str, env: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::with_name(path).required(false));

        if let Some(env) = env {
            let overlay = std::path::Path::new(path)
                .with_file_name(env)
                .to_string_lossy()
                .into_owned();
            builder = builder.add_source(config::File::with_name(&overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.store.provider, StoreProvider::Postgres);
        assert!(config.auth.protect_metrics);
        assert!(config.auth.bootstrap_admin.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let dir = std::env::temp_dir().join(format!("soundhub-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.toml");
        std::fs::write(
            &path,
            "[store]\nprovider = \"memory\"\n\n[auth]\njwt_secret = \"s3cret\"\n",
        )
        .unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.provider, StoreProvider::Memory);
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.token_ttl_minutes, 1440);
        assert_eq!(config.logging.level, "info");

        std::fs::remove_dir_all(&dir).ok();
    }
}
