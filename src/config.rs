//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override (`TRADELOG_DB`) for the database location, so tests and scripts
//! can point the CLI at a scratch database without editing files.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// The local account that owns every journal entry this CLI records.
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Database location.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Default journal database under the platform's local data directory.
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradelog")
        .join("journal.db")
}

/// The identity that owns this journal.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Demo User".into(),
            email: "demo@crypto.com".into(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A missing config file is normal for first runs; an unreadable or
    /// malformed one is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db) = std::env::var("TRADELOG_DB") {
            self.database.path = PathBuf::from(db);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.is_empty() {
            return Err(ConfigError::MissingField {
                field: "profile.name",
            }
            .into());
        }
        if self.profile.email.is_empty() {
            return Err(ConfigError::MissingField {
                field: "profile.email",
            }
            .into());
        }
        if !self.profile.email.contains('@') {
            return Err(ConfigError::InvalidValue {
                field: "profile.email",
                reason: "not an email address".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Database URL for the SQLite connection manager.
    #[must_use]
    pub fn database_url(&self) -> String {
        self.database.path.display().to_string()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.profile.email, "demo@crypto.com");
    }

    #[test]
    fn parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "/tmp/journal.db"

            [logging]
            level = "debug"
            format = "json"

            [profile]
            name = "Ada"
            email = "ada@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/tmp/journal.db"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.profile.name, "Ada");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.profile.name, "Demo User");
    }

    #[test]
    fn rejects_profile_without_at_sign() {
        let mut config = Config::default();
        config.profile.email = "not-an-email".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_profile_name() {
        let mut config = Config::default();
        config.profile.name = String::new();
        assert!(config.validate().is_err());
    }
}
