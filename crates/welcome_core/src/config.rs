//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve database path, log level and log directory from the environment.
//! - Apply build-mode defaults for anything left unset.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - The resolved log directory is always absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding the state database path.
pub const ENV_DB_PATH: &str = "WELCOME_MENU_DB_PATH";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "WELCOME_MENU_LOG_LEVEL";
/// Environment variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "WELCOME_MENU_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "welcome_menu.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "welcome_menu_logs";

/// Errors from configuration resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Log level is not a supported name.
    InvalidLogLevel(String),
    /// Log directory is not absolute.
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log directory must be absolute, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let db_path = value(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = match value(ENV_LOG_LEVEL) {
            Some(raw) => normalize_level(&raw).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };
        let log_dir = value(ENV_LOG_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));
        if !log_dir.is_absolute() {
            return Err(ConfigError::RelativeLogDir(log_dir));
        }

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_DB_PATH, "  ")])).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert!(config.db_path.ends_with("welcome_menu.sqlite3"));
        assert!(config.log_dir.is_absolute());
    }

    #[test]
    fn overrides_are_normalized() {
        let log_dir = std::env::temp_dir().join("welcome-config-test");
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/var/lib/welcome/state.db"),
            (ENV_LOG_LEVEL, " Warning "),
            (ENV_LOG_DIR, log_dir.to_str().unwrap()),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/welcome/state.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, log_dir);
    }

    #[test]
    fn rejects_bad_level_and_relative_log_dir() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));

        let err = AppConfig::from_lookup(lookup(&[(ENV_LOG_DIR, "logs")])).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir(PathBuf::from("logs")));
    }
}
