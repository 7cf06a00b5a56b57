//! Application configuration
//!
//! Configuration loaded from `.counter-demo.toml`, searched in the current
//! working directory first, then in the home directory.

use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".counter-demo.toml";

/// Application configuration loaded from .counter-demo.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Counter value the store starts with
    #[serde(default)]
    pub initial_count: i64,

    /// Amount used when a command does not name one
    #[serde(default = "default_step")]
    pub step: i64,

    /// Install the logging middleware
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,

    /// Number of action labels kept in the history slice
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_step() -> i64 {
    1
}

fn default_log_actions() -> bool {
    true
}

fn default_history_limit() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            step: default_step(),
            log_actions: default_log_actions(),
            history_limit: default_history_limit(),
            log_file: None,
        }
    }
}

/// Outcome of looking up and parsing the config file
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// File the config was read from, if one was found
    pub source: Option<PathBuf>,
    /// Parse failure of `source`; `config` holds the defaults then
    pub error: Option<toml::de::Error>,
}

impl LoadedConfig {
    /// Level and message describing how the config was obtained
    pub fn report(&self) -> (log::Level, String) {
        match (&self.source, &self.error) {
            (Some(path), Some(e)) => (
                log::Level::Warn,
                format!(
                    "Failed to parse config file {}, using defaults: {}",
                    path.display(),
                    e
                ),
            ),
            (Some(path), None) => (
                log::Level::Info,
                format!("Loaded app config from {}", path.display()),
            ),
            (None, _) => (log::Level::Debug, "Using default app config".to_string()),
        }
    }

    /// Log the report; call once the logger is initialized
    pub fn log(&self) {
        let (level, message) = self.report();
        log::log!(level, "{}", message);
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Nothing is logged here since this runs before the logger is set up;
    /// see [`LoadedConfig::log`].
    pub fn load() -> LoadedConfig {
        match find_config_file() {
            Some((path, content)) => Self::parse(path, &content),
            None => LoadedConfig {
                config: Self::default(),
                source: None,
                error: None,
            },
        }
    }

    /// Parse `content` read from `path`, falling back to defaults on error
    pub fn parse(path: PathBuf, content: &str) -> LoadedConfig {
        match toml::from_str(content) {
            Ok(config) => LoadedConfig {
                config,
                source: Some(path),
                error: None,
            },
            Err(e) => LoadedConfig {
                config: Self::default(),
                source: Some(path),
                error: Some(e),
            },
        }
    }
}

/// Find and read the config file, CWD first, then home directory
fn find_config_file() -> Option<(PathBuf, String)> {
    std::iter::once(PathBuf::from(CONFIG_FILE))
        .chain(get_home_config_path())
        .find_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path, content))
        })
}

fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.initial_count, 0);
        assert_eq!(config.step, 1);
        assert!(config.log_actions);
        assert_eq!(config.history_limit, 10);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            initial_count = 5
            step = 3
            log_actions = false
            log_file = "counter.log"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.initial_count, 5);
        assert_eq!(config.step, 3);
        assert!(!config.log_actions);
        assert_eq!(config.log_file.as_deref(), Some("counter.log"));
        // history_limit should use default
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_valid_file_reports_source() {
        let loaded = AppConfig::parse(PathBuf::from(CONFIG_FILE), "step = 2");
        assert_eq!(loaded.config.step, 2);
        assert!(loaded.error.is_none());

        let (level, message) = loaded.report();
        assert_eq!(level, log::Level::Info);
        assert!(message.contains(CONFIG_FILE));
    }

    #[test]
    fn test_parse_malformed_file_reports_failure() {
        let loaded = AppConfig::parse(PathBuf::from(CONFIG_FILE), r#"step = "oops""#);

        // Falls back to defaults but keeps the error for the log
        assert_eq!(loaded.config, AppConfig::default());
        assert!(loaded.error.is_some());

        let (level, message) = loaded.report();
        assert_eq!(level, log::Level::Warn);
        assert!(message.starts_with("Failed to parse config file .counter-demo.toml"));
    }
}
