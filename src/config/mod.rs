use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::report::Period;
use crate::settings::DEFAULT_USER;

const APP_DIR: &str = "expensedb";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    /// Directory holding the JSON documents
    #[serde(default = "default_data_dir")]
    pub(crate) data_dir: PathBuf,

    /// User whose documents are read and written when `--user` is not given
    #[serde(default = "default_user")]
    pub(crate) user: String,

    /// Number of expenses in the dashboard's recent list
    #[serde(default = "default_recent_count")]
    pub(crate) recent_count: usize,

    #[serde(default = "default_period")]
    pub(crate) default_period: Period,
}

fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR),
        None => PathBuf::from(".expensedb"),
    }
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_recent_count() -> usize {
    5
}

fn default_period() -> Period {
    Period::Month
}

#[derive(Debug)]
pub(crate) enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    InvalidToml(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => write!(f, "unable to read config {}: {}", path.display(), e),
            ConfigError::InvalidToml(path, e) => write!(f, "invalid config {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            user: default_user(),
            recent_count: default_recent_count(),
            default_period: default_period(),
        }
    }
}

impl Config {
    /// Default location of the config file, `<config dir>/expensedb/config.toml`
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from a TOML file. A missing file gives the default config.
    pub(crate) fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
        if !path.is_file() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        Config::parse(&content).map_err(|e| ConfigError::InvalidToml(path.to_path_buf(), e))
    }

    fn parse(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str::<Config>(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(r#"
            data_dir = "/tmp/expenses"
            user = "alice"
            recent_count = 10
            default_period = "today"
        "#).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/expenses"));
        assert_eq!(config.user, "alice");
        assert_eq!(config.recent_count, 10);
        assert_eq!(config.default_period, Period::Today);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.user, "default");
        assert_eq!(config.recent_count, 5);
        assert_eq!(config.default_period, Period::Month);
        assert!(config.data_dir.ends_with("expensedb") || config.data_dir.ends_with(".expensedb"));
    }

    #[test]
    fn test_parse_invalid_period() {
        assert!(Config::parse(r#"default_period = "week""#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from_file(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(config.user, "default");
    }
}
