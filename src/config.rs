//! Configuration management for the contact agenda.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:4567";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the contact agenda.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the backing file (default: "data")
    pub data_dir: PathBuf,

    /// Backing file name inside `data_dir` (default: "contacts.json")
    pub data_file: String,

    /// Directory for CSV exports from the menu (default: "exports")
    pub export_dir: PathBuf,

    /// Bind address for the HTTP wrapper (default: 0.0.0.0:4567)
    pub http_addr: SocketAddr,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_DATA_DIR`: Directory of the backing file (default: data)
    /// - `AGENDA_DATA_FILE`: Backing file name (default: contacts.json)
    /// - `AGENDA_EXPORT_DIR`: CSV export directory (default: exports)
    /// - `AGENDA_HTTP_ADDR`: HTTP bind address (default: 0.0.0.0:4567)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_dir = env::var("AGENDA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let data_file =
            env::var("AGENDA_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
        Self::validate_file_name("AGENDA_DATA_FILE", &data_file)?;

        let export_dir = env::var("AGENDA_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR));

        let http_addr = Self::parse_env_addr("AGENDA_HTTP_ADDR", DEFAULT_HTTP_ADDR)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir,
            data_file,
            export_dir,
            http_addr,
            log_level,
        })
    }

    /// Full path of the backing file.
    pub fn data_path(&self) -> PathBuf {
        self.data_dir.join(&self.data_file)
    }

    fn validate_file_name(var_name: &str, value: &str) -> ConfigResult<()> {
        let is_bare_name = Path::new(value)
            .file_name()
            .is_some_and(|name| name == value);
        if value.trim().is_empty() || !is_bare_name {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a bare file name, got: {:?}", value),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:4567, got: {}", raw),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            data_file: DEFAULT_DATA_FILE.to_string(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            http_addr: SocketAddr::from(([0, 0, 0, 0], 4567)),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
