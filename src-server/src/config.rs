//! Server Configuration
//!
//! Everything is read from environment variables once at startup.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_SQLITE_PATH: &str = "zeiglist.db";
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_AIRTABLE_VIEW: &str = "Grid view";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
    pub api_url: String,
    pub view: String,
}

/// Which record store backs the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Airtable(AirtableConfig),
    Sqlite(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub store: StoreConfig,
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_string(name).unwrap_or_else(|| default.to_string())
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env_string(name).ok_or(ConfigError::Missing(name))
}

fn env_u16(name: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env_string(name) {
        Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { name, value: v }),
        None => Ok(default),
    }
}

impl StoreConfig {
    /// Parse a `ZEIGLIST_STORE` value: `airtable`, `sqlite` or `sqlite:<path>`
    pub fn parse(selector: &str) -> Result<Self, ConfigError> {
        let selector = selector.trim();
        if selector.eq_ignore_ascii_case("airtable") {
            return Ok(StoreConfig::Airtable(AirtableConfig::from_env()?));
        }
        match selector.split_once(':') {
            Some(("sqlite", path)) if !path.is_empty() => Ok(StoreConfig::Sqlite(PathBuf::from(path))),
            None if selector == "sqlite" => Ok(StoreConfig::Sqlite(PathBuf::from(DEFAULT_SQLITE_PATH))),
            _ => Err(ConfigError::Invalid {
                name: "ZEIGLIST_STORE",
                value: selector.to_string(),
            }),
        }
    }
}

impl AirtableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_required("AIRTABLE_API_KEY")?,
            base_id: env_required("AIRTABLE_BASE_ID")?,
            table_name: env_required("AIRTABLE_TABLE_NAME")?,
            api_url: env_or("AIRTABLE_API_URL", DEFAULT_AIRTABLE_API_URL),
            view: env_or("AIRTABLE_VIEW", DEFAULT_AIRTABLE_VIEW),
        })
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_u16("PORT", DEFAULT_PORT)?,
            static_dir: PathBuf::from(env_or("ZEIGLIST_STATIC_DIR", DEFAULT_STATIC_DIR)),
            store: StoreConfig::parse(&env_or("ZEIGLIST_STORE", "airtable"))?,
        })
    }
}
