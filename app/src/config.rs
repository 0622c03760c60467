use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

use crate::store_models::DoorId;

/// Baked into the bundle at build time; edit and rebuild to point the app at
/// another API.
const CONFIG_TOML: &str = include_str!("../config.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URI of the doors collection, without trailing slash.
    pub api_uri: String,
    /// Door opened on start.
    pub door_id: DoorId,
    /// How long the success message stays up.
    pub success_timeout_ms: u32,
    /// trace, debug, info, warn, error or off
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_uri: String::from("http://localhost:8000/doors"),
            door_id: DoorId::from("1"),
            success_timeout_ms: 3000,
            log_level: String::from("info"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Problem parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Unknown log level {0:?}")]
    InvalidLogLevel(String),
}

impl Config {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(source)?;
    config.level_filter()?;
    Ok(config)
}

pub fn read_config() -> Result<Config, ConfigError> {
    parse_config(CONFIG_TOML)
}
