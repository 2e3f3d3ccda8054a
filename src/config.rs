// Configuration module for hovertip
// This module handles loading and parsing configuration from ~/.config/hovertip/config.toml

mod types;

pub use types::{Config, DisplayConfig, TooltipConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HovertipError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/hovertip/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from `path`, falling back to defaults.
///
/// A missing file is silent; unreadable or invalid files produce a warning.
pub fn load_config_from(path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    match read_config(path) {
        Ok(Some(config)) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Ok(None) => {
            #[cfg(debug_assertions)]
            log::debug!("Config file does not exist, using defaults");
            ConfigResult {
                config: Config::default(),
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Parse the config at `path`; `Ok(None)` when there is no such file
pub fn read_config(path: &Path) -> Result<Option<Config>, HovertipError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| HovertipError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = toml::from_str::<Config>(&contents).map_err(|source| {
        HovertipError::ConfigParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(Some(config))
}

/// Render `config` as TOML
pub fn to_toml(config: &Config) -> Result<String, HovertipError> {
    Ok(toml::to_string(config)?)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/hovertip/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hovertip")
        .join("config.toml")
}
