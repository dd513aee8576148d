//! Global agendo configuration.
//!
//! The only setting is the backend base URL. It is resolved from the
//! `AGENDO_BASE_URL` environment variable first, then from
//! ~/.config/agendo/config.toml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AgendoError, AgendoResult};

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "AGENDO_BASE_URL";

const CONFIG_FILE: &str = "config.toml";

/// Global configuration at ~/.config/agendo/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Build a config from a base URL, rejecting anything that is not a
    /// well-formed http(s) URL. A trailing slash is dropped so request
    /// paths can be joined with a single separator.
    pub fn new(base_url: impl Into<String>) -> AgendoResult<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed)
            .map_err(|e| AgendoError::Config(format!("Invalid base URL '{trimmed}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Config {
                base_url: trimmed.to_string(),
            }),
            other => Err(AgendoError::Config(format!(
                "Unsupported URL scheme '{other}' in base URL '{trimmed}' (expected http or https)"
            ))),
        }
    }

    /// ~/.config/agendo
    pub fn default_dir() -> AgendoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendoError::Config("Could not determine config directory".into()))?
            .join("agendo");

        Ok(config_dir)
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Read the base URL from the environment, if set to a non-empty
    /// value. An invalid value is an error rather than a silent
    /// fallback to the file.
    pub fn from_env() -> AgendoResult<Option<Self>> {
        Config::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> AgendoResult<Option<Self>> {
        match value {
            Some(value) if !value.trim().is_empty() => Config::new(value).map(Some),
            _ => Ok(None),
        }
    }

    pub fn load_from(dir: &Path) -> AgendoResult<Self> {
        let path = Config::path_in(dir);

        if !path.exists() {
            return Err(AgendoError::Config(format!(
                "No base URL configured. Set {BASE_URL_ENV} or run `agendo config set-url <URL>`"
            )));
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| {
            AgendoError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;

        // Re-validate: the file may have been edited by hand.
        Config::new(config.base_url)
    }

    /// Environment first, config file second.
    pub fn resolve_from(dir: &Path) -> AgendoResult<Self> {
        match Config::from_env()? {
            Some(config) => Ok(config),
            None => Config::load_from(dir),
        }
    }

    pub fn resolve() -> AgendoResult<Self> {
        Config::resolve_from(&Config::default_dir()?)
    }

    pub fn save_to(&self, dir: &Path) -> AgendoResult<()> {
        std::fs::create_dir_all(dir)?;

        let contents = toml::to_string_pretty(self)
            .map_err(|e| AgendoError::Serialization(e.to_string()))?;
        std::fs::write(Config::path_in(dir), contents)?;

        Ok(())
    }

    pub fn save(&self) -> AgendoResult<()> {
        self.save_to(&Config::default_dir()?)
    }
}
