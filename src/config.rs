use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, UserDirError};

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
/// Environment variable read into `--api-url`.
pub const API_URL_ENV: &str = "USERDIR_API_URL";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub api_url: Option<String>,
    pub submit_delay_ms: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| UserDirError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UserDirError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdir")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserDirError::NoConfigDir)
    }

    /// API URL: explicit argument (flag or env var), then config file, then
    /// the public default.
    pub fn api_url(&self, explicit: Option<&str>) -> Result<Url> {
        let raw = explicit
            .map(String::from)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Url::parse(&raw).map_err(|source| UserDirError::InvalidApiUrl { url: raw, source })
    }

    /// Simulated latency before an added user is committed.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }
}
