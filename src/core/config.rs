use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::category::DEFAULT_BASE_URL;
use crate::core::dirs::get_config_directory;
use crate::core::error::NavigatorError;

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "SWAPI_BASE_URL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavigatorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Upper bound on pages walked when aggregating a category for search
    pub max_aggregate_pages: usize,
    pub user_agent: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_aggregate_pages: 100,
            user_agent: format!("swapi-navigator/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl NavigatorConfig {
    pub fn config_file() -> Result<PathBuf, NavigatorError> {
        Ok(get_config_directory()?.join("config.json"))
    }

    /// Load the user config, falling back to defaults when no file exists,
    /// then apply the environment override.
    pub fn load() -> Result<Self, NavigatorError> {
        let mut config = match Self::config_file() {
            Ok(path) => Self::load_from(&path)?,
            Err(e) => {
                log::debug!("No config directory ({e}), using defaults");
                Self::default()
            }
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                log::debug!("Using {BASE_URL_ENV}={base_url}");
                config.base_url = base_url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, NavigatorError> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| NavigatorError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    pub fn validate(&self) -> Result<(), NavigatorError> {
        url::Url::parse(&self.base_url)?;
        if self.max_aggregate_pages == 0 {
            return Err(NavigatorError::config_error("max_aggregate_pages must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(NavigatorError::config_error("timeout_secs must be at least 1"));
        }
        Ok(())
    }
}
