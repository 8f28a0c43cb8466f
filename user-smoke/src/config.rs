use std::{collections::HashMap, path::Path, time::Duration};

use serde::Deserialize;
use user_backend::UserApi;

use crate::SmokeError;

/// Run configuration. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    pub backend: BackendConfig,
    pub fixtures: Fixtures,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// No timeout when absent; a hung request then hangs the run.
    pub timeout_secs: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: user_backend::consts::BASE_URL.to_string(),
            timeout_secs: None,
            headers: None,
        }
    }
}

/// Literal inputs fed to the driver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub wallet_address: String,
    pub wallet_type: String,
    pub user_id: String,
    pub nonexistent_user_id: String,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            wallet_address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            wallet_type: "ecdsa".to_string(),
            user_id: "abcd1234".to_string(),
            nonexistent_user_id: "nonexistent1234".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Also write to `<dir>/user-smoke.log` when set.
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: user_utils::log::DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}

impl LogConfig {
    pub fn init(&self) -> Result<(), SmokeError> {
        match &self.dir {
            Some(dir) => user_utils::log::file::init_log(dir, Some(self.level.as_str()))?,
            None => user_utils::init_log(user_utils::parse_func::level_from_str(&self.level)?),
        }
        Ok(())
    }
}

impl SmokeConfig {
    pub fn new(config_content: &str) -> Result<Self, SmokeError> {
        let config: SmokeConfig = if config_content.trim().is_empty() {
            SmokeConfig::default()
        } else {
            user_utils::serde_func::serde_yaml_from_str(config_content)
                .map_err(|e| SmokeError::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SmokeError> {
        let content = std::fs::read_to_string(path)?;
        Self::new(&content)
    }

    pub fn validate(&self) -> Result<(), SmokeError> {
        user_utils::parse_func::base_url_from_str(&self.backend.base_url)
            .map_err(|e| SmokeError::Config(format!("backend.base_url: {e}")))?;
        user_utils::parse_func::level_from_str(&self.log.level)
            .map_err(|e| SmokeError::Config(format!("log.level: {e}")))?;
        if self.backend.timeout_secs == Some(0) {
            return Err(SmokeError::Config(
                "backend.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.backend.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the client handle the driver runs against.
    pub fn user_api(&self) -> Result<UserApi, SmokeError> {
        let api = UserApi::new(
            Some(self.backend.base_url.clone()),
            self.backend.headers.clone(),
            self.timeout(),
        )?;
        Ok(api)
    }
}
