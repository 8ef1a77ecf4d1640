//! YAML configuration with secrets taken from the environment

use crate::infrastructure::client::replay::{PRODUCTION_URL, STAGING_URL};
use feedstream::StreamConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const ENV_TOKEN: &str = "UOF_TOKEN";
pub const ENV_BOOKMAKER_ID: &str = "UOF_BOOKMAKER_ID";
pub const ENV_CONFIG_PATH: &str = "UOF_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/uof.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Environment variable not found: {0}")]
    EnvVarMissing(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Config file location: `UOF_CONFIG_PATH` or `config/uof.yaml`
pub fn config_path() -> PathBuf {
    std::env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub replay: ReplayConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub capture: CaptureConfig,

    /// API access token from .env (not in YAML)
    #[serde(skip)]
    pub token: Option<String>,

    /// Bookmaker id from .env (not in YAML); used by the broker connection
    #[serde(skip)]
    pub bookmaker_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub environment: Environment,
    /// Overrides the environment's API host
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_speed")]
    pub speed: u32,
    /// Cap on the gap between replayed messages, in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay: u32,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            speed: default_speed(),
            max_delay: default_max_delay(),
        }
    }
}

impl ReplayConfig {
    pub fn resolved_base_url(&self) -> &str {
        match (&self.base_url, self.environment) {
            (Some(url), _) => url,
            (None, Environment::Staging) => STAGING_URL,
            (None, Environment::Production) => PRODUCTION_URL,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Market ids whose outcomes are players
    #[serde(default)]
    pub player_markets: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_speed() -> u32 {
    100
}

fn default_max_delay() -> u32 {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./tmp")
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            replay: ReplayConfig::default(),
            stream: StreamConfig::default(),
            catalog: CatalogConfig::default(),
            capture: CaptureConfig::default(),
            token: None,
            bookmaker_id: None,
        }
    }
}

impl FeedConfig {
    /// Load configuration from YAML file and .env
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config = Self::from_yaml(&yaml_content)?;
        config.load_env_secrets();
        Ok(config)
    }

    /// Fill credentials from the environment, reading `.env` if present
    pub fn load_env_secrets(&mut self) {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist
        self.token = std::env::var(ENV_TOKEN).ok();
        self.bookmaker_id = std::env::var(ENV_BOOKMAKER_ID).ok();
    }

    /// Parse and validate without touching the environment
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: FeedConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        if self.replay.speed == 0 {
            return Err(ConfigError::ValidationError(
                "replay.speed must be greater than 0".to_string(),
            ));
        }

        if let Some(url) = &self.replay.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError(format!(
                    "replay.base_url must be an http(s) url, got {:?}",
                    url
                )));
            }
        }

        self.stream
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(())
    }

    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| ConfigError::EnvVarMissing(ENV_TOKEN.to_string()))
    }

    pub fn require_bookmaker_id(&self) -> Result<&str> {
        self.bookmaker_id
            .as_deref()
            .ok_or_else(|| ConfigError::EnvVarMissing(ENV_BOOKMAKER_ID.to_string()))
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Log level: {}", self.log_level);
        info!("  Replay API: {}", self.replay.resolved_base_url());
        info!(
            "  Replay speed: {} (max delay {} ms)",
            self.replay.speed, self.replay.max_delay
        );
        info!(
            "  Stream: capacity {}, {} decode workers",
            self.stream.channel_capacity, self.stream.decode_workers
        );
        info!("  Player markets: {}", self.catalog.player_markets.len());
        info!("  Capture dir: {}", self.capture.output_dir.display());
        info!("  Token: {}", if self.token.is_some() { "set" } else { "missing" });
    }
}
