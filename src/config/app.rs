//! Main application configuration
//!
//! This module defines the configuration structures for the team randomizer,
//! including environment variable and TOML file loading plus validation.

use crate::config::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub roster: RosterSettings,
    pub teams: TeamSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name shown in logs and the startup banner
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where the initial roster comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// JSON file with `{id, name, rating}` entries
    pub path: PathBuf,
}

/// Team drawing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSettings {
    /// Fixed shuffle seed; draws are replayable when set
    pub seed: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-randomizer".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/players.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still override it
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Roster settings
        if let Ok(path) = env::var("ROSTER_PATH") {
            self.roster.path = PathBuf::from(path);
        }

        // Team settings
        if let Ok(seed) = env::var("SHUFFLE_SEED") {
            self.teams.seed = Some(
                seed.parse()
                    .map_err(|_| anyhow!("Invalid SHUFFLE_SEED value: {}", seed))?,
            );
        }

        // Rating settings
        if let Ok(adjustment) = env::var("RATING_ADJUSTMENT") {
            self.rating.adjustment = adjustment
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_ADJUSTMENT value: {}", adjustment))?;
        }
        if let Ok(join_key) = env::var("RATING_JOIN_KEY") {
            self.rating.join_key = join_key.parse()?;
        }
        if let Ok(tie_policy) = env::var("RATING_TIE_POLICY") {
            self.rating.tie_policy = tie_policy.parse()?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.roster.path.as_os_str().is_empty() {
        return Err(anyhow!("Roster path cannot be empty"));
    }

    if config.rating.adjustment <= 0 {
        return Err(anyhow!("Rating adjustment must be positive"));
    }

    Ok(())
}
