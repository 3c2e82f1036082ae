//! Configuration loading for the regime matrix service
//!
//! Supports JSON configuration files for:
//! - Server bind address
//! - Matrix defaults (step size, smoothing, stress labels, vocabulary)
//! - Seed regime observations loaded into the sample source at startup

use crate::domain::{DEFAULT_ALPHA, DEFAULT_STEP_DAYS, MAX_STEP_DAYS, RegimeLabel, Sample};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Service name shown in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Matrix computation defaults
    #[serde(default)]
    pub matrix: MatrixConfig,

    /// Observations loaded into the sample source on startup
    #[serde(default)]
    pub seed_samples: Vec<Sample>,
}

fn default_name() -> String {
    "Regime Transition Matrix Engine".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            server: ServerConfig::default(),
            matrix: MatrixConfig::default(),
            seed_samples: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Override the bind address (`HOST` / `PORT` environment variables)
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT '{}' is not a valid port", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let matrix = &self.matrix;
        if !matrix.alpha.is_finite() || matrix.alpha < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "matrix.alpha must be finite and >= 0, got {}",
                matrix.alpha
            )));
        }
        if matrix.step_days == 0 || matrix.step_days > MAX_STEP_DAYS {
            return Err(ConfigError::Invalid(format!(
                "matrix.step_days must be between 1 and {}, got {}",
                MAX_STEP_DAYS, matrix.step_days
            )));
        }
        if let Some(vocabulary) = &matrix.vocabulary {
            if vocabulary.is_empty() {
                return Err(ConfigError::Invalid(
                    "matrix.vocabulary must not be empty when set".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Defaults applied when a compute or read request leaves a field out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    #[serde(default = "default_step_days")]
    pub step_days: u32,

    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Labels treated as stress when a read names none
    #[serde(default = "default_stress_labels")]
    pub stress_labels: Vec<RegimeLabel>,

    /// Fixed matrix vocabulary for compute requests that send no `labels`
    #[serde(default)]
    pub vocabulary: Option<Vec<RegimeLabel>>,
}

fn default_step_days() -> u32 {
    DEFAULT_STEP_DAYS
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_stress_labels() -> Vec<RegimeLabel> {
    vec![RegimeLabel::risk_off_stress()]
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            step_days: default_step_days(),
            alpha: default_alpha(),
            stress_labels: default_stress_labels(),
            vocabulary: None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
