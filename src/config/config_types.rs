use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config_defaults::*;
use crate::http_client::RetryConfig;

/// Client settings stored in `config.toml`.
///
/// Every field has a default so partial or older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the classification service lives.
    #[serde(default)]
    pub api: ApiSettings,
    /// Display names for the feature columns, in the order the service indexes them.
    #[serde(default = "default_features")]
    pub features: Vec<String>,
    /// Number of samples requested per batch.
    #[serde(default = "default_samples_retrieved")]
    pub samples_retrieved: usize,
    /// Network identifier sent with each classification request.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Delay applied before a service response is accepted, for pacing.
    #[serde(default = "default_ease_in_ms")]
    pub ease_in_ms: u64,
    #[serde(default)]
    pub network: NetworkSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            features: default_features(),
            samples_retrieved: default_samples_retrieved(),
            model_name: default_model_name(),
            ease_in_ms: default_ease_in_ms(),
            network: NetworkSettings::default(),
        }
    }
}

impl AppConfig {
    /// Clamp out-of-range values and fill blanks with defaults.
    pub fn normalized(mut self) -> Self {
        self.features = self
            .features
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if self.features.is_empty() {
            self.features = default_features();
        }
        self.samples_retrieved = clamp_samples_retrieved(self.samples_retrieved);
        self.ease_in_ms = clamp_ease_in_ms(self.ease_in_ms);
        self.model_name = self.model_name.trim().to_string();
        if self.model_name.is_empty() {
            self.model_name = default_model_name();
        }
        self.api = self.api.normalized();
        self.network.max_attempts = clamp_max_attempts(self.network.max_attempts);
        if self.network.retry_max_delay_ms < self.network.retry_base_delay_ms {
            self.network.retry_max_delay_ms = self.network.retry_base_delay_ms;
        }
        self
    }

    pub fn ease_in(&self) -> Duration {
        Duration::from_millis(self.ease_in_ms)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Service location, assembled as `<protocol><host><endpoint>`.
///
/// Config keys: `protocol`, `host`, `endpoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// Host the service is co-located with.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port and path suffix appended after the host.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            protocol: default_protocol(),
            host: default_host(),
            endpoint: default_endpoint(),
        }
    }
}

impl ApiSettings {
    fn normalized(mut self) -> Self {
        self.protocol = self.protocol.trim().to_string();
        if self.protocol.is_empty() {
            self.protocol = default_protocol();
        } else if !self.protocol.ends_with("://") {
            self.protocol = format!("{}://", self.protocol.trim_end_matches([':', '/']));
        }
        self.host = self.host.trim().to_string();
        if self.host.is_empty() {
            self.host = default_host();
        }
        self.endpoint = self.endpoint.trim().trim_end_matches('/').to_string();
        self
    }
}

/// Retry tuning for service calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Attempts per request, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl NetworkSettings {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
            max_delay: Duration::from_millis(self.retry_max_delay_ms),
        }
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved.
    #[error("No usable config directory: {0}")]
    AppDir(#[from] crate::app_dirs::AppDirError),
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
