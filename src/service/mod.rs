//! Client for the remote cell-classification service.

pub mod api;
mod endpoint;
mod error;
mod wire;

pub use endpoint::ServiceEndpoint;
pub use error::ServiceError;

use crate::config::AppConfig;
use crate::http_client::RetryConfig;
use crate::session::{Classification, Sample};

/// Operations the session controller needs from the service.
///
/// Implementations are called from worker threads and may block.
pub trait ClassifierService: Send + Sync {
    /// Fetch up to `count` labeled testing samples.
    fn random_samples(&self, count: usize) -> Result<Vec<Sample>, ServiceError>;
    /// Classify one feature vector with the named network.
    fn classify(&self, model: &str, features: &[f64]) -> Result<Classification, ServiceError>;
    /// `Ok(())` when the service answers its status probe.
    fn health(&self) -> Result<(), ServiceError>;
    /// Names of the networks available for classification.
    fn list_models(&self) -> Result<Vec<String>, ServiceError>;
}

/// [`ClassifierService`] backed by the HTTP API.
#[derive(Clone, Debug)]
pub struct HttpClassifierService {
    endpoint: ServiceEndpoint,
    retry: RetryConfig,
    feature_count: usize,
}

impl HttpClassifierService {
    pub fn new(endpoint: ServiceEndpoint, retry: RetryConfig, feature_count: usize) -> Self {
        Self {
            endpoint,
            retry,
            feature_count,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        let endpoint = ServiceEndpoint::from_settings(&config.api)?;
        Ok(Self::new(
            endpoint,
            config.network.retry_config(),
            config.feature_count(),
        ))
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }
}

impl ClassifierService for HttpClassifierService {
    fn random_samples(&self, count: usize) -> Result<Vec<Sample>, ServiceError> {
        api::fetch_random_samples(&self.endpoint, self.retry, count, self.feature_count)
    }

    fn classify(&self, model: &str, features: &[f64]) -> Result<Classification, ServiceError> {
        api::classify(&self.endpoint, self.retry, model, features)
    }

    fn health(&self) -> Result<(), ServiceError> {
        api::check_status(&self.endpoint)
    }

    fn list_models(&self) -> Result<Vec<String>, ServiceError> {
        api::list_models(&self.endpoint, self.retry)
    }
}
