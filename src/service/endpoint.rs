use url::Url;

use super::ServiceError;
use crate::config::ApiSettings;

/// Resolved base URL of the classification service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: String,
}

impl ServiceEndpoint {
    /// Assemble `<protocol><host><endpoint>` and validate it.
    pub fn from_settings(api: &ApiSettings) -> Result<Self, ServiceError> {
        let address = format!("{}{}{}", api.protocol, api.host, api.endpoint);
        Self::parse(&address)
    }

    pub fn parse(address: &str) -> Result<Self, ServiceError> {
        let invalid = |reason: String| ServiceError::InvalidEndpoint {
            address: address.to_string(),
            reason,
        };
        let url = Url::parse(address).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(Self {
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Root endpoint; answers `{"status": "OK"}` when the service is healthy.
    pub fn status_url(&self) -> String {
        self.base.clone()
    }

    pub fn random_records_url(&self) -> String {
        format!("{}/records/random", self.base)
    }

    pub fn query_url(&self) -> String {
        format!("{}/query", self.base)
    }

    pub fn metadata_url(&self) -> String {
        format!("{}/metadata", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_protocol_host_and_suffix() {
        let endpoint = ServiceEndpoint::from_settings(&ApiSettings::default()).unwrap();
        assert_eq!(endpoint.status_url(), "http://localhost:5000/api/v1/perceptron");
        assert_eq!(
            endpoint.random_records_url(),
            "http://localhost:5000/api/v1/perceptron/records/random"
        );
        assert_eq!(
            endpoint.query_url(),
            "http://localhost:5000/api/v1/perceptron/query"
        );
        assert_eq!(
            endpoint.metadata_url(),
            "http://localhost:5000/api/v1/perceptron/metadata"
        );
    }

    #[test]
    fn bare_host_has_no_trailing_slash() {
        let endpoint = ServiceEndpoint::parse("https://classifier.example/").unwrap();
        assert_eq!(endpoint.query_url(), "https://classifier.example/query");
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = ServiceEndpoint::parse("ftp://localhost/api").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEndpoint { .. }));
    }

    #[test]
    fn rejects_garbage_addresses() {
        let api = ApiSettings {
            protocol: "http://".into(),
            host: "bad host".into(),
            endpoint: String::new(),
        };
        assert!(ServiceEndpoint::from_settings(&api).is_err());
    }
}
