//! Blocking HTTP calls against the classification service.
//!
//! These run on worker threads; every call is bounded by the shared agent's
//! timeouts and retried per [`RetryConfig`] on transient failures.

use serde::Serialize;

use super::endpoint::ServiceEndpoint;
use super::{ServiceError, wire};
use crate::http_client::{self, RetryConfig};
use crate::session::{Classification, Sample};

const MAX_RECORDS_RESPONSE_BYTES: usize = 1024 * 1024;
const MAX_QUERY_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_STATUS_RESPONSE_BYTES: usize = 16 * 1024;
const MAX_METADATA_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// Request `count` random testing records.
///
/// The service returns at most `count` records; extra records are dropped.
pub fn fetch_random_samples(
    endpoint: &ServiceEndpoint,
    retry: RetryConfig,
    count: usize,
    feature_count: usize,
) -> Result<Vec<Sample>, ServiceError> {
    let request = wire::RandomRecordsRequest::testing_records(count);
    let body = post_json(
        &endpoint.random_records_url(),
        &request,
        retry,
        MAX_RECORDS_RESPONSE_BYTES,
    )?;
    let mut samples = wire::parse_records(&body, feature_count)?;
    if samples.len() > count {
        tracing::warn!(
            requested = count,
            received = samples.len(),
            "Service returned more records than requested; truncating"
        );
        samples.truncate(count);
    }
    Ok(samples)
}

/// Submit one feature vector to the named network.
pub fn classify(
    endpoint: &ServiceEndpoint,
    retry: RetryConfig,
    model: &str,
    features: &[f64],
) -> Result<Classification, ServiceError> {
    let request = wire::QueryRequest::new(model, features);
    let body = post_json(&endpoint.query_url(), &request, retry, MAX_QUERY_RESPONSE_BYTES)?;
    wire::parse_classification(&body)
}

/// Probe the root endpoint. A single attempt; the caller decides when to re-check.
pub fn check_status(endpoint: &ServiceEndpoint) -> Result<(), ServiceError> {
    let body = get_text(
        &endpoint.status_url(),
        RetryConfig::no_retry(),
        MAX_STATUS_RESPONSE_BYTES,
    )?;
    wire::parse_status(&body)
}

/// List the network names deployed on the service.
pub fn list_models(endpoint: &ServiceEndpoint, retry: RetryConfig) -> Result<Vec<String>, ServiceError> {
    let body = get_text(&endpoint.metadata_url(), retry, MAX_METADATA_RESPONSE_BYTES)?;
    wire::parse_models(&body)
}

fn post_json<T: Serialize>(
    url: &str,
    payload: &T,
    retry: RetryConfig,
    max_bytes: usize,
) -> Result<String, ServiceError> {
    let payload = serde_json::to_value(payload)
        .map_err(|err| ServiceError::MalformedResponse(format!("could not encode request: {err}")))?;
    tracing::debug!(url, "POST");
    http_client::retry_with_backoff(
        retry,
        || {
            let response = http_client::agent()
                .post(url)
                .set("Accept", "application/json")
                .set("Content-Type", "application/json")
                .send_json(payload.clone());
            read_success(response, max_bytes)
        },
        ServiceError::is_retryable,
    )
}

fn get_text(url: &str, retry: RetryConfig, max_bytes: usize) -> Result<String, ServiceError> {
    tracing::debug!(url, "GET");
    http_client::retry_with_backoff(
        retry,
        || {
            let response = http_client::agent()
                .get(url)
                .set("Accept", "application/json")
                .call();
            read_success(response, max_bytes)
        },
        ServiceError::is_retryable,
    )
}

fn read_success(
    response: Result<ureq::Response, ureq::Error>,
    max_bytes: usize,
) -> Result<String, ServiceError> {
    match response {
        Ok(response) => http_client::read_response_text(response, max_bytes)
            .map_err(|err| ServiceError::MalformedResponse(err.to_string())),
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, MAX_ERROR_BODY_BYTES)
                .unwrap_or_else(|err| err.to_string());
            Err(ServiceError::Rejected {
                code,
                message: wire::rejection_message(&body),
            })
        }
        Err(ureq::Error::Transport(err)) => Err(ServiceError::Network(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_ok, json_status, serve_once};

    fn endpoint(base: &str) -> ServiceEndpoint {
        ServiceEndpoint::parse(&format!("{base}/api/v1/perceptron")).unwrap()
    }

    #[test]
    fn random_samples_posts_filter_and_parses_records() {
        let body = r#"{"status":"OK","records":[{"0":"4","1":"2","target_class":"1"},{"0":"1","1":"1","target_class":"0"}]}"#;
        let (base, requests) = serve_once(json_ok(body));
        let samples =
            fetch_random_samples(&endpoint(&base), RetryConfig::no_retry(), 2, 2).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].features(), &[4.0, 2.0]);

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /api/v1/perceptron/records/random"));
        assert!(request.contains(r#""max":2"#));
        assert!(request.contains(r#""training_record":"False""#));
    }

    #[test]
    fn extra_records_are_truncated() {
        let body = r#"{"records":[{"0":"1","target_class":"0"},{"0":"2","target_class":"1"},{"0":"3","target_class":"0"}]}"#;
        let (base, _) = serve_once(json_ok(body));
        let samples =
            fetch_random_samples(&endpoint(&base), RetryConfig::no_retry(), 2, 1).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn classify_sends_joined_features() {
        let body = r#"{"status":"OK","identified_class":0,"raw_network_output":[[0.91,0.05]]}"#;
        let (base, requests) = serve_once(json_ok(body));
        let result = classify(
            &endpoint(&base),
            RetryConfig::no_retry(),
            "sample_net",
            &[5.0, 1.0, 2.5],
        )
        .unwrap();
        assert_eq!(result.predicted_class, 0);

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /api/v1/perceptron/query"));
        assert!(request.contains(r#""name":"sample_net""#));
        assert!(request.contains(r#""features":"5,1,2.5""#));
    }

    #[test]
    fn http_error_status_maps_to_rejected() {
        let (base, _) = serve_once(json_status(
            400,
            "Bad Request",
            r#"{"status":"record_doesnt_exist"}"#,
        ));
        let err = classify(&endpoint(&base), RetryConfig::no_retry(), "missing", &[1.0])
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Rejected {
                code: 400,
                message: "the requested network was not found".into()
            }
        );
    }

    #[test]
    fn malformed_payload_is_not_retried() {
        let (base, _) = serve_once(json_ok(r#"{"status":"OK"}"#));
        let retry = RetryConfig {
            max_attempts: 3,
            base_delay: std::time::Duration::ZERO,
            max_delay: std::time::Duration::ZERO,
        };
        let err = classify(&endpoint(&base), retry, "net", &[1.0]).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }

    #[test]
    fn unreachable_service_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = check_status(&endpoint(&format!("http://{addr}"))).unwrap_err();
        assert!(matches!(err, ServiceError::Network(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn status_and_models_use_get() {
        let (base, requests) = serve_once(json_ok(r#"{"status":"OK"}"#));
        check_status(&endpoint(&base)).unwrap();
        assert!(requests.recv().unwrap().starts_with("GET /api/v1/perceptron "));

        let body = r#"{"status":"OK","records":[{"network_id":"breast_cancer_sample_network"}]}"#;
        let (base, requests) = serve_once(json_ok(body));
        let models = list_models(&endpoint(&base), RetryConfig::no_retry()).unwrap();
        assert_eq!(models, vec!["breast_cancer_sample_network"]);
        assert!(requests.recv().unwrap().starts_with("GET /api/v1/perceptron/metadata"));
    }
}
