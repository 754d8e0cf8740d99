use thiserror::Error;

/// Failures talking to the classification service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The configured protocol/host/endpoint do not form a usable URL.
    #[error("Invalid service address {address}: {reason}")]
    InvalidEndpoint { address: String, reason: String },
    /// Transport failure: refused connection, DNS, timeout.
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered, but the payload lacked or mangled expected fields.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// The service returned an HTTP error status.
    #[error("Service rejected request (HTTP {code}): {message}")]
    Rejected { code: u16, message: String },
}

impl ServiceError {
    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Rejected { code, .. } => *code >= 500,
            Self::InvalidEndpoint { .. } | Self::MalformedResponse(_) => false,
        }
    }

    /// Short heading for banners.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "Service address invalid",
            Self::Network(_) => "Classification service unreachable",
            Self::MalformedResponse(_) => "Unexpected service response",
            Self::Rejected { .. } => "Request rejected",
        }
    }
}

/// Translate the service's `status` codes into readable text.
pub(crate) fn describe_status(status: &str) -> String {
    let text = match status {
        "error" => "the service reported an error",
        "error_invalid_values" => "feature values were not accepted",
        "error_no_network_id_provided" => "no network name was provided",
        "error_missing_arguments" => "required arguments were missing",
        "error_entry_already_exists" => "the entry already exists",
        "no_cached_changes" => "there were no cached changes",
        "record_doesnt_exist" => "the requested network was not found",
        "debug_endpoints_disabled" => "debug endpoints are disabled",
        "404_NOT_FOUND" => "endpoint not found",
        other => return other.to_string(),
    };
    text.to_string()
}
