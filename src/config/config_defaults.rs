/// Upper bound for the number of samples requested per batch.
pub(super) const MAX_SAMPLES_RETRIEVED: usize = 64;
/// Upper bound for the ease-in delay applied before accepting a response.
pub(super) const MAX_EASE_IN_MS: u64 = 5_000;
pub(super) const MAX_NETWORK_ATTEMPTS: usize = 10;

/// Feature columns of the Wisconsin breast cancer records, in wire order.
const DEFAULT_FEATURES: [&str; 9] = [
    "Clump Thickness",
    "Cell Size Uniformity",
    "Cell Shape Uniformity",
    "Marginal Adhesion",
    "Single Epithelial Size",
    "Bare Nuclei",
    "Bland Chromatin",
    "Normal Nucleoli",
    "Mitoses",
];

pub(super) fn default_features() -> Vec<String> {
    DEFAULT_FEATURES.iter().map(|name| name.to_string()).collect()
}

pub(super) fn default_samples_retrieved() -> usize {
    8
}

pub(super) fn default_model_name() -> String {
    "breast_cancer_sample_network".to_string()
}

pub(super) fn default_ease_in_ms() -> u64 {
    500
}

pub(super) fn default_protocol() -> String {
    "http://".to_string()
}

pub(super) fn default_host() -> String {
    "localhost".to_string()
}

pub(super) fn default_endpoint() -> String {
    ":5000/api/v1/perceptron".to_string()
}

pub(super) fn default_max_attempts() -> usize {
    3
}

pub(super) fn default_retry_base_delay_ms() -> u64 {
    250
}

pub(super) fn default_retry_max_delay_ms() -> u64 {
    2_000
}

pub(super) fn clamp_samples_retrieved(value: usize) -> usize {
    value.clamp(1, MAX_SAMPLES_RETRIEVED)
}

pub(super) fn clamp_ease_in_ms(value: u64) -> u64 {
    value.min(MAX_EASE_IN_MS)
}

pub(super) fn clamp_max_attempts(value: usize) -> usize {
    value.clamp(1, MAX_NETWORK_ATTEMPTS)
}
