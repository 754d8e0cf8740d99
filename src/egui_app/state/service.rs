/// Result of the last status probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline(String),
}

impl ServiceHealth {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Checking => "Checking",
            Self::Online => "Online",
            Self::Offline(_) => "Offline",
        }
    }
}

/// Top bar: service address, health and model picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceStatusState {
    pub address: String,
    pub health: ServiceHealth,
    /// Model used for classification requests.
    pub model: String,
    /// Networks reported by the service; empty until listed.
    pub models: Vec<String>,
    pub models_loading: bool,
    /// Model changes are refused while a submission is pending.
    pub model_locked: bool,
}
