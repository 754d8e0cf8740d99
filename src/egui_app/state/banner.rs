/// Request re-issued by the banner's Retry button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryAction {
    LoadSamples,
    Submit,
}

impl RetryAction {
    pub fn describe(self) -> &'static str {
        match self {
            Self::LoadSamples => "loading samples",
            Self::Submit => "classifying the sample",
        }
    }
}

/// Dismissible error banner for a failed service request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    pub title: String,
    pub message: String,
    pub retry: Option<RetryAction>,
}
