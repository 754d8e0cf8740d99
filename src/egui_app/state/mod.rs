//! Shared state types for the egui UI.

mod banner;
mod board;
mod response;
mod service;
mod status;

pub use banner::*;
pub use board::*;
pub use response::*;
pub use service::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
///
/// Rebuilt from the session after every accepted action or job result; the
/// renderer never reads the session directly.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub board: SampleBoardState,
    pub response: ResponsePanelState,
    /// Last surfaced service failure, if not yet dismissed.
    pub banner: Option<ErrorBanner>,
    pub service: ServiceStatusState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            board: SampleBoardState::default(),
            response: ResponsePanelState::default(),
            banner: None,
            service: ServiceStatusState::default(),
        }
    }
}
