//! Session controller bridging the classification service and the egui UI.

mod background_jobs;
mod jobs;
mod service_status;
mod session_actions;
#[cfg(test)]
pub(crate) mod test_support;

use crate::config::{self, AppConfig};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;
use crate::service::{ClassifierService, HttpClassifierService, ServiceError};
use crate::session::SessionState;
use jobs::ControllerJobs;
use std::path::PathBuf;
use std::sync::Arc;

/// Maintains the session and bridges service calls to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    session: SessionState,
    settings: AppConfig,
    /// Where model changes are persisted; `None` uses the default config location.
    config_path: Option<PathBuf>,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(settings: AppConfig, service: Arc<dyn ClassifierService>) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            session: SessionState::new(),
            settings,
            config_path: None,
            jobs: ControllerJobs::new(service),
        };
        controller.ui.service.model = controller.settings.model_name.clone();
        controller.refresh_view();
        controller
    }

    /// Build a controller talking to the HTTP service described by `settings`.
    pub fn from_config(settings: AppConfig) -> Result<Self, ServiceError> {
        let service = HttpClassifierService::from_config(&settings)?;
        let address = service.endpoint().status_url();
        let mut controller = Self::new(settings, Arc::new(service));
        controller.ui.service.address = address;
        Ok(controller)
    }

    /// Persist model changes to `path` instead of the default config file.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Issue the initial batch request and probe the service.
    pub fn start(&mut self) {
        tracing::info!(
            samples = self.settings.samples_retrieved,
            model = %self.settings.model_name,
            "Starting classification session"
        );
        self.load_samples(self.settings.samples_retrieved);
        self.check_service_health();
        self.refresh_models();
    }

    /// Apply finished background work; call once per frame.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    /// Whether background work is outstanding and the UI should keep repainting.
    pub fn is_busy(&self) -> bool {
        self.session.is_busy() || self.jobs.any_in_progress()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn settings(&self) -> &AppConfig {
        &self.settings
    }

    /// Rebuild the board and response panel from the session.
    fn refresh_view(&mut self) {
        self.ui.board = view_model::sample_board(
            &self.session,
            &self.settings.features,
            self.settings.samples_retrieved,
        );
        self.ui.response = view_model::response_panel(&self.session);
        self.ui.service.model_locked = self.session.is_loading_response();
    }

    fn save_settings(&self) -> Result<(), config::ConfigError> {
        match &self.config_path {
            Some(path) => config::save_to_path(&self.settings, path),
            None => config::save(&self.settings),
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }
}
