use super::*;

impl EguiController {
    /// Probe the service root and update the top bar indicator.
    pub fn check_service_health(&mut self) {
        if self.jobs.health_check_in_progress() {
            return;
        }
        self.ui.service.health = ServiceHealth::Checking;
        self.jobs.begin_health_check();
    }

    /// Ask the service which networks it can classify with.
    pub fn refresh_models(&mut self) {
        if self.jobs.model_list_in_progress() {
            return;
        }
        self.ui.service.models_loading = true;
        self.jobs.begin_model_list();
    }

    /// Switch the network used for future submissions and persist the choice.
    ///
    /// Refused while a submission is pending so the answer always belongs to
    /// the model that was shown when it was sent.
    pub fn select_model(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.settings.model_name {
            return false;
        }
        if self.session.is_loading_response() {
            self.set_status(
                "Wait for the pending classification before switching models",
                StatusTone::Warning,
            );
            return false;
        }
        tracing::info!(
            from = %self.settings.model_name,
            to = name,
            "Switching classification model"
        );
        self.settings.model_name = name.to_string();
        self.ui.service.model = self.settings.model_name.clone();
        match self.save_settings() {
            Ok(()) => self.set_status(format!("Using model {name}"), StatusTone::Info),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to persist model choice");
                self.set_status(
                    format!("Using model {name} (not saved: {err})"),
                    StatusTone::Warning,
                );
            }
        }
        true
    }

    pub(super) fn apply_health_result(&mut self, result: Result<(), ServiceError>) {
        self.ui.service.health = match result {
            Ok(()) => {
                tracing::info!("Classification service online");
                ServiceHealth::Online
            }
            Err(err) => {
                tracing::warn!(error = %err, "Classification service health check failed");
                ServiceHealth::Offline(err.to_string())
            }
        };
    }

    pub(super) fn apply_model_list(&mut self, result: Result<Vec<String>, ServiceError>) {
        self.ui.service.models_loading = false;
        match result {
            Ok(models) => {
                if !models.is_empty() && !models.contains(&self.settings.model_name) {
                    tracing::warn!(
                        model = %self.settings.model_name,
                        available = models.len(),
                        "Configured model is not listed by the service"
                    );
                }
                self.ui.service.models = models;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list models");
                self.ui.service.models.clear();
            }
        }
    }
}
