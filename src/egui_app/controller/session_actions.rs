use super::jobs::{ClassifyJob, SampleLoadJob};
use super::*;

impl EguiController {
    /// Request a fresh batch of `count` samples.
    ///
    /// Refused while a batch is already in flight.
    pub fn load_samples(&mut self, count: usize) -> bool {
        if !self.session.begin_load() {
            tracing::debug!("Sample load already in flight");
            return false;
        }
        self.spawn_sample_load(count);
        true
    }

    /// Select or deselect a card. Ignored while anything is loading.
    pub fn select_sample(&mut self, index: usize) -> bool {
        if !self.session.select(index) {
            return false;
        }
        tracing::debug!(index, selected = ?self.session.selected(), "Sample selection changed");
        if self
            .ui
            .banner
            .as_ref()
            .is_some_and(|banner| banner.retry == Some(RetryAction::Submit))
        {
            self.ui.banner = None;
        }
        self.refresh_view();
        true
    }

    /// Send the staged sample for classification.
    ///
    /// No-op unless a sample is selected, nothing is loading and the cycle is
    /// not finished.
    pub fn submit(&mut self) -> bool {
        let Some(ticket) = self.session.begin_submit() else {
            return false;
        };
        let request_id = self.jobs.next_request_id();
        tracing::info!(
            request_id,
            index = ticket.index,
            model = %self.settings.model_name,
            "Submitting sample for classification"
        );
        self.jobs.begin_classify(ClassifyJob {
            request_id,
            index: ticket.index,
            model: self.settings.model_name.clone(),
            features: ticket.features,
            ease_in: self.settings.ease_in(),
        });
        self.set_status("Classifying sample", StatusTone::Busy);
        self.refresh_view();
        true
    }

    /// Drop the current cycle and fetch a new batch. Refused while anything is pending.
    pub fn refresh(&mut self) -> bool {
        if !self.session.begin_refresh() {
            return false;
        }
        self.ui.banner = None;
        self.spawn_sample_load(self.settings.samples_retrieved);
        true
    }

    /// Re-issue the request behind the current banner and dismiss it.
    pub fn retry_failed(&mut self) -> bool {
        let Some(action) = self.ui.banner.take().and_then(|banner| banner.retry) else {
            return false;
        };
        tracing::info!(action = action.describe(), "Retrying failed request");
        let accepted = match action {
            RetryAction::LoadSamples => self.load_samples(self.settings.samples_retrieved),
            RetryAction::Submit => self.submit(),
        };
        if !accepted {
            self.set_status(
                format!("Could not retry {}", action.describe()),
                StatusTone::Warning,
            );
        }
        accepted
    }

    pub fn dismiss_banner(&mut self) {
        self.ui.banner = None;
    }

    fn spawn_sample_load(&mut self, count: usize) {
        let request_id = self.jobs.next_request_id();
        tracing::info!(request_id, count, "Requesting sample batch");
        self.jobs.begin_sample_load(SampleLoadJob {
            request_id,
            count,
            ease_in: self.settings.ease_in(),
        });
        self.set_status("Loading samples", StatusTone::Busy);
        self.refresh_view();
    }

    /// Surface a failed request as a banner and an error status.
    pub(super) fn report_service_error(&mut self, err: &ServiceError, retry: RetryAction) {
        tracing::error!(error = %err, action = retry.describe(), "Service request failed");
        self.ui.banner = Some(ErrorBanner {
            title: err.title().to_string(),
            message: err.to_string(),
            retry: Some(retry),
        });
        self.set_status(
            format!("Failed {}: {err}", retry.describe()),
            StatusTone::Error,
        );
    }
}
