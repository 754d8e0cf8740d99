use super::jobs::{ClassifyResult, JobMessage, SampleLoadResult};
use super::*;

impl EguiController {
    pub(in crate::egui_app::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::SamplesLoaded(message) => self.apply_sample_load(message),
                JobMessage::Classified(message) => self.apply_classify(message),
                JobMessage::HealthChecked(message) => {
                    self.jobs.clear_health_check();
                    self.apply_health_result(message.result);
                }
                JobMessage::ModelsListed(message) => {
                    self.jobs.clear_model_list();
                    self.apply_model_list(message.result);
                }
            }
        }
    }

    fn apply_sample_load(&mut self, message: SampleLoadResult) {
        if !self.jobs.finish_sample_load(message.request_id) {
            tracing::warn!(
                request_id = message.request_id,
                "Dropping stale sample batch"
            );
            return;
        }
        match message.result {
            Ok(samples) => {
                if samples.len() < message.requested {
                    tracing::warn!(
                        requested = message.requested,
                        received = samples.len(),
                        "Service returned fewer samples than requested"
                    );
                }
                let count = samples.len();
                self.session.apply_samples(samples);
                tracing::info!(count, "Sample batch loaded");
                self.ui.banner = None;
                if count == 0 {
                    self.set_status("The service returned no samples", StatusTone::Warning);
                } else {
                    self.set_status(format!("Loaded {count} samples"), StatusTone::Info);
                }
            }
            Err(err) => {
                self.session.fail_load();
                self.report_service_error(&err, RetryAction::LoadSamples);
            }
        }
        self.refresh_view();
    }

    fn apply_classify(&mut self, message: ClassifyResult) {
        if !self.jobs.finish_classify(message.request_id) {
            tracing::warn!(
                request_id = message.request_id,
                "Dropping stale classification"
            );
            return;
        }
        match message.result {
            Ok(classification) => {
                self.session
                    .apply_classification(message.index, classification);
                let correct = self.session.correctness(message.index);
                tracing::info!(
                    index = message.index,
                    predicted = %classification.predicted_label(),
                    ?correct,
                    "Classification received"
                );
                self.ui.banner = None;
                let verdict = match correct {
                    Some(true) => "correct",
                    Some(false) => "incorrect",
                    None => "unscored",
                };
                self.set_status(
                    format!(
                        "Classified as {} ({verdict})",
                        classification.predicted_label()
                    ),
                    StatusTone::Info,
                );
            }
            Err(err) => {
                self.session.fail_submit();
                self.report_service_error(&err, RetryAction::Submit);
            }
        }
        self.refresh_view();
    }
}
