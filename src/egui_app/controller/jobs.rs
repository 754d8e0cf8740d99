use crate::service::{ClassifierService, ServiceError};
use crate::session::{Classification, Sample};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
    time::Duration,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    SamplesLoaded(SampleLoadResult),
    Classified(ClassifyResult),
    HealthChecked(HealthCheckResult),
    ModelsListed(ModelListResult),
}

#[derive(Debug, Clone)]
pub(crate) struct SampleLoadJob {
    pub(super) request_id: u64,
    pub(super) count: usize,
    pub(super) ease_in: Duration,
}

#[derive(Debug)]
pub(crate) struct SampleLoadResult {
    pub(super) request_id: u64,
    pub(super) requested: usize,
    pub(super) result: Result<Vec<Sample>, ServiceError>,
}

#[derive(Debug, Clone)]
pub(crate) struct ClassifyJob {
    pub(super) request_id: u64,
    pub(super) index: usize,
    pub(super) model: String,
    pub(super) features: Vec<f64>,
    pub(super) ease_in: Duration,
}

#[derive(Debug)]
pub(crate) struct ClassifyResult {
    pub(super) request_id: u64,
    pub(super) index: usize,
    pub(super) result: Result<Classification, ServiceError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(super) result: Result<(), ServiceError>,
}

#[derive(Debug)]
pub(crate) struct ModelListResult {
    pub(super) result: Result<Vec<String>, ServiceError>,
}

/// Worker threads for service calls and the channel they report on.
///
/// At most one job of each kind is outstanding. Load and classify jobs carry
/// a request id so a result that no longer matches the pending request can be
/// recognised and dropped.
pub(crate) struct ControllerJobs {
    service: Arc<dyn ClassifierService>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pending_load: Option<u64>,
    pending_classify: Option<u64>,
    health_check_in_progress: bool,
    model_list_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new(service: Arc<dyn ClassifierService>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            service,
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_load: None,
            pending_classify: None,
            health_check_in_progress: false,
            model_list_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        id
    }

    pub(super) fn begin_sample_load(&mut self, job: SampleLoadJob) {
        if self.pending_load.is_some() {
            return;
        }
        self.pending_load = Some(job.request_id);
        let tx = self.message_tx.clone();
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            if !job.ease_in.is_zero() {
                thread::sleep(job.ease_in);
            }
            let result = service.random_samples(job.count);
            let _ = tx.send(JobMessage::SamplesLoaded(SampleLoadResult {
                request_id: job.request_id,
                requested: job.count,
                result,
            }));
        });
    }

    /// Clear the pending load if `request_id` matches it; `false` marks a stale result.
    pub(super) fn finish_sample_load(&mut self, request_id: u64) -> bool {
        if self.pending_load != Some(request_id) {
            return false;
        }
        self.pending_load = None;
        true
    }

    pub(super) fn begin_classify(&mut self, job: ClassifyJob) {
        if self.pending_classify.is_some() {
            return;
        }
        self.pending_classify = Some(job.request_id);
        let tx = self.message_tx.clone();
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            if !job.ease_in.is_zero() {
                thread::sleep(job.ease_in);
            }
            let result = service.classify(&job.model, &job.features);
            let _ = tx.send(JobMessage::Classified(ClassifyResult {
                request_id: job.request_id,
                index: job.index,
                result,
            }));
        });
    }

    pub(super) fn finish_classify(&mut self, request_id: u64) -> bool {
        if self.pending_classify != Some(request_id) {
            return false;
        }
        self.pending_classify = None;
        true
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn begin_health_check(&mut self) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result = service.health();
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }

    pub(super) fn model_list_in_progress(&self) -> bool {
        self.model_list_in_progress
    }

    pub(super) fn begin_model_list(&mut self) {
        if self.model_list_in_progress {
            return;
        }
        self.model_list_in_progress = true;
        let tx = self.message_tx.clone();
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result = service.list_models();
            let _ = tx.send(JobMessage::ModelsListed(ModelListResult { result }));
        });
    }

    pub(super) fn clear_model_list(&mut self) {
        self.model_list_in_progress = false;
    }

    /// Whether any job is still expected to report back.
    pub(super) fn any_in_progress(&self) -> bool {
        self.pending_load.is_some()
            || self.pending_classify.is_some()
            || self.health_check_in_progress
            || self.model_list_in_progress
    }
}
