//! Stub service and helpers for controller tests.

use super::EguiController;
use crate::config::AppConfig;
use crate::service::{ClassifierService, ServiceError};
use crate::session::{CellLabel, Classification, RawScores, Sample};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Scripted [`ClassifierService`]: each call pops the next queued answer.
///
/// An empty queue answers with a network error so forgotten scripting shows
/// up as a failure instead of a hang.
#[derive(Default)]
pub(crate) struct StubService {
    samples: Mutex<VecDeque<Result<Vec<Sample>, ServiceError>>>,
    classifications: Mutex<VecDeque<Result<Classification, ServiceError>>>,
    health: Mutex<VecDeque<Result<(), ServiceError>>>,
    models: Mutex<VecDeque<Result<Vec<String>, ServiceError>>>,
    pub(crate) sample_requests: Mutex<Vec<usize>>,
    pub(crate) classify_requests: Mutex<Vec<(String, Vec<f64>)>>,
}

impl StubService {
    pub(crate) fn push_samples(&self, result: Result<Vec<Sample>, ServiceError>) {
        lock(&self.samples).push_back(result);
    }

    pub(crate) fn push_classification(&self, result: Result<Classification, ServiceError>) {
        lock(&self.classifications).push_back(result);
    }

    pub(crate) fn push_health(&self, result: Result<(), ServiceError>) {
        lock(&self.health).push_back(result);
    }

    pub(crate) fn push_models(&self, result: Result<Vec<String>, ServiceError>) {
        lock(&self.models).push_back(result);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|err| err.into_inner())
}

fn unscripted() -> ServiceError {
    ServiceError::Network("no scripted response".into())
}

impl ClassifierService for StubService {
    fn random_samples(&self, count: usize) -> Result<Vec<Sample>, ServiceError> {
        lock(&self.sample_requests).push(count);
        lock(&self.samples).pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    fn classify(&self, model: &str, features: &[f64]) -> Result<Classification, ServiceError> {
        lock(&self.classify_requests).push((model.to_string(), features.to_vec()));
        lock(&self.classifications)
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    fn health(&self) -> Result<(), ServiceError> {
        lock(&self.health).pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    fn list_models(&self) -> Result<Vec<String>, ServiceError> {
        lock(&self.models).pop_front().unwrap_or_else(|| Err(unscripted()))
    }
}

/// Eight-sample style batch: even indices benign, odd malignant.
pub(crate) fn batch(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let label = if i % 2 == 0 {
                CellLabel::Benign
            } else {
                CellLabel::Malignant
            };
            let seed = i as f64;
            Sample::new(vec![seed, seed + 1.0], label)
        })
        .collect()
}

pub(crate) fn answer(class: u8) -> Classification {
    Classification {
        predicted_class: class,
        raw: RawScores {
            benign: if class == 0 { 0.9 } else { 0.1 },
            malignant: if class == 1 { 0.9 } else { 0.1 },
        },
    }
}

/// Settings with two features and no pacing delay.
pub(crate) fn test_settings(samples: usize) -> AppConfig {
    AppConfig {
        features: vec!["Clump Thickness".into(), "Mitoses".into()],
        samples_retrieved: samples,
        ease_in_ms: 0,
        ..AppConfig::default()
    }
}

pub(crate) fn controller_with(stub: &Arc<StubService>, samples: usize) -> EguiController {
    let service: Arc<dyn ClassifierService> = stub.clone();
    EguiController::new(test_settings(samples), service)
}

/// Tick until `done` holds, failing the test after a timeout.
pub(crate) fn tick_until(controller: &mut EguiController, mut done: impl FnMut(&EguiController) -> bool) {
    let deadline = Instant::now() + WAIT_TIMEOUT;
    loop {
        controller.tick();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for background job");
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Tick until every outstanding job has reported back.
pub(crate) fn settle(controller: &mut EguiController) {
    tick_until(controller, |controller| !controller.is_busy());
}
