use super::sample::{Classification, Sample};

/// Coarse phase of the session, derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// A sample batch request is in flight.
    LoadingSamples,
    /// No sample selected; refresh and selection accepted.
    Idle,
    SampleSelected,
    /// A classification request is in flight; everything else is blocked.
    Submitting,
    /// The selected sample has been classified; refresh or a new selection starts over.
    Answered,
}

/// What the controller needs to send for an accepted submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitTicket {
    pub index: usize,
    pub features: Vec<f64>,
}

/// Single mutable record behind the view.
///
/// Every mutation goes through one of the transition methods below; each
/// returns whether it was accepted so callers can decide whether to issue
/// network work.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    loading_samples: bool,
    loading_response: bool,
    samples: Vec<Sample>,
    revealed: Vec<bool>,
    correct: Vec<Option<bool>>,
    selected: Option<usize>,
    staged_features: Vec<f64>,
    last_classification: Option<Classification>,
    finished: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a batch load as in flight. Refused while one is already pending.
    pub fn begin_load(&mut self) -> bool {
        if self.loading_samples {
            return false;
        }
        self.loading_samples = true;
        true
    }

    /// Replace the batch and reset every per-sample and per-cycle field.
    pub fn apply_samples(&mut self, samples: Vec<Sample>) {
        let count = samples.len();
        self.samples = samples;
        self.revealed = vec![false; count];
        self.correct = vec![None; count];
        self.selected = None;
        self.staged_features.clear();
        self.last_classification = None;
        self.finished = false;
        self.loading_samples = false;
        self.loading_response = false;
    }

    /// Leave the loading state after a failed batch request, keeping the old batch.
    pub fn fail_load(&mut self) {
        self.loading_samples = false;
    }

    /// Select or deselect a sample.
    ///
    /// Ignored while anything is loading. Clicking the selected sample again
    /// deselects it, except after an answered cycle, where any click starts a
    /// fresh cycle on that sample.
    pub fn select(&mut self, index: usize) -> bool {
        if self.is_busy() {
            return false;
        }
        let Some(sample) = self.samples.get(index) else {
            return false;
        };
        let features = sample.features().to_vec();
        self.last_classification = None;
        if self.finished {
            self.finished = false;
            self.selected = Some(index);
            self.staged_features = features;
            return true;
        }
        if self.selected == Some(index) {
            self.selected = None;
            self.staged_features.clear();
        } else {
            self.selected = Some(index);
            self.staged_features = features;
        }
        true
    }

    /// Start a submission for the staged sample if the cycle allows it.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        let index = self.selected?;
        self.loading_response = true;
        Some(SubmitTicket {
            index,
            features: self.staged_features.clone(),
        })
    }

    /// Record the service answer for the submitted sample and finish the cycle.
    pub fn apply_classification(&mut self, index: usize, classification: Classification) {
        self.loading_response = false;
        let Some(sample) = self.samples.get(index) else {
            return;
        };
        let correct = classification.matches(sample);
        self.revealed[index] = true;
        self.correct[index] = Some(correct);
        self.last_classification = Some(classification);
        self.finished = true;
    }

    /// Leave the submitting state after a failed request; the selection stays for a retry.
    pub fn fail_submit(&mut self) {
        self.loading_response = false;
    }

    /// Drop selection and response state and enter the loading state.
    ///
    /// Refused while any request is pending. Revealed labels stay visible
    /// until the new batch replaces them.
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.selected = None;
        self.staged_features.clear();
        self.last_classification = None;
        self.finished = false;
        self.correct.iter_mut().for_each(|flag| *flag = None);
        self.loading_samples = true;
        true
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading_samples {
            SessionPhase::LoadingSamples
        } else if self.loading_response {
            SessionPhase::Submitting
        } else if self.finished {
            SessionPhase::Answered
        } else if self.selected.is_some() {
            SessionPhase::SampleSelected
        } else {
            SessionPhase::Idle
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.selected.is_some() && !self.finished
    }

    pub fn is_busy(&self) -> bool {
        self.loading_samples || self.loading_response
    }

    pub fn is_loading_samples(&self) -> bool {
        self.loading_samples
    }

    pub fn is_loading_response(&self) -> bool {
        self.loading_response
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn sample(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn staged_features(&self) -> &[f64] {
        &self.staged_features
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// `Some(true)` for a correct prediction, `Some(false)` for a wrong one, `None` if unanswered.
    pub fn correctness(&self, index: usize) -> Option<bool> {
        self.correct.get(index).copied().flatten()
    }

    pub fn last_classification(&self) -> Option<&Classification> {
        self.last_classification.as_ref()
    }

    /// Number of correct answers and number of answered samples in this batch.
    pub fn tally(&self) -> (usize, usize) {
        self.correct
            .iter()
            .flatten()
            .fold((0, 0), |(hits, answered), correct| {
                (hits + usize::from(*correct), answered + 1)
            })
    }
}
