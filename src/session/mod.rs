//! Client-side session model: the sample batch plus the select/submit/answer cycle.

mod sample;
mod state;

pub use sample::{CellLabel, Classification, RawScores, Sample};
pub use state::{SessionPhase, SessionState, SubmitTicket};

#[cfg(test)]
mod tests;
