//! Helpers to convert session state into egui-facing view structs.

use crate::egui_app::state::{
    CheckMark, FeatureRow, ResponsePanelState, SampleBoardState, SampleCardView,
};
use crate::session::{CellLabel, Classification, SessionPhase, SessionState};

/// Heading shown on a card whose label is still hidden.
pub const HIDDEN_HEADING: &str = "? ? ?";
/// Placeholder text while a classification is pending.
pub const WAITING_VERDICT: &str = "•••";

pub const PROMPT_LOADING: &str = "Loading ...";
pub const PROMPT_COMPLETE: &str = "Neural Network classification complete !";
pub const PROMPT_SELECT: &str = "Select a sample for testing ...";
pub const PROMPT_SUBMIT: &str = "Submit your sample";

/// Build the board: cards, prompt, tally and control availability.
///
/// While a batch is loading the board shows `placeholder_count` empty cards.
pub fn sample_board(
    session: &SessionState,
    feature_names: &[String],
    placeholder_count: usize,
) -> SampleBoardState {
    let phase = session.phase();
    let cards = if phase == SessionPhase::LoadingSamples {
        placeholder_cards(feature_names, placeholder_count)
    } else {
        sample_cards(session, feature_names)
    };
    let pending = matches!(
        phase,
        SessionPhase::LoadingSamples | SessionPhase::Submitting
    );
    SampleBoardState {
        cards,
        prompt: prompt_message(session).to_string(),
        tally: tally_label(session),
        submit_enabled: phase == SessionPhase::SampleSelected,
        refresh_enabled: !pending,
        cards_enabled: !pending,
    }
}

/// Cards for the loaded batch.
pub fn sample_cards(session: &SessionState, feature_names: &[String]) -> Vec<SampleCardView> {
    session
        .samples()
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let revealed = session.is_revealed(index);
            let selected = session.selected() == Some(index);
            SampleCardView {
                index,
                heading: if revealed {
                    sample.label().to_string()
                } else {
                    HIDDEN_HEADING.to_string()
                },
                revealed_label: revealed.then_some(sample.label()),
                check: session.correctness(index).map(CheckMark::from_correctness),
                features: feature_rows(feature_names, Some(sample.features())),
                selected,
                done: selected && session.is_finished(),
                placeholder: false,
            }
        })
        .collect()
}

/// Empty cards shown while a batch is in flight.
pub fn placeholder_cards(feature_names: &[String], count: usize) -> Vec<SampleCardView> {
    (0..count)
        .map(|index| SampleCardView {
            index,
            heading: CellLabel::Unknown.to_string(),
            revealed_label: None,
            check: None,
            features: feature_rows(feature_names, None),
            selected: false,
            done: false,
            placeholder: true,
        })
        .collect()
}

fn feature_rows(names: &[String], values: Option<&[f64]>) -> Vec<FeatureRow> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| FeatureRow {
            name: name.clone(),
            value: values
                .and_then(|values| values.get(index))
                .map(|value| format_feature(*value))
                .unwrap_or_default(),
        })
        .collect()
}

/// Feature values print without a trailing `.0` for whole numbers.
pub fn format_feature(value: f64) -> String {
    value.to_string()
}

/// Prompt line reflecting where the user is in the cycle.
pub fn prompt_message(session: &SessionState) -> &'static str {
    match session.phase() {
        SessionPhase::LoadingSamples | SessionPhase::Submitting => PROMPT_LOADING,
        SessionPhase::Answered => PROMPT_COMPLETE,
        SessionPhase::Idle => PROMPT_SELECT,
        SessionPhase::SampleSelected => PROMPT_SUBMIT,
    }
}

/// "AI Classification" panel contents.
pub fn response_panel(session: &SessionState) -> ResponsePanelState {
    let mut panel = ResponsePanelState::default();
    if session.is_loading_response() {
        panel.verdict = WAITING_VERDICT.to_string();
        panel.waiting = true;
    } else if !session.is_loading_samples() && session.is_finished() {
        if let Some(classification) = session.last_classification() {
            let label = classification.predicted_label();
            panel.verdict = label.to_string();
            panel.predicted = Some(label);
        }
    }
    if let Some(classification) = session.last_classification() {
        let (benign, malignant) = confidence_lines(classification);
        panel.benign_line = Some(benign);
        panel.malignant_line = Some(malignant);
    }
    panel
}

/// Raw network outputs, two decimals each.
pub fn confidence_lines(classification: &Classification) -> (String, String) {
    (
        format!("Benign Conf. → {:.2}", classification.raw.benign),
        format!("Malignant Conf. → {:.2}", classification.raw.malignant),
    )
}

/// `n / m correct` over the classified samples of the current batch.
pub fn tally_label(session: &SessionState) -> Option<String> {
    let (correct, answered) = session.tally();
    (answered > 0).then(|| format!("{correct} / {answered} correct"))
}
