use super::*;

fn sample(label: CellLabel, seed: f64) -> Sample {
    Sample::new(vec![seed, seed + 1.0, seed + 2.0], label)
}

fn batch(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let label = if i % 2 == 0 {
                CellLabel::Benign
            } else {
                CellLabel::Malignant
            };
            sample(label, i as f64)
        })
        .collect()
}

fn loaded(count: usize) -> SessionState {
    let mut state = SessionState::new();
    assert!(state.begin_load());
    state.apply_samples(batch(count));
    state
}

fn answer(class: u8) -> Classification {
    Classification {
        predicted_class: class,
        raw: RawScores {
            benign: 0.2,
            malignant: 0.9,
        },
    }
}

#[test]
fn loaded_batch_starts_clean() {
    let state = loaded(8);
    assert_eq!(state.samples().len(), 8);
    assert!((0..8).all(|i| !state.is_revealed(i)));
    assert!((0..8).all(|i| state.correctness(i).is_none()));
    assert_eq!(state.selected(), None);
    assert!(!state.is_finished());
    assert_eq!(state.phase(), SessionPhase::Idle);
}

#[test]
fn load_is_not_reentrant() {
    let mut state = SessionState::new();
    assert!(state.begin_load());
    assert!(!state.begin_load());
    assert_eq!(state.phase(), SessionPhase::LoadingSamples);
}

#[test]
fn selecting_twice_deselects() {
    let mut state = loaded(4);
    assert!(state.select(2));
    assert_eq!(state.selected(), Some(2));
    assert_eq!(state.staged_features(), &[2.0, 3.0, 4.0]);
    assert_eq!(state.phase(), SessionPhase::SampleSelected);
    assert!(state.select(2));
    assert_eq!(state.selected(), None);
    assert!(state.staged_features().is_empty());
    assert_eq!(state.phase(), SessionPhase::Idle);
}

#[test]
fn selecting_another_sample_moves_selection() {
    let mut state = loaded(4);
    state.select(1);
    state.select(3);
    assert_eq!(state.selected(), Some(3));
    assert_eq!(state.staged_features(), &[3.0, 4.0, 5.0]);
}

#[test]
fn select_ignores_out_of_range_and_busy_states() {
    let mut state = loaded(2);
    assert!(!state.select(5));
    assert_eq!(state.selected(), None);

    state.select(0);
    state.begin_submit().unwrap();
    assert!(!state.select(1));
    assert_eq!(state.selected(), Some(0));

    let mut loading = SessionState::new();
    loading.begin_load();
    assert!(!loading.select(0));
}

#[test]
fn submit_requires_selection() {
    let mut state = loaded(3);
    let before = format!("{state:?}");
    assert!(state.begin_submit().is_none());
    assert_eq!(format!("{state:?}"), before);
}

#[test]
fn submit_is_refused_while_loading() {
    let mut state = loaded(3);
    state.select(1);
    assert!(state.begin_refresh());
    assert!(state.begin_submit().is_none());
    assert!(!state.is_loading_response());
}

#[test]
fn submit_is_refused_while_response_pending() {
    let mut state = loaded(3);
    state.select(1);
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.phase(), SessionPhase::Submitting);
}

#[test]
fn submit_is_refused_after_answer() {
    let mut state = loaded(3);
    state.select(1);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(1));
    let before = format!("{state:?}");
    assert!(state.begin_submit().is_none());
    assert_eq!(format!("{state:?}"), before);
}

#[test]
fn answer_reveals_only_submitted_sample() {
    let mut state = loaded(8);
    state.select(3);
    let ticket = state.begin_submit().unwrap();
    assert_eq!(ticket.index, 3);
    assert_eq!(ticket.features, vec![3.0, 4.0, 5.0]);
    state.apply_classification(ticket.index, answer(1));

    assert!(state.is_finished());
    assert_eq!(state.phase(), SessionPhase::Answered);
    assert!(state.is_revealed(3));
    assert_eq!(state.correctness(3), Some(true));
    assert_eq!(state.sample(3).unwrap().label(), CellLabel::Malignant);
    for other in (0..8).filter(|i| *i != 3) {
        assert!(!state.is_revealed(other));
        assert_eq!(state.correctness(other), None);
    }
    assert_eq!(state.last_classification(), Some(&answer(1)));
}

#[test]
fn wrong_prediction_is_marked_incorrect() {
    let mut state = loaded(4);
    state.select(0);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(1));
    assert_eq!(state.correctness(0), Some(false));
    assert_eq!(state.tally(), (0, 1));
}

#[test]
fn new_selection_after_answer_starts_fresh_cycle() {
    let mut state = loaded(8);
    state.select(3);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(1));

    assert!(state.select(5));
    assert!(!state.is_finished());
    assert_eq!(state.selected(), Some(5));
    assert!(state.last_classification().is_none());
    assert!(state.is_revealed(3));
    assert_eq!(state.correctness(3), Some(true));
    assert_eq!(state.phase(), SessionPhase::SampleSelected);
}

#[test]
fn reselecting_answered_sample_keeps_it_selected() {
    let mut state = loaded(4);
    state.select(2);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(0));
    assert!(state.select(2));
    assert_eq!(state.selected(), Some(2));
    assert!(state.can_submit());
}

#[test]
fn failed_submit_keeps_selection_for_retry() {
    let mut state = loaded(4);
    state.select(1);
    state.begin_submit().unwrap();
    state.fail_submit();
    assert_eq!(state.phase(), SessionPhase::SampleSelected);
    assert!(state.can_submit());
    assert!(!state.is_revealed(1));
}

#[test]
fn refresh_clears_cycle_and_enters_loading() {
    let mut state = loaded(4);
    state.select(1);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(1));

    assert!(state.begin_refresh());
    assert_eq!(state.selected(), None);
    assert!(state.last_classification().is_none());
    assert!((0..4).all(|i| state.correctness(i).is_none()));
    assert!(!state.is_finished());
    assert!(state.is_loading_samples());
    assert_eq!(state.phase(), SessionPhase::LoadingSamples);
}

#[test]
fn refresh_is_refused_while_pending() {
    let mut state = loaded(4);
    state.select(1);
    state.begin_submit().unwrap();
    assert!(!state.begin_refresh());
    assert_eq!(state.selected(), Some(1));

    let mut loading = SessionState::new();
    loading.begin_load();
    assert!(!loading.begin_refresh());
}

#[test]
fn failed_load_keeps_previous_batch() {
    let mut state = loaded(3);
    assert!(state.begin_refresh());
    state.fail_load();
    assert_eq!(state.samples().len(), 3);
    assert_eq!(state.phase(), SessionPhase::Idle);
}

#[test]
fn reload_replaces_batch_and_revealed_flags() {
    let mut state = loaded(4);
    state.select(0);
    let ticket = state.begin_submit().unwrap();
    state.apply_classification(ticket.index, answer(0));
    assert!(state.begin_refresh());
    assert!(state.is_revealed(0));
    state.apply_samples(batch(6));
    assert_eq!(state.samples().len(), 6);
    assert!((0..6).all(|i| !state.is_revealed(i)));
}

#[test]
fn tally_counts_answers_across_cycles() {
    let mut state = loaded(4);
    for (index, class) in [(0, 0), (1, 0), (3, 1)] {
        state.select(index);
        let ticket = state.begin_submit().unwrap();
        state.apply_classification(ticket.index, answer(class));
    }
    assert_eq!(state.tally(), (2, 3));
}

#[test]
fn labels_map_from_service_classes() {
    assert_eq!(CellLabel::from_class(0), CellLabel::Benign);
    assert_eq!(CellLabel::from_class(1), CellLabel::Malignant);
    assert_eq!(CellLabel::from_class(7), CellLabel::Unknown);
    assert_eq!(CellLabel::Unknown.class(), None);
    assert_eq!(CellLabel::Malignant.to_string(), "malignant");
}
