use crate::session::CellLabel;

/// Outcome mark drawn in a card's check box once the sample was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckMark {
    Correct,
    Wrong,
}

impl CheckMark {
    pub fn from_correctness(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Correct => "✓",
            Self::Wrong => "✖",
        }
    }
}

/// One `name: value` line on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureRow {
    pub name: String,
    /// Empty while the card is a loading placeholder.
    pub value: String,
}

/// Render-ready sample card.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleCardView {
    pub index: usize,
    /// `? ? ?` until revealed, the true label afterwards, `loading` for placeholders.
    pub heading: String,
    /// Set once the true label is visible; drives the heading color.
    pub revealed_label: Option<CellLabel>,
    pub check: Option<CheckMark>,
    pub features: Vec<FeatureRow>,
    pub selected: bool,
    /// Selected card of an answered cycle.
    pub done: bool,
    pub placeholder: bool,
}

/// Sample board plus its controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBoardState {
    pub cards: Vec<SampleCardView>,
    /// Prompt line under the controls.
    pub prompt: String,
    /// `n / m correct` once at least one sample was classified.
    pub tally: Option<String>,
    pub submit_enabled: bool,
    pub refresh_enabled: bool,
    /// Cards ignore clicks while anything is loading.
    pub cards_enabled: bool,
}
