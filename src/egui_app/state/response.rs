use crate::session::CellLabel;

/// "AI Classification" panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsePanelState {
    /// Predicted label text, the waiting bullets, or empty.
    pub verdict: String,
    /// Predicted label when an answer is shown; drives the verdict color.
    pub predicted: Option<CellLabel>,
    pub waiting: bool,
    /// Formatted benign confidence line.
    pub benign_line: Option<String>,
    /// Formatted malignant confidence line.
    pub malignant_line: Option<String>,
}
