use crate::egui_app::ui::style;
use egui::Color32;

/// Maximum entries kept in the rolling status log.
pub const MAX_STATUS_LOG: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before the first batch request is issued.
    pub fn idle() -> Self {
        Self {
            text: "Connecting to the classification service".into(),
            badge_label: style::status_badge_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
            log: Vec::new(),
        }
    }

    /// Replace the visible status and append it to the log.
    pub fn set(&mut self, text: String, tone: style::StatusTone) {
        self.badge_label = style::status_badge_label(tone).into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(text.clone());
        if self.log.len() > MAX_STATUS_LOG {
            let overflow = self.log.len() - MAX_STATUS_LOG;
            self.log.drain(..overflow);
        }
        self.text = text;
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        if self.log.is_empty() {
            return String::new();
        }
        self.log.join("\n")
    }
}
