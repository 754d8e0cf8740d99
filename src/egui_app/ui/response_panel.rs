use super::style;
use super::*;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    pub(super) fn render_response_panel(&mut self, ui: &mut Ui) {
        let response = self.controller.ui.response.clone();
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_primary)
            .stroke(style::section_stroke())
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("AI Classification").strong().size(16.0));
                let verdict_color = response
                    .predicted
                    .map(style::label_color)
                    .unwrap_or(palette.text_muted);
                let verdict = if response.verdict.is_empty() {
                    " "
                } else {
                    response.verdict.as_str()
                };
                ui.label(RichText::new(verdict).size(20.0).strong().color(verdict_color));
                ui.add_space(6.0);
                ui.label(RichText::new("Raw Network Outputs").color(palette.text_muted));
                for line in [&response.benign_line, &response.malignant_line]
                    .into_iter()
                    .flatten()
                {
                    ui.label(RichText::new(line).monospace());
                }
            });
    }
}
