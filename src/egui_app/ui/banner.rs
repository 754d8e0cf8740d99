use super::style;
use super::*;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    /// Error banner with Retry and Dismiss; nothing is drawn without a failure.
    pub(super) fn render_banner(&mut self, ui: &mut Ui) {
        let Some(banner) = self.controller.ui.banner.clone() else {
            return;
        };
        let palette = style::palette();
        let mut retry = false;
        let mut dismiss = false;
        Frame::new()
            .fill(palette.bg_primary)
            .stroke(egui::Stroke::new(1.0, palette.warning))
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&banner.title).strong().color(palette.warning));
                        ui.label(RichText::new(&banner.message).color(palette.text_primary));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismiss = ui.button("Dismiss").clicked();
                        if banner.retry.is_some() {
                            retry = ui.button("Retry").clicked();
                        }
                    });
                });
            });
        ui.add_space(8.0);
        if retry {
            self.controller.retry_failed();
        } else if dismiss {
            self.controller.dismiss_banner();
        }
    }
}
