use super::style;
use super::*;
use eframe::egui::{RichText, Ui};

pub(super) const APP_HEADING: &str = "Machine Learning Cell Classifier";

pub(super) const APP_INFO_INTRO: &str = "This App is able to classify breast cancer cells as either \"Malignant\" or \"Benign\" using cell measurements. \
The backend is powered by a Machine Learning Neural Network trained on ~700 records.";

pub(super) const APP_INFO_USAGE: &str = "Select a sample card from below and submit it to the AI for classification. \
The system will attempt to classify the card based solely on the measurements listed. \
Afterwards, you can also view the \"Raw Network Outputs\", which show the AI confidence for each classification.";

impl EguiApp {
    pub(super) fn render_app_info(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(APP_HEADING)
                    .size(24.0)
                    .strong()
                    .color(palette.accent_copper),
            );
        });
        ui.add_space(6.0);
        ui.label(RichText::new(APP_INFO_INTRO).color(palette.text_primary));
        ui.add_space(4.0);
        ui.label(RichText::new(APP_INFO_USAGE).color(palette.text_muted));
    }
}
