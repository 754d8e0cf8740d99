use super::style;
use super::*;
use crate::egui_app::state::{CheckMark, SampleCardView};
use eframe::egui::{CornerRadius, RichText, Sense, Ui};

const CARD_WIDTH: f32 = 190.0;

impl EguiApp {
    pub(super) fn render_sample_board(&mut self, ui: &mut Ui) {
        let board = self.controller.ui.board.clone();
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for card in &board.cards {
                ui.push_id(("sample_card", card.index), |ui| {
                    if render_card(ui, card, board.cards_enabled) {
                        clicked = Some(card.index);
                    }
                });
            }
        });
        if let Some(index) = clicked {
            self.controller.select_sample(index);
        }
    }

    pub(super) fn render_controls(&mut self, ui: &mut Ui) {
        let board = self.controller.ui.board.clone();
        let palette = style::palette();
        ui.horizontal(|ui| {
            let refresh = ui
                .add_enabled(
                    board.refresh_enabled,
                    egui::Button::new(RichText::new("↻").size(18.0)),
                )
                .on_hover_text("Load a new set of samples");
            if refresh.clicked() {
                self.controller.refresh();
            }
            let submit = ui.add_enabled(
                board.submit_enabled,
                egui::Button::new(RichText::new("Submit").strong()),
            );
            if submit.clicked() {
                self.controller.submit();
            }
            if let Some(tally) = &board.tally {
                ui.separator();
                ui.label(RichText::new(tally).color(palette.text_muted));
            }
        });
        ui.add_space(4.0);
        ui.label(
            RichText::new(&board.prompt)
                .monospace()
                .color(palette.text_primary),
        );
    }
}

/// Draw one card; returns whether it was clicked.
fn render_card(ui: &mut Ui, card: &SampleCardView, enabled: bool) -> bool {
    let palette = style::palette();
    let frame = Frame::new()
        .fill(style::card_fill(card.selected))
        .stroke(style::card_border(card.selected, card.done))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(8));
    let inner = frame.show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            let heading_color = card
                .revealed_label
                .map(style::label_color)
                .unwrap_or(palette.text_muted);
            ui.label(RichText::new(&card.heading).strong().color(heading_color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(check) = card.check {
                    let correct = check == CheckMark::Correct;
                    ui.label(
                        RichText::new(check.glyph())
                            .strong()
                            .color(style::check_color(correct)),
                    );
                }
            });
        });
        ui.separator();
        for row in &card.features {
            ui.label(
                RichText::new(format!("{}: {}", row.name, row.value))
                    .small()
                    .color(palette.text_primary),
            );
        }
    });
    if card.placeholder || !enabled {
        return false;
    }
    let response = inner.response.interact(Sense::click());
    if response.hovered() && !card.selected {
        ui.painter().rect_stroke(
            response.rect,
            CornerRadius::same(4),
            style::section_stroke(),
            egui::StrokeKind::Outside,
        );
    }
    response.clicked()
}
