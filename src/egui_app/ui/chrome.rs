use super::style;
use super::*;
use crate::egui_app::state::ServiceHealth;
use eframe::egui::{RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                let service = self.controller.ui.service.clone();
                ui.horizontal(|ui| {
                    let health_color = match service.health {
                        ServiceHealth::Online => palette.success,
                        ServiceHealth::Offline(_) => palette.warning,
                        ServiceHealth::Checking | ServiceHealth::Unknown => palette.text_muted,
                    };
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(dot.center(), 5.0, health_color);
                    let hover = match &service.health {
                        ServiceHealth::Offline(reason) => format!("{}\n{reason}", service.address),
                        _ => service.address.clone(),
                    };
                    ui.label(RichText::new(service.health.label()).color(palette.text_primary))
                        .on_hover_text(hover.trim());
                    if ui
                        .add_enabled(
                            service.health != ServiceHealth::Checking,
                            egui::Button::new("Check"),
                        )
                        .on_hover_text("Probe the classification service")
                        .clicked()
                    {
                        self.controller.check_service_health();
                    }
                    ui.separator();
                    self.render_model_picker(ui, &service);
                });
            });
    }

    fn render_model_picker(
        &mut self,
        ui: &mut egui::Ui,
        service: &crate::egui_app::state::ServiceStatusState,
    ) {
        let palette = style::palette();
        ui.label(RichText::new("Model").color(palette.text_muted));
        let mut chosen = None;
        ui.add_enabled_ui(!service.model_locked, |ui| {
            egui::ComboBox::from_id_salt("model_picker")
                .selected_text(&service.model)
                .width(240.0)
                .show_ui(ui, |ui| {
                    if service.models.is_empty() {
                        ui.label(RichText::new("No models listed").color(palette.text_muted));
                    }
                    for model in &service.models {
                        if ui
                            .selectable_label(model == &service.model, model)
                            .clicked()
                        {
                            chosen = Some(model.clone());
                        }
                    }
                });
        });
        if let Some(model) = chosen {
            self.controller.select_model(&model);
        }
        let reload = ui
            .add_enabled(!service.models_loading, egui::Button::new("↻"))
            .on_hover_text("Reload the model list");
        if reload.clicked() {
            self.controller.refresh_models();
        }
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    let text =
                        ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if status.log.len() > 1 {
                        text.on_hover_text(status.log_text());
                    }
                });
            });
    }
}
