//! egui renderer for the classification session.

mod app_info;
mod banner;
mod chrome;
mod response_panel;
mod sample_board;
pub mod style;

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin};
use std::time::Duration;

/// Smallest window that still fits one row of cards and the side panel.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);
/// Repaint cadence while background jobs are outstanding.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app against the configured service and issue the first requests.
    pub fn new(settings: AppConfig) -> Result<Self, String> {
        let controller = EguiController::from_config(settings)
            .map_err(|err| format!("Failed to configure the classification service: {err}"))?;
        Ok(Self::with_controller(controller))
    }

    /// Wrap an existing controller and start its session.
    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(12)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("session_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_app_info(ui);
                        ui.add_space(8.0);
                        self.render_banner(ui);
                        self.render_sample_board(ui);
                        ui.add_space(8.0);
                        self.render_controls(ui);
                        ui.add_space(12.0);
                        self.render_response_panel(ui);
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_center(ctx);
        if self.controller.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
