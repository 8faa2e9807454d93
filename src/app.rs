use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: rows behind the scatter chart ----
        egui::TopBottomPanel::bottom("records_panel")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Launches in payload window")
                    .default_open(false)
                    .show(ui, |ui| {
                        if let Some(scatter) = self.state.scatter() {
                            table::records_table(ui, scatter, &self.state.booster_colors);
                        }
                    });
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() / 2.0 - 40.0).max(120.0);
            if let Some(pie) = self.state.pie() {
                plot::pie_chart(ui, pie, &self.state.class_colors, chart_height);
            }
            ui.separator();
            if let Some(scatter) = self.state.scatter() {
                plot::scatter_chart(ui, scatter, &self.state.booster_colors, chart_height);
            }
        });
    }
}
