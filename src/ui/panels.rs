use eframe::egui::{self, Color32, RichText, Ui};

use crate::controls::OutputId;
use crate::state::AppState;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// Left side panel – input controls
// ---------------------------------------------------------------------------

/// Render the site dropdown, the payload slider and the range readout.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();
    site_dropdown(ui, state);

    ui.add_space(12.0);
    ui.heading("Payload range (Kg):");
    ui.separator();
    payload_slider(ui, state);

    ui.add_space(8.0);
    // payload-range-output
    ui.push_id(OutputId::PayloadRangeOutput.as_str(), |ui: &mut Ui| {
        ui.label(RichText::new(state.range_text()).strong());
    });

    ui.add_space(12.0);
    ui.heading("Booster Version Category");
    ui.separator();
    for (label, color) in state.booster_colors.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let dropdown = state.controls.site_dropdown.clone();
    let current = dropdown.label_for(&state.selection.site);
    let mut picked: Option<String> = None;

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if dropdown.searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut state.site_query)
                        .hint_text(dropdown.placeholder),
                );
                ui.separator();
            }
            let mut any = false;
            for opt in dropdown.search(&state.site_query) {
                any = true;
                let selected = state.selection.site.as_value() == opt.value;
                if ui.selectable_label(selected, opt.label.as_str()).clicked() {
                    picked = Some(opt.value.clone());
                }
            }
            if !any {
                ui.label(RichText::new("No matching sites").weak());
            }
        });

    if let Some(value) = picked {
        state.site_query.clear();
        if state.set_site(&value) {
            log::info!("site selection → {value}");
        }
    }
}

fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let slider = state.controls.payload_slider.clone();
    let mut low = state.selection.payload_range.low;
    let mut high = state.selection.payload_range.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, slider.min..=slider.max)
                .step_by(slider.step)
                .text("from"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, slider.min..=slider.max)
                .step_by(slider.step)
                .text("to"),
        )
        .changed();

    // Dragging one handle past the other pushes the other one along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in &slider.marks {
            ui.label(RichText::new(mark.to_string()).small().weak());
        }
    });

    if ui.small_button("Reset range").clicked() {
        state.set_payload_range(slider.default.low, slider.default.high);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new(DASHBOARD_TITLE)
                .size(28.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        let ds = &state.dataset;
        ui.label(format!(
            "{} launches from {} sites",
            ds.len(),
            ds.sites().len()
        ));
        ui.separator();
        let plotted = state.scatter().map(|s| s.points.len()).unwrap_or(0);
        ui.label(format!("{plotted} in payload window"));
        ui.separator();
        ui.label(format!(
            "payload {} – {} kg",
            ds.min_payload(),
            ds.max_payload()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
