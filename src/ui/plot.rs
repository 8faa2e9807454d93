use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::ColorMap;
use crate::controls::OutputId;
use crate::figure::{PieFigure, ScatterFigure};

/// Polygon fill is only correct for convex shapes, so slices are drawn as
/// wedges no wider than a quarter turn.
const MAX_WEDGE: f64 = FRAC_PI_2;
const ARC_STEPS_PER_TURN: f64 = 128.0;

// ---------------------------------------------------------------------------
// Pie chart (success-pie-chart)
// ---------------------------------------------------------------------------

/// Render the outcome pie chart.
pub fn pie_chart(ui: &mut Ui, pie: &PieFigure, colors: &ColorMap, height: f32) {
    ui.strong(pie.title.as_str());
    if pie.slices.is_empty() {
        ui.label(RichText::new("No launches for this selection.").weak());
    }

    let total = pie.total();

    Plot::new(OutputId::SuccessPieChart.as_str())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                return;
            }

            // Clockwise from twelve o'clock.
            let mut start = FRAC_PI_2;
            for slice in &pie.slices {
                let sweep = slice.value / total * TAU;
                let end = start - sweep;
                let share = slice.value / total * 100.0;
                let name = format!("{}: {} ({share:.1}%)", slice.label, slice.value);
                let color = colors.color_for(&slice.label);

                for points in wedges(start, end) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(points))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                let mid = (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    RichText::new(format!("{share:.1}%")).color(Color32::WHITE).strong(),
                ));

                start = end;
            }
        });
}

/// Split the arc from `start` to `end` (radians, `end < start`) into convex
/// wedge outlines anchored at the origin.
fn wedges(start: f64, end: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = start - end;
    if sweep <= 0.0 {
        return Vec::new();
    }
    let count = (sweep / MAX_WEDGE - 1e-9).ceil().max(1.0) as usize;

    (0..count)
        .map(|k| {
            let from = start - sweep * k as f64 / count as f64;
            let to = start - sweep * (k + 1) as f64 / count as f64;
            let steps = ((from - to) / TAU * ARC_STEPS_PER_TURN).ceil().max(1.0) as usize;

            let mut points = vec![[0.0, 0.0]];
            points.extend((0..=steps).map(|i| {
                let angle = from - (from - to) * i as f64 / steps as f64;
                [angle.cos(), angle.sin()]
            }));
            points
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter chart (success-payload-scatter-chart)
// ---------------------------------------------------------------------------

/// Render payload vs. outcome, one point series per booster category.
pub fn scatter_chart(ui: &mut Ui, scatter: &ScatterFigure, colors: &ColorMap, height: f32) {
    ui.strong(scatter.title.as_str());
    if scatter.points.is_empty() {
        ui.label(RichText::new("No launches in the selected payload range.").weak());
    }

    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &scatter.points {
        groups.entry(p.group.as_str()).or_default().push([p.x, p.y]);
    }

    Plot::new(OutputId::SuccessPayloadScatterChart.as_str())
        .height(height)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (group, points) in groups {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(group)
                        .color(colors.color_for(group))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}
