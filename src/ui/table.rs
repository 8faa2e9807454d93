use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::figure::ScatterFigure;

const ROW_HEIGHT: f32 = 18.0;

/// Table of the launches currently plotted in the scatter chart.
pub fn records_table(ui: &mut Ui, scatter: &ScatterFigure, colors: &ColorMap) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(150.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Launch Site");
            });
            header.col(|ui| {
                ui.strong(scatter.x_label.as_str());
            });
            header.col(|ui| {
                ui.strong("Booster Version Category");
            });
            header.col(|ui| {
                ui.strong(scatter.y_label.as_str());
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, scatter.points.len(), |mut row| {
                let point = &scatter.points[row.index()];
                row.col(|ui| {
                    ui.label(point.site.as_str());
                });
                row.col(|ui| {
                    ui.label(point.x.to_string());
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(point.group.as_str()).color(colors.color_for(&point.group)),
                    );
                });
                row.col(|ui| {
                    ui.label(point.y.to_string());
                });
            });
        });
}
