// src/gui/components/data_table.rs
//
// Draws the extracted box score. Purely a view over App::records; the
// home block sits in rows 0-4, the away block in rows 5-9, exactly as
// the slots came out of assembly.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::gui::table_model;
use crate::model::TeamSide;

const HOME_TINT: egui::Color32 = egui::Color32::from_rgb(0x64, 0xB4, 0xFF);
const AWAY_TINT: egui::Color32 = egui::Color32::from_rgb(0xF0, 0xD2, 0x3C);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.weak("No extraction yet. Paste or load recognized text and hit EXTRACT.");
        return;
    }

    let cols = table_model::HEADERS.len();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        let col = match ci {
            0 => Column::initial(170.0).at_least(80.0).clip(true),
            1 => Column::initial(56.0),
            _ => Column::initial(46.0),
        };
        table = table.column(col.resizable(true));
    }

    table
        .header(24.0, |mut header| {
            for (ci, label) in table_model::HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let text = RichText::new(*label).strong();
                    if table_model::is_numeric(ci) {
                        ui.centered_and_justified(|ui| { ui.label(text); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let rec = &app.records[row.index()];
                let cells = table_model::display_row(rec);
                let tint = match rec.team {
                    TeamSide::Home => HOME_TINT,
                    TeamSide::Away => AWAY_TINT,
                };

                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if ci == 1 {
                            rt = rt.color(tint);
                        }
                        if table_model::is_numeric(ci) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
