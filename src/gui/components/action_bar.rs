// src/gui/components/action_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv, Json }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
            ExportFormat::Json => UiFormat::Json,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, UiFormat::Json, "JSON");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
                UiFormat::Json => ExportFormat::Json,
            };
            log::info!("UI: export format -> {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            log::info!("UI: include_headers -> {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }
    });

    // --- Actions (Copy / Export / EXTRACT) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("EXTRACT").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            actions::extract(app);
        }

        ui.label(format!("Status: {}", app.status));
    });
}
