// src/gui/components/input_panel.rs
//
// Left panel: where the recognized text comes from. Either a path typed
// into the file field or text pasted straight into the editor; the editor
// is always the source of truth for EXTRACT.

use eframe::egui::{self, TextStyle};

use crate::core::tokens;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Recognized text");

    ui.horizontal(|ui| {
        ui.label("File:");
        ui.add(
            egui::TextEdit::singleline(&mut app.input_path_text)
                .font(TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
    });
    ui.horizontal(|ui| {
        if ui.button("Load").clicked() {
            actions::load(app);
        }
        if ui.button("Clear").clicked() {
            app.raw_text.clear();
            app.records.clear();
            app.status("Cleared");
        }
    });

    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut app.raw_text)
                .font(TextStyle::Monospace)
                .desired_width(f32::INFINITY)
                .desired_rows(28)
                .hint_text("Paste the recognition output here"),
        );
    });

    if app.state.gui.show_token_count {
        ui.label(format!("{} token(s)", tokens::tokenize(&app.raw_text).len()));
    }
}
