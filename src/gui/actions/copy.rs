// src/gui/actions/copy.rs

use eframe::egui;

use crate::file;
use crate::gui::app::App;

/// Copy the current table to the clipboard in the selected export format.
pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    match file::render_records(&app.state.options.export, &app.records) {
        Ok(text) => {
            ctx.copy_text(text);
            log::info!("Copy: {} record(s)", app.records.len());
            app.status("Copied to clipboard");
        }
        Err(e) => {
            log::error!("Copy: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
