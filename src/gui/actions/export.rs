// src/gui/actions/export.rs

use crate::file;
use crate::gui::app::App;

/// Write the current table to the configured output path.
pub fn export(app: &mut App) {
    if app.records.is_empty() {
        app.status("Nothing to export");
        return;
    }

    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        log::info!(
            "Export: out path set -> {}",
            app.state.options.export.out_path().display()
        );
    }

    match file::write_export(&app.state.options.export, &app.records) {
        Ok(path) => {
            log::info!("Export: OK -> {}", path.display());
            app.status(format!("Exported {}", path.display()));
        }
        Err(e) => {
            log::error!("Export: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
