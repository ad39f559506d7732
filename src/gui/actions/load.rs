// src/gui/actions/load.rs

use std::fs;
use std::path::Path;

use crate::gui::app::App;

/// Read the file named in the path field into the editor. Extraction stays
/// a separate click so the user can eyeball and fix the text first.
pub fn load(app: &mut App) {
    let path_text = app.input_path_text.trim().to_string();
    if path_text.is_empty() {
        app.status("Type a file path to load");
        return;
    }

    match fs::read_to_string(&path_text) {
        Ok(text) => {
            if let Some(dir) = Path::new(&path_text).parent() {
                app.state.gui.last_browse_dir = dir.to_string_lossy().into_owned();
            }
            log::info!("Load: {} ({} bytes)", path_text, text.len());
            app.raw_text = text;
            app.records.clear();
            app.status(format!("Loaded {path_text}"));
        }
        Err(e) => {
            log::error!("Load: {}: {}", path_text, e);
            app.status(format!("Load error: {e}"));
        }
    }
}
