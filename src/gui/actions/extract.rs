// src/gui/actions/extract.rs

use crate::extract as engine;
use crate::gui::app::App;

/// Run the pipeline over whatever is in the editor. Rejection is a normal
/// outcome here: the user gets told, the previous table is dropped either
/// way so stale rows can't masquerade as the new sheet.
pub fn extract(app: &mut App) {
    let records = engine::box_score(&app.raw_text);

    if records.is_empty() {
        log::info!("Extract: no usable data");
        app.status("No usable data extracted — check the text for missing headers");
    } else if records.len() < crate::config::consts::SLOTS {
        let skipped = crate::config::consts::SLOTS - records.len();
        log::info!("Extract: {} players, {} skipped", records.len(), skipped);
        app.status(format!(
            "Extracted {} player(s); {} slot(s) skipped on bad values",
            records.len(),
            skipped
        ));
    } else {
        log::info!("Extract: full frame");
        app.status("Extracted 10 players");
    }

    app.records = records;
}
