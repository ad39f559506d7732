// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::state::AppState;
use crate::model::PlayerRecord;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "boxscan",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // input side: file path field + editable recognized text
    pub input_path_text: String,
    pub raw_text: String,

    // extraction output currently on screen
    pub records: Vec<PlayerRecord>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        log::info!("Init: boxscan GUI up");

        Self {
            state,
            input_path_text: String::new(),
            raw_text: String::new(),
            records: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: "Idle".to_string(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                crate::gui::components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
