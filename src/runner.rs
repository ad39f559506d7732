// src/runner.rs
//
// Orchestration over one or many input files. The extraction core stays
// pure; everything that touches the filesystem or a recognition service
// funnels through here.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::options::AppOptions;
use crate::extract;
use crate::file;
use crate::model::PlayerRecord;
use crate::preprocess;
use crate::progress::Progress;
use crate::recognize::Recognizer;

/// Summary of what a batch produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Extraction result per input, in input order. An empty list is a
    /// rejected frame, not an error.
    pub extracted: Vec<Vec<PlayerRecord>>,
    pub rejected: usize,
}

/// Extract every recognized-text file and export the results.
///
/// A single input exports to the configured output path; multiple inputs
/// each export under the output directory with the input's file stem.
/// Rejected frames are counted and skipped, never written as empty files.
pub fn extract_files(
    inputs: &[PathBuf],
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut summary = RunSummary {
        files_written: Vec::new(),
        extracted: Vec::with_capacity(inputs.len()),
        rejected: 0,
    };

    for input in inputs {
        let text = fs::read_to_string(input)?;
        let records = extract::box_score(&text);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(input, records.len());
        }

        if records.is_empty() {
            warn!("{}: no usable data extracted", input.display());
            summary.rejected += 1;
            summary.extracted.push(records);
            continue;
        }

        let mut export = options.export.clone();
        if inputs.len() > 1 {
            // Batch mode: keep the directory/format, name each file after
            // its input.
            if let Some(stem) = input.file_stem() {
                export.set_stem(&stem.to_string_lossy());
            }
        }
        let path = file::write_export(&export, &records)?;
        info!("{}: {} players -> {}", input.display(), records.len(), path.display());
        summary.files_written.push(path);
        summary.extracted.push(records);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Normalize raw scans for better recognition upstream. Each image is
/// written alongside its input as `<stem>_norm.png`.
pub fn normalize_images(
    inputs: &[PathBuf],
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        let bytes = fs::read(input)?;
        let normalized = preprocess::normalize(&bytes, &options.preprocess)?;
        let out = file::normalized_image_path(input);
        fs::write(&out, normalized)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Normalized {} -> {}", input.display(), out.display()));
        }
        written.push(out);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(written)
}

/// Full collaborator chain for callers that hold image bytes and a
/// recognition service: normalize, recognize, extract.
pub fn extract_image(
    image: &[u8],
    recognizer: &dyn Recognizer,
    options: &AppOptions,
) -> Result<Vec<PlayerRecord>, Box<dyn Error>> {
    let normalized = preprocess::normalize(image, &options.preprocess)?;
    let text = recognizer.recognize(&normalized)?;
    Ok(extract::box_score(&text))
}
