// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv;
use crate::model::{PlayerRecord, EXPORT_HEADERS};

/// Render the extracted records in the configured export format.
/// JSON serializes the records directly; CSV/TSV go through the flat
/// export-row shape.
pub fn render_records(
    export: &ExportOptions,
    records: &[PlayerRecord],
) -> Result<String, Box<dyn Error>> {
    match export.format {
        ExportFormat::Json => {
            let mut s = serde_json::to_string_pretty(records)?;
            s.push('\n');
            Ok(s)
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let rows: Vec<Vec<String>> = records.iter().map(PlayerRecord::export_row).collect();
            let sep = export.format.delim().expect("delimited format");
            Ok(csv::to_export_string(
                Some(&EXPORT_HEADERS),
                &rows,
                export.include_headers,
                sep,
            ))
        }
    }
}

/// Write one export file at the options' output path, creating parent
/// directories as needed. Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    records: &[PlayerRecord],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, render_records(export, records)?)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Path for the normalized copy of an input image: `<stem>_norm.png`
/// alongside the original.
pub fn normalized_image_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let name = format!("{stem}{}.png", crate::config::consts::NORMALIZED_SUFFIX);
    input.with_file_name(name)
}
