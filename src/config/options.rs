// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub export: ExportOptions,
    pub preprocess: PreprocessOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            export: ExportOptions::default(),
            preprocess: PreprocessOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats. JSON has none.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Full output path: `<dir>/<stem>.<ext>`, extension follows the format.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(format!("{}.{}", stem, self.format.ext()));
        path
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension;
    /// the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    /// Replace only the file stem, keeping directory and format.
    pub fn set_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

/// Tuning for the optional image-normalization pass that runs before a scan
/// is handed to the recognition service.
#[derive(Clone, Debug, PartialEq)]
pub struct PreprocessOptions {
    pub grayscale: bool,
    /// Contrast adjustment in the -100.0..100.0 range understood by `image`.
    pub contrast: f32,
    pub sharpen: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            grayscale: true,
            contrast: 24.0,
            sharpen: true,
        }
    }
}
