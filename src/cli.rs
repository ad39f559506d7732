// src/cli.rs
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::file;
use crate::progress::Progress;
use crate::runner;

pub struct Params {
    pub inputs: Vec<PathBuf>,
    /// Image-normalization mode instead of extraction.
    pub prep: bool,
    /// No -o given: render extraction results to stdout.
    pub to_stdout: bool,
    pub options: AppOptions,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    crate::logging::init();
    let params = parse_cli()?;

    let mut progress = ConsoleProgress::default();

    if params.prep {
        let written = runner::normalize_images(&params.inputs, &params.options, Some(&mut progress))?;
        eprintln!("Normalized {} image(s)", written.len());
        return Ok(());
    }

    if params.to_stdout {
        for input in &params.inputs {
            let text = std::fs::read_to_string(input)?;
            let records = crate::extract::box_score(&text);
            if records.is_empty() {
                eprintln!("{}: no usable data extracted", input.display());
                continue;
            }
            print!("{}", file::render_records(&params.options.export, &records)?);
        }
        return Ok(());
    }

    let summary = runner::extract_files(&params.inputs, &params.options, Some(&mut progress))?;
    eprintln!(
        "Wrote {} file(s), {} frame(s) rejected",
        summary.files_written.len(),
        summary.rejected
    );
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params {
        inputs: Vec::new(),
        prep: false,
        to_stdout: true,
        options: AppOptions::default(),
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.options.export.set_path(&v);
                params.to_stdout = false; }
            "--no-headers" => params.options.export.include_headers = false,
            "--prep" => params.prep = true,
            "--contrast" => {
                let v: f32 = args.next().ok_or("Missing value for --contrast")?.parse()?;
                params.options.preprocess.contrast = v; }
            "--no-grayscale" => params.options.preprocess.grayscale = false,
            "--no-sharpen" => params.options.preprocess.sharpen = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown arg: {}", other).into());
            }
            _ => params.inputs.push(PathBuf::from(a)),
        }
    }

    if params.inputs.is_empty() {
        return Err("No input files. See --help".into());
    }
    for input in &params.inputs {
        if !Path::new(input).exists() {
            return Err(format!("Input not found: {}", input.display()).into());
        }
    }

    Ok(params)
}

#[derive(Default)]
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, input: &Path, extracted: usize) {
        self.done += 1;
        if extracted == 0 {
            eprintln!("[{}/{}] {}: rejected", self.done, self.total, input.display());
        } else {
            eprintln!(
                "[{}/{}] {}: {} player(s)",
                self.done,
                self.total,
                input.display(),
                extracted
            );
        }
    }
}
