// src/bin/cli.rs
use color_eyre::eyre::{self, eyre};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    boxscan::cli::run().map_err(|e| eyre!(e.to_string()))
}
