// src/extract/mod.rs
//! # Box-score extraction engine
//!
//! Rebuilds a structured two-team box score from the flattened token soup a
//! text-recognition service makes of a stat-sheet screenshot. The input has
//! no reliable delimiters; column and row structure is inferred purely from
//! the positions of known header tokens.
//!
//! ## Stages
//! - `core::tokens` — whitespace tokenization, nothing else.
//! - `markers` — the fixed header-label set and per-column shape rules.
//! - `frame` — landmark location, span bounding, cleaning, assembly and the
//!   all-or-nothing frame gate.
//! - `records` — strict parsing of the ten slots into `PlayerRecord`s, with
//!   per-slot skips.
//!
//! ## Failure model
//! Two tiers, deliberately separate: a column that cannot account for the
//! full 5+1+5 layout rejects the *whole* frame (better no data than rows
//! misattributed across teams), while a value that merely fails its strict
//! parse drops that *one* player. Nothing in here returns an error or
//! panics; bad input degrades to fewer or zero records.
//!
//! The entry point is [`box_score`]. It is a pure function of its input:
//! no I/O, no shared state, same output for the same text every time.

pub mod frame;
pub mod markers;
pub mod records;

use log::info;

use crate::core::tokens;
use crate::model::PlayerRecord;
use frame::FrameOutcome;

/// Extract per-player statistics from recognized box-score text.
///
/// Returns ten records for a clean sheet, fewer when individual players
/// fail strict parsing, and an empty vector when any required column cannot
/// be fully assembled ("no usable data").
pub fn box_score(text: &str) -> Vec<PlayerRecord> {
    let toks = tokens::tokenize(text);
    match frame::assemble(&toks) {
        FrameOutcome::Accepted(frame) => records::build(&frame),
        FrameOutcome::Rejected(shorts) => {
            let detail = shorts
                .iter()
                .map(|s| format!("{} {}", s.marker.label(), s.found))
                .collect::<Vec<_>>()
                .join(", ");
            info!("frame rejected; cleaned column counts: {detail}");
            Vec::new()
        }
    }
}
