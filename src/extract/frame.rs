// src/extract/frame.rs
//
// Positional recovery of the table: locate header landmarks, bound each
// header's data span by the nearest following landmark of any kind, filter
// the span through the column's shape rule, then fold the per-team runs
// into one ten-slot column. All-or-nothing at the frame level.

use std::array;

use log::debug;

use super::markers::{Marker, MARKERS, MARKER_COUNT};
use crate::config::consts::{RAW_COLUMN_LEN, SLOTS, TEAM_SIZE, TOTAL_SLOT};

/// Every marker occurrence in the token stream: per-marker position lists
/// plus the sorted union used to bound spans.
struct Landmarks {
    per_marker: [Vec<usize>; MARKER_COUNT],
    boundaries: Vec<usize>,
}

fn locate(tokens: &[&str]) -> Landmarks {
    let mut per_marker: [Vec<usize>; MARKER_COUNT] = array::from_fn(|_| Vec::new());
    let mut boundaries = Vec::new();
    for (i, tok) in tokens.iter().enumerate() {
        if let Some(m) = Marker::from_token(tok) {
            per_marker[m as usize].push(i);
            boundaries.push(i); // ascending by construction
        }
    }
    Landmarks { per_marker, boundaries }
}

/// Nearest landmark strictly after `p`, or `len` when none follows.
/// Shared by every column so span bounding stays in one place.
fn next_boundary(boundaries: &[usize], p: usize, len: usize) -> usize {
    let i = boundaries.partition_point(|&b| b <= p);
    boundaries.get(i).copied().unwrap_or(len)
}

/// One column after cleaning and assembly.
enum ColumnOutcome {
    /// Exactly `SLOTS` values: home slots 0-4, away slots 5-9.
    Complete(Vec<String>),
    /// Fewer than `RAW_COLUMN_LEN` cleaned tokens (0 when the marker never
    /// appeared at all).
    Short { found: usize },
}

fn assemble_column(m: Marker, tokens: &[&str], lm: &Landmarks) -> ColumnOutcome {
    let mut vals: Vec<String> = Vec::new();
    for &p in &lm.per_marker[m as usize] {
        let end = next_boundary(&lm.boundaries, p, tokens.len());
        for tok in &tokens[p + 1..end] {
            if let Some(v) = m.clean(tok) {
                vals.push(v.to_string());
            }
        }
    }

    if vals.len() < RAW_COLUMN_LEN {
        if vals.len() == SLOTS {
            // One short of a full run usually means the recognizer dropped a
            // team-total cell. Rejecting is the safe call: re-slicing would
            // shift an away player into the discarded total slot.
            debug!(
                "column {}: {} values, one short of {}; team total may be missing",
                m.label(),
                vals.len(),
                RAW_COLUMN_LEN
            );
        }
        return ColumnOutcome::Short { found: vals.len() };
    }
    if vals.len() > RAW_COLUMN_LEN {
        debug!(
            "column {}: ignoring {} trailing tokens past the fixed layout",
            m.label(),
            vals.len() - RAW_COLUMN_LEN
        );
    }

    // Fixed sheet layout: 5 home players, the home/away total row, 5 away
    // players. The total at TOTAL_SLOT is discarded.
    let mut out = Vec::with_capacity(SLOTS);
    out.extend_from_slice(&vals[..TEAM_SIZE]);
    out.extend_from_slice(&vals[TOTAL_SLOT + 1..RAW_COLUMN_LEN]);
    ColumnOutcome::Complete(out)
}

/// A fully validated extraction: every marker's column holds exactly
/// `SLOTS` values, indexed by player slot.
pub struct Frame {
    cols: [Vec<String>; MARKER_COUNT],
}

impl Frame {
    pub fn col(&self, m: Marker) -> &[String] {
        &self.cols[m as usize]
    }

    pub fn value(&self, m: Marker, slot: usize) -> &str {
        &self.cols[m as usize][slot]
    }
}

/// Why a frame failed validation: each offending marker with the number of
/// cleaned values it managed to produce.
#[derive(Debug)]
pub struct Shortfall {
    pub marker: Marker,
    pub found: usize,
}

pub enum FrameOutcome {
    Accepted(Frame),
    Rejected(Vec<Shortfall>),
}

/// Assemble and validate all columns. Accepts only when every marker
/// produced a complete column; anything less rejects the whole frame.
pub fn assemble(tokens: &[&str]) -> FrameOutcome {
    let lm = locate(tokens);
    let mut cols: [Vec<String>; MARKER_COUNT] = array::from_fn(|_| Vec::new());
    let mut shortfalls = Vec::new();

    for m in MARKERS {
        match assemble_column(m, tokens, &lm) {
            ColumnOutcome::Complete(v) => cols[m as usize] = v,
            ColumnOutcome::Short { found } => shortfalls.push(Shortfall { marker: m, found }),
        }
    }

    if shortfalls.is_empty() {
        FrameOutcome::Accepted(Frame { cols })
    } else {
        FrameOutcome::Rejected(shortfalls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn span_runs_to_nearest_following_marker_of_any_kind() {
        // PTS data region ends at REB even though REB is a different marker.
        let t = toks("PTS 1 2 3 4 5 60 6 7 8 9 10 REB 0 0 0 0 0 0 0 0 0 0 0");
        let lm = locate(&t);
        assert_eq!(lm.per_marker[Marker::Points as usize], vec![0]);
        assert_eq!(next_boundary(&lm.boundaries, 0, t.len()), 12);
    }

    #[test]
    fn span_without_following_marker_runs_to_stream_end() {
        let t = toks("PTS 1 2 3");
        let lm = locate(&t);
        assert_eq!(next_boundary(&lm.boundaries, 0, t.len()), t.len());
    }

    #[test]
    fn occurrences_concatenate_in_stream_order() {
        // Two PTS blocks of 5+1 and 5 values, as the per-team headers produce.
        let t = toks("PTS 1 2 3 4 5 15 PTS 6 7 8 9 10");
        let lm = locate(&t);
        match assemble_column(Marker::Points, &t, &lm) {
            ColumnOutcome::Complete(v) => {
                assert_eq!(v, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
            }
            ColumnOutcome::Short { found } => panic!("short column: {found}"),
        }
    }

    #[test]
    fn total_slot_is_discarded() {
        let t = toks("PTS 11 12 13 14 15 65 21 22 23 24 25");
        let lm = locate(&t);
        match assemble_column(Marker::Points, &t, &lm) {
            ColumnOutcome::Complete(v) => {
                assert_eq!(v.len(), SLOTS);
                assert!(!v.contains(&"65".to_string()));
            }
            ColumnOutcome::Short { .. } => panic!("expected complete column"),
        }
    }

    #[test]
    fn ten_values_reject_rather_than_reslice() {
        // Exactly SLOTS cleaned values: the total row went missing. The
        // column must come back short, not silently re-sliced.
        let t = toks("PTS 1 2 3 4 5 6 7 8 9 10");
        let lm = locate(&t);
        assert!(matches!(
            assemble_column(Marker::Points, &t, &lm),
            ColumnOutcome::Short { found: 10 }
        ));
    }

    #[test]
    fn missing_marker_rejects_the_frame() {
        let t = toks("PTS 1 2 3 4 5 15 6 7 8 9 10");
        match assemble(&t) {
            FrameOutcome::Rejected(shorts) => {
                // Every marker but PTS is missing outright.
                assert_eq!(shorts.len(), MARKER_COUNT - 1);
                assert!(shorts.iter().all(|s| s.found == 0));
                assert!(!shorts.iter().any(|s| s.marker == Marker::Points));
            }
            FrameOutcome::Accepted(_) => panic!("frame should be rejected"),
        }
    }
}
