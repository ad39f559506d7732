// tests/extract_pipeline.rs
//
// End-to-end behavior of the extraction pipeline over synthetic sheets and
// captured-style fixtures: the all-or-nothing frame gate, per-player skips,
// ordering, and noise tolerance.

use std::fs;
use std::path::PathBuf;

use boxscan::extract;
use boxscan::model::TeamSide;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

const HOME_NAMES: [&str; 5] = ["Tanaka", "Suzuki", "Takahashi", "Watanabe", "Ito"];
const AWAY_NAMES: [&str; 5] = ["Yamamoto", "Nakamura", "Kobayashi", "Kato", "Yoshida"];

/// Single-block layout: every marker once, followed by its full 5+1+5 run.
/// Mutations poke at individual tokens to build the failure cases.
fn flat_sheet() -> String {
    let mut s = String::new();
    s.push_str("PLAYER Tanaka Suzuki Takahashi Watanabe Ito TOTAL ");
    s.push_str("Yamamoto Nakamura Kobayashi Kato Yoshida\n");
    s.push_str("PTS 18 12 7 9 4 50 21 8 6 11 3\n");
    s.push_str("REB 5 7 2 9 3 26 4 6 8 2 5\n");
    s.push_str("AST 4 2 1 6 2 15 7 3 2 1 4\n");
    s.push_str("STL 2 1 0 3 1 7 2 0 1 1 0\n");
    s.push_str("BLK 0 1 2 0 1 4 1 0 0 2 1\n");
    s.push_str("PF 3 2 4 1 2 12 2 3 1 4 2\n");
    s.push_str("TO 1 2 3 0 2 8 4 1 2 0 3\n");
    s.push_str("FG 7/12 5/9 3/8 4/6 2/5 21/40 8/15 3/7 2/6 4/9 1/4\n");
    s.push_str("3PT 2/5 1/3 0/2 1/2 0/1 4/13 3/6 1/4 0/1 2/5 0/2\n");
    s.push_str("FT 2/2 1/2 1/4 0/0 0/1 4/9 2/3 1/1 2/2 1/2 1/1\n");
    s
}

/* ---------------- whole-sheet behavior ---------------- */

#[test]
fn clean_sheet_yields_ten_records_home_first() {
    let records = extract::box_score(&flat_sheet());
    assert_eq!(records.len(), 10);

    for (i, rec) in records.iter().enumerate() {
        let (expected_name, expected_side) = if i < 5 {
            (HOME_NAMES[i], TeamSide::Home)
        } else {
            (AWAY_NAMES[i - 5], TeamSide::Away)
        };
        assert_eq!(rec.name, expected_name);
        assert_eq!(rec.team, expected_side);
    }

    // Spot-check a full line against the sheet.
    let suzuki = &records[1];
    assert_eq!(suzuki.stats.pts, 12);
    assert_eq!(suzuki.stats.reb, 7);
    assert_eq!(suzuki.stats.ast, 2);
    assert_eq!(suzuki.stats.stl, 1);
    assert_eq!(suzuki.stats.blk, 1);
    assert_eq!(suzuki.stats.foul, 2);
    assert_eq!(suzuki.stats.turnover, 2);
    assert_eq!((suzuki.stats.fgm, suzuki.stats.fga), (5, 9));
    assert_eq!((suzuki.stats.three_pm, suzuki.stats.three_pa), (1, 3));
    assert_eq!((suzuki.stats.ftm, suzuki.stats.fta), (1, 2));
}

#[test]
fn missing_marker_rejects_whole_frame() {
    let text = flat_sheet().replace("STL", "SXL");
    assert!(extract::box_score(&text).is_empty());
}

#[test]
fn garbled_points_value_skips_only_that_player() {
    // Slot 3's points token turns into an absurd digit run (glyph doubling).
    // It still *looks* like a count, so the column stays complete, but the
    // strict parse fails and only that player drops out.
    let text = flat_sheet().replace("PTS 18 12 7 9 4", "PTS 18 12 7 99999999999999999999 4");
    let records = extract::box_score(&text);
    assert_eq!(records.len(), 9);
    assert!(!records.iter().any(|r| r.name == "Watanabe"));
    assert_eq!(records[3].name, "Ito");
    assert_eq!(records.iter().filter(|r| r.team == TeamSide::Away).count(), 5);
}

#[test]
fn misread_fraction_separator_skips_only_that_player() {
    // FG slash misread as a dash: shape-plausible, semantically broken.
    let text = flat_sheet().replace("4/6", "4-6");
    let records = extract::box_score(&text);
    assert_eq!(records.len(), 9);
    assert!(!records.iter().any(|r| r.name == "Watanabe"));
    // Everyone else keeps their full line.
    assert_eq!(records[0].stats.fgm, 7);
    // Slot 8 (Kato, FG 4/9) lands at index 7 once slot 3 is gone.
    assert_eq!(records[7].name, "Kato");
    assert_eq!(records[7].stats.fga, 9);
}

#[test]
fn empty_input_yields_empty_list() {
    assert!(extract::box_score("").is_empty());
    assert!(extract::box_score("   \n\t  ").is_empty());
}

/* ---------------- pipeline guarantees ---------------- */

#[test]
fn same_input_same_output() {
    for text in [flat_sheet(), read_fixture("noisy_sheet.txt"), String::from("PTS 1 2")] {
        let a = extract::box_score(&text);
        let b = extract::box_score(&text);
        assert_eq!(a, b);
    }
}

#[test]
fn short_column_rejects_rather_than_partially_fills() {
    // Drop one REB value: ten cleaned values is one short of the 5+1+5
    // layout, so nothing may come back.
    let text = flat_sheet().replace("REB 5 7 2 9 3 26", "REB 5 7 2 9 3");
    assert!(extract::box_score(&text).is_empty());

    // Same when a whole column is noise.
    let text = flat_sheet().replace("AST 4 2 1 6 2 15 7 3 2 1 4", "AST x x x x x x x x x x x");
    assert!(extract::box_score(&text).is_empty());
}

#[test]
fn inconsistent_fractions_pass_through_unfixed() {
    // 9 made of 4 attempted is impossible, and exactly what the caller
    // should see: the pipeline parses, it does not reconcile.
    let text = flat_sheet().replace("5/9", "9/5");
    let records = extract::box_score(&text);
    assert_eq!(records.len(), 10);
    assert_eq!((records[1].stats.fgm, records[1].stats.fga), (9, 5));
}

#[test]
fn shape_mismatched_noise_does_not_shift_columns() {
    // Scatter tokens that fail every shape rule through the spans.
    let noisy = flat_sheet()
        .replace("PTS 18", "PTS ## 18")
        .replace("REB 5", "REB ,, 5")
        .replace("FG 7/12", "FG == 7/12")
        .replace("Ito TOTAL", "Ito %% TOTAL");
    let clean = extract::box_score(&flat_sheet());
    let noisy = extract::box_score(&noisy);
    assert_eq!(clean, noisy);
}

/* ---------------- captured-style fixtures ---------------- */

#[test]
fn two_block_sheet_concatenates_team_runs() {
    // Headers repeat once per team block; each block carries its own total
    // row, and the away block's trailing total is ignored by the slicing.
    let records = extract::box_score(&read_fixture("two_block_sheet.txt"));
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].name, "Tanaka");
    assert_eq!(records[5].name, "Yamamoto");
    assert_eq!(records[9].name, "Yoshida");
    assert_eq!(records[5].stats.pts, 21);
    assert_eq!((records[9].stats.ftm, records[9].stats.fta), (1, 1));
}

#[test]
fn noisy_fixture_extracts_the_same_game() {
    let noisy = extract::box_score(&read_fixture("noisy_sheet.txt"));
    let clean = extract::box_score(&read_fixture("two_block_sheet.txt"));
    assert_eq!(noisy, clean);
}
