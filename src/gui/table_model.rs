// src/gui/table_model.rs
//
// Display shape of the extracted records. The GUI shows shooting columns
// as made/attempted pairs; the flat 15-column layout in `model` is for
// delimited exports only.

use crate::model::PlayerRecord;

pub const HEADERS: [&str; 12] = [
    "Player", "Team", "PTS", "REB", "AST", "STL", "BLK", "PF", "TO", "FG", "3PT", "FT",
];

/// Columns rendered centered/numeric (everything after Player and Team).
#[inline]
pub fn is_numeric(col: usize) -> bool {
    col >= 2
}

pub fn display_row(rec: &PlayerRecord) -> [String; 12] {
    let s = &rec.stats;
    [
        rec.name.clone(),
        rec.team.label().to_string(),
        s.pts.to_string(),
        s.reb.to_string(),
        s.ast.to_string(),
        s.stl.to_string(),
        s.blk.to_string(),
        s.foul.to_string(),
        s.turnover.to_string(),
        format!("{}/{}", s.fgm, s.fga),
        format!("{}/{}", s.three_pm, s.three_pa),
        format!("{}/{}", s.ftm, s.fta),
    ]
}
