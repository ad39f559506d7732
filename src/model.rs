// src/model.rs
//
// Plain structured output of the extraction pipeline. These types exist only
// as return values; persistence belongs to whatever consumes them.

use serde::{Deserialize, Serialize};

use crate::config::consts::TEAM_SIZE;

/// One game line for a single player, as read off the sheet. Values pass
/// through exactly as recognized; nothing here reconciles made/attempted
/// pairs or cross-checks points against shooting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub pts: u32,
    pub reb: u32,
    pub ast: u32,
    pub stl: u32,
    pub blk: u32,
    pub foul: u32,
    pub turnover: u32,
    pub fgm: u32,
    pub fga: u32,
    pub three_pm: u32,
    pub three_pa: u32,
    pub ftm: u32,
    pub fta: u32,
}

/// Which block of the sheet a slot belongs to. The upper block is the home
/// team by layout convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn from_slot(slot: usize) -> TeamSide {
        if slot < TEAM_SIZE { TeamSide::Home } else { TeamSide::Away }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamSide::Home => "Home",
            TeamSide::Away => "Away",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: TeamSide,
    pub stats: PlayerStats,
}

/// Column layout shared by the delimited exports and the GUI table model.
pub const EXPORT_HEADERS: [&str; 15] = [
    "Player", "Team", "PTS", "REB", "AST", "STL", "BLK", "PF", "TO",
    "FGM", "FGA", "3PM", "3PA", "FTM", "FTA",
];

impl PlayerRecord {
    /// Flatten into one export row matching `EXPORT_HEADERS`.
    pub fn export_row(&self) -> Vec<String> {
        let s = &self.stats;
        let mut row = Vec::with_capacity(EXPORT_HEADERS.len());
        row.push(self.name.clone());
        row.push(self.team.label().to_string());
        for v in [
            s.pts, s.reb, s.ast, s.stl, s.blk, s.foul, s.turnover,
            s.fgm, s.fga, s.three_pm, s.three_pa, s.ftm, s.fta,
        ] {
            row.push(v.to_string());
        }
        row
    }
}
