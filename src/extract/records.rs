// src/extract/records.rs
//
// Last stage: zip the validated columns into per-player records. The shape
// filters upstream were lenient about *looking* right; this is where values
// must actually parse. A slot that fails is skipped on its own, the frame
// is not re-opened.

use log::debug;

use super::frame::Frame;
use super::markers::Marker;
use crate::config::consts::SLOTS;
use crate::model::{PlayerRecord, PlayerStats, TeamSide};

/// Build up to `SLOTS` records, home slots first. Slots whose values fail
/// the strict parse are absent from the result.
pub fn build(frame: &Frame) -> Vec<PlayerRecord> {
    (0..SLOTS)
        .filter_map(|slot| {
            let rec = build_slot(frame, slot);
            if rec.is_none() {
                debug!(
                    "player slot {slot} ({}) skipped: field failed strict parse",
                    frame.value(Marker::Player, slot)
                );
            }
            rec
        })
        .collect()
}

fn build_slot(frame: &Frame, slot: usize) -> Option<PlayerRecord> {
    let (fgm, fga) = fraction(frame, Marker::FieldGoals, slot)?;
    let (three_pm, three_pa) = fraction(frame, Marker::ThreePointers, slot)?;
    let (ftm, fta) = fraction(frame, Marker::FreeThrows, slot)?;

    let stats = PlayerStats {
        pts: count(frame, Marker::Points, slot)?,
        reb: count(frame, Marker::Rebounds, slot)?,
        ast: count(frame, Marker::Assists, slot)?,
        stl: count(frame, Marker::Steals, slot)?,
        blk: count(frame, Marker::Blocks, slot)?,
        foul: count(frame, Marker::Fouls, slot)?,
        turnover: count(frame, Marker::Turnovers, slot)?,
        fgm,
        fga,
        three_pm,
        three_pa,
        ftm,
        fta,
    };

    Some(PlayerRecord {
        name: frame.value(Marker::Player, slot).to_string(),
        team: TeamSide::from_slot(slot),
        stats,
    })
}

fn count(frame: &Frame, m: Marker, slot: usize) -> Option<u32> {
    frame.value(m, slot).parse().ok()
}

/// `made/attempted` with a literal slash. A separator the cleaner tolerated
/// but the sheet didn't mean (`12-5`) fails here and skips the player.
fn fraction(frame: &Frame, m: Marker, slot: usize) -> Option<(u32, u32)> {
    let (made, att) = frame.value(m, slot).split_once('/')?;
    Some((made.parse().ok()?, att.parse().ok()?))
}
