// src/league.rs
//
// League math over extracted stat lines: game scores from player points,
// standings over finished games, per-player averages and leader boards.
// Everything here is a pure function over in-memory values; storage and
// scheduling belong to the surrounding application.

use crate::model::{PlayerRecord, PlayerStats, TeamSide};

/// A finished game as the standings see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLine {
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
}

/// Each side's game score is the sum of its five players' points. The sheet
/// total row was discarded during assembly, so this is the only score the
/// caller gets — which also makes an OCR'd sheet self-consistent.
pub fn team_totals(records: &[PlayerRecord]) -> (u32, u32) {
    records.iter().fold((0, 0), |(home, away), r| match r.team {
        TeamSide::Home => (home + r.stats.pts, away),
        TeamSide::Away => (home, away + r.stats.pts),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct StandingRow {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    /// League points: 2 per win, 1 per loss.
    pub points: u32,
    pub avg_pf: f32,
    pub avg_pa: f32,
    pub diff: i64,
}

/// Standings over finished games, sorted by league points then point
/// differential, both descending. Drawn games count toward neither wins nor
/// losses (scored points still accumulate); teams appear in first-seen
/// order before sorting, which keeps ties deterministic.
pub fn standings(games: &[GameLine]) -> Vec<StandingRow> {
    let mut order: Vec<&str> = Vec::new();
    for g in games {
        for team in [g.home.as_str(), g.away.as_str()] {
            if !order.contains(&team) {
                order.push(team);
            }
        }
    }

    let mut rows: Vec<StandingRow> = order
        .into_iter()
        .map(|team| {
            let mut wins = 0u32;
            let mut losses = 0u32;
            let mut points_for = 0u64;
            let mut points_against = 0u64;
            for g in games {
                let (pf, pa) = if g.home == team {
                    (g.home_score, g.away_score)
                } else if g.away == team {
                    (g.away_score, g.home_score)
                } else {
                    continue;
                };
                points_for += u64::from(pf);
                points_against += u64::from(pa);
                if pf > pa {
                    wins += 1;
                } else if pf < pa {
                    losses += 1;
                }
            }
            let played = wins + losses;
            StandingRow {
                team: team.to_string(),
                wins,
                losses,
                points: wins * 2 + losses,
                avg_pf: per_game(points_for, played),
                avg_pa: per_game(points_against, played),
                diff: points_for as i64 - points_against as i64,
            }
        })
        .collect();

    rows.sort_by(|a, b| (b.points, b.diff).cmp(&(a.points, a.diff)));
    rows
}

fn per_game(total: u64, played: u32) -> f32 {
    if played == 0 {
        return 0.0;
    }
    let avg = total as f32 / played as f32;
    (avg * 10.0).round() / 10.0
}

/// Career/season aggregates for one player, averaged per game played, with
/// shooting percentages computed over summed attempts (zero-guarded).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerAverages {
    pub games: u32,
    pub pts: f32,
    pub reb: f32,
    pub ast: f32,
    pub stl: f32,
    pub blk: f32,
    pub foul: f32,
    pub turnover: f32,
    pub fg_pct: f32,
    pub three_pct: f32,
    pub ft_pct: f32,
}

pub fn averages(lines: &[PlayerStats]) -> PlayerAverages {
    let games = lines.len() as u32;
    if games == 0 {
        return PlayerAverages::default();
    }

    let mut sum = PlayerStats::default();
    for s in lines {
        sum.pts += s.pts;
        sum.reb += s.reb;
        sum.ast += s.ast;
        sum.stl += s.stl;
        sum.blk += s.blk;
        sum.foul += s.foul;
        sum.turnover += s.turnover;
        sum.fgm += s.fgm;
        sum.fga += s.fga;
        sum.three_pm += s.three_pm;
        sum.three_pa += s.three_pa;
        sum.ftm += s.ftm;
        sum.fta += s.fta;
    }

    let per = |v: u32| v as f32 / games as f32;
    PlayerAverages {
        games,
        pts: per(sum.pts),
        reb: per(sum.reb),
        ast: per(sum.ast),
        stl: per(sum.stl),
        blk: per(sum.blk),
        foul: per(sum.foul),
        turnover: per(sum.turnover),
        fg_pct: pct(sum.fgm, sum.fga),
        three_pct: pct(sum.three_pm, sum.three_pa),
        ft_pct: pct(sum.ftm, sum.fta),
    }
}

fn pct(made: u32, attempted: u32) -> f32 {
    if attempted == 0 {
        return 0.0;
    }
    made as f32 * 100.0 / attempted as f32
}

/// Leader-board categories: per-game averages of the headline counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderStat {
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
}

impl LeaderStat {
    fn of(self, s: &PlayerStats) -> u32 {
        match self {
            LeaderStat::Points => s.pts,
            LeaderStat::Assists => s.ast,
            LeaderStat::Rebounds => s.reb,
            LeaderStat::Steals => s.stl,
            LeaderStat::Blocks => s.blk,
        }
    }
}

/// Top `n` players by per-game average of one category. Players with no
/// games are excluded; ties keep input order.
pub fn leaders(
    entries: &[(String, Vec<PlayerStats>)],
    stat: LeaderStat,
    n: usize,
) -> Vec<(String, f32)> {
    let mut ranked: Vec<(String, f32)> = entries
        .iter()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(name, lines)| {
            let total: u32 = lines.iter().map(|s| stat.of(s)).sum();
            (name.clone(), total as f32 / lines.len() as f32)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked
}
