// src/config/consts.rs

// Box score layout. The source sheet always lists five players per team,
// with one aggregate row per team interleaved after the five.
pub const TEAM_SIZE: usize = 5;
pub const TEAM_COUNT: usize = 2;
pub const SLOTS: usize = TEAM_SIZE * TEAM_COUNT;

/// Index of the team-total row inside one assembled column, counting from
/// the start of the concatenated value run (5 players, then the total).
pub const TOTAL_SLOT: usize = TEAM_SIZE;

/// Minimum raw length an assembled column needs before slicing:
/// 5 players + 1 total + 5 players.
pub const RAW_COLUMN_LEN: usize = SLOTS + 1;

// Name cleaning. Leading glyphs the recognizer tends to invent in front of
// player names (bullets, degree signs, at-signs and lookalikes).
pub const NAME_NOISE_GLYPHS: &[char] = &['•', '·', '◦', '°', '@', '®', '©', '¤', '*'];
pub const NAME_MIN_LEN: usize = 3;

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "boxscore";

/// Suffix appended to image stems by the normalization pass.
pub const NORMALIZED_SUFFIX: &str = "_norm";
