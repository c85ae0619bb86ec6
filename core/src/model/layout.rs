//! The fixed layout of a weekly attendance sheet.
//!
//! Every source workbook follows the same shape: three header rows, then one
//! row per student with number / name / id in the first three columns and the
//! session marks laid out day by day after that (Sun-Thu, 4 sessions each).
//! This is a contract with the sheet authors, not something to detect from
//! the data; a different weekly shape means editing these constants.

/// First three rows are always header/metadata and skipped unconditionally.
pub const DATA_START_ROW: usize = 3;

pub const NUMBER_COL: usize = 0;
pub const NAME_COL: usize = 1;
pub const ID_COL: usize = 2;

/// Session marks start at column D.
pub const SESSION_START_COL: usize = 3;

pub const DAYS_PER_WEEK: usize = 5;
pub const SESSIONS_PER_DAY: usize = 4;
pub const SESSIONS_PER_WEEK: usize = DAYS_PER_WEEK * SESSIONS_PER_DAY;

/// A day counts as attended once at least 3 of its 4 sessions show presence.
pub const DAY_PRESENCE_THRESHOLD: usize = 3;

/// A name cell must hold at least this many characters (trimmed) for the row
/// to count as a student row.
pub const MIN_NAME_LEN: usize = 3;

/// Column holding session `session` of day `day` (both 0-based).
pub fn session_col(day: usize, session: usize) -> usize {
    SESSION_START_COL + day * SESSIONS_PER_DAY + session
}
