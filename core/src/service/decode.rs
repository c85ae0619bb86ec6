//! Reconstructing the fixed session grid from one student row.

use crate::model::layout::{self, DAYS_PER_WEEK, SESSIONS_PER_DAY};
use crate::model::sheet::CellValue;
use crate::model::student::SessionGrid;

/// A session mark is present when the cell coerces to a number >= 1 (a 1,
/// a true, a "1" typed as text). Blanks, NaN and everything else are absent.
pub fn session_present(cell: &CellValue) -> bool {
    matches!(cell.as_number(), Some(n) if n >= 1.0)
}

/// Decode one student row into the full 5x4 grid. Columns beyond the row's
/// actual length read as absent, so short rows never fail, they just lose
/// sessions.
pub fn decode_session_grid(row: &[CellValue]) -> SessionGrid {
    let mut grid = [[false; SESSIONS_PER_DAY]; DAYS_PER_WEEK];
    for (day, sessions) in grid.iter_mut().enumerate() {
        for (session, mark) in sessions.iter_mut().enumerate() {
            let col = layout::session_col(day, session);
            *mark = row.get(col).map(session_present).unwrap_or(false);
        }
    }
    grid
}
