//! Locating the student rows inside a loosely structured sheet.
//!
//! The sheets are maintained by hand, so the student block can contain stray
//! separator rows and always ends in a run of blank/decorative rows. There is
//! no sentinel marker; the boundary is recognized by lookahead counting.

use crate::model::layout::{DATA_START_ROW, MIN_NAME_LEN, NAME_COL};
use crate::model::sheet::{CellValue, SheetTable};

/// Lookahead window, current row inclusive.
const LOOKAHEAD_ROWS: usize = 3;
/// Further failing rows within the window that mean "end of student data".
const LOOKAHEAD_FAIL_LIMIT: usize = 2;

/// A row holds a student when its name cell is text of trimmed length >= 3.
/// Numbers, booleans and blanks in the name column are never students.
pub fn is_student_row(table: &SheetTable, row: usize) -> bool {
    match table.cell(row, NAME_COL) {
        CellValue::Text(name) => name.trim().chars().count() >= MIN_NAME_LEN,
        _ => false,
    }
}

/// Row indices of the valid student rows, in sheet order, starting at the
/// fixed data offset.
///
/// A failing row does not end the scan by itself: the scan looks ahead over
/// a window of 3 rows (the failing row inclusive) and terminates only when
/// at least 2 of the rows after it also fail. Anything less is embedded
/// noise (a stray separator, one malformed line) and is skipped, which keeps
/// the students below it in the counts. A run of trailing blank rows always
/// trips the limit, so the true end of the table is still recognized.
pub fn student_rows(table: &SheetTable) -> impl Iterator<Item = usize> + '_ {
    let mut row = DATA_START_ROW;
    std::iter::from_fn(move || {
        while row < table.row_count() {
            let current = row;
            row += 1;
            if is_student_row(table, current) {
                return Some(current);
            }
            let window_end = (current + LOOKAHEAD_ROWS).min(table.row_count());
            let failing = (current + 1..window_end)
                .filter(|&r| !is_student_row(table, r))
                .count();
            if failing >= LOOKAHEAD_FAIL_LIMIT {
                // End of student data. Park the cursor so the iterator is
                // fused and cannot resume past the boundary.
                row = table.row_count();
                return None;
            }
            // Single stray row inside the data region, keep scanning.
        }
        None
    })
}
