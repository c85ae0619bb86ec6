//! Turning one located student row into a finished attendance record.

use crate::model::layout::{
    DAYS_PER_WEEK, DAY_PRESENCE_THRESHOLD, ID_COL, NAME_COL, NUMBER_COL,
};
use crate::model::sheet::SheetTable;
use crate::model::student::{SessionGrid, StudentRecord, UNKNOWN};
use crate::service::decode::decode_session_grid;

/// Apply the day-presence rule and percentage computation to a decoded grid.
///
/// A day is attended once at least 3 of its 4 sessions show presence; the
/// percentage is always days-attended out of 5, never out of total sessions.
/// This is a pure computation with no error path: a malformed grid simply
/// carries more absences.
pub fn aggregate_student(
    group: &str,
    number: String,
    name: String,
    student_id: String,
    sessions: SessionGrid,
) -> StudentRecord {
    let mut daily_attendance = [false; DAYS_PER_WEEK];
    for (day, marks) in sessions.iter().enumerate() {
        let attended = marks.iter().filter(|&&m| m).count();
        daily_attendance[day] = attended >= DAY_PRESENCE_THRESHOLD;
    }

    let days_attended = daily_attendance.iter().filter(|&&d| d).count();
    let attendance_percentage = days_attended as f64 / DAYS_PER_WEEK as f64 * 100.0;
    let total_sessions = sessions.iter().flatten().filter(|&&m| m).count();

    StudentRecord {
        group: group.to_string(),
        number,
        name,
        student_id,
        sessions,
        daily_attendance,
        days_attended,
        attendance_percentage,
        total_sessions,
    }
}

/// Build the record for a row the locator already validated: identity cells
/// from the first three columns, grid from the rest. Number and id fall back
/// to the explicit unknown marker when the sheet leaves them blank.
pub fn student_record(table: &SheetTable, row: usize) -> StudentRecord {
    let cells = table.row(row);
    let number = table.cell(row, NUMBER_COL).label_or(UNKNOWN);
    let name = table
        .cell(row, NAME_COL)
        .as_text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let student_id = table.cell(row, ID_COL).label_or(UNKNOWN);
    let sessions = decode_session_grid(cells);
    aggregate_student(&table.name, number, name, student_id, sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sheet::CellValue;

    fn grid_with_daily(pattern: [usize; 5]) -> SessionGrid {
        let mut grid = [[false; 4]; 5];
        for (day, &count) in pattern.iter().enumerate() {
            for session in 0..count {
                grid[day][session] = true;
            }
        }
        grid
    }

    #[test]
    fn test_three_of_four_sessions_counts_as_attended() {
        let record = aggregate_student(
            "G1",
            "1".to_string(),
            "Ahmed Ali".to_string(),
            "S-100".to_string(),
            grid_with_daily([3, 3, 3, 3, 3]),
        );
        assert_eq!(record.daily_attendance, [true; 5]);
        assert_eq!(record.days_attended, 5);
        assert_eq!(record.attendance_percentage, 100.0);
        assert_eq!(record.total_sessions, 15);
    }

    #[test]
    fn test_two_of_four_sessions_does_not_count() {
        let record = aggregate_student(
            "G1",
            "1".to_string(),
            "Ahmed Ali".to_string(),
            "S-100".to_string(),
            grid_with_daily([2, 2, 2, 2, 2]),
        );
        assert_eq!(record.daily_attendance, [false; 5]);
        assert_eq!(record.days_attended, 0);
        assert_eq!(record.attendance_percentage, 0.0);
        assert_eq!(record.total_sessions, 10);
    }

    #[test]
    fn test_percentage_is_days_out_of_five() {
        let record = aggregate_student(
            "G1",
            "1".to_string(),
            "Ahmed Ali".to_string(),
            "S-100".to_string(),
            grid_with_daily([4, 4, 3, 0, 2]),
        );
        assert_eq!(record.days_attended, 3);
        assert_eq!(record.attendance_percentage, 60.0);
        assert_eq!(record.total_sessions, 13);
    }

    #[test]
    fn test_blank_identity_cells_fall_back_to_marker() {
        let mut row = vec![
            CellValue::Empty,
            CellValue::Text("  Sara Omar  ".to_string()),
            CellValue::Empty,
        ];
        row.extend(std::iter::repeat(CellValue::Number(1.0)).take(20));
        let table = SheetTable::new(
            "G2",
            vec![vec![], vec![], vec![], row],
        );

        let record = student_record(&table, 3);
        assert_eq!(record.group, "G2");
        assert_eq!(record.number, UNKNOWN);
        assert_eq!(record.name, "Sara Omar");
        assert_eq!(record.student_id, UNKNOWN);
        assert_eq!(record.days_attended, 5);
        assert_eq!(record.total_sessions, 20);
    }
}
