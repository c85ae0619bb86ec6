use serde::{Deserialize, Serialize};

use crate::model::student::StudentRecord;

/// Per-group roll-up over the records of one sheet.
///
/// Invariant: `full_week_count + partial_count + never_attended_count`
/// equals `total_students`, and `total_students` equals `students.len()`.
/// Groups with zero valid students never produce a summary at all.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub group: String,
    pub total_students: usize,
    pub average_attendance: f64,
    pub full_week_count: usize,
    pub partial_count: usize,
    pub never_attended_count: usize,
    pub students: Vec<StudentRecord>,
}

/// Week-level totals across all groups. The average is a straight mean over
/// every individual student, so larger groups weigh proportionally more.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub total_students: usize,
    pub full_week: usize,
    pub partial: usize,
    pub never: usize,
    pub average_attendance: f64,
    pub groups: usize,
}
