use serde::{Deserialize, Serialize};

use crate::model::layout::{DAYS_PER_WEEK, SESSIONS_PER_DAY};

/// Marker for identity fields the sheet left blank. Records never carry a
/// null number or id, downstream renderers rely on that.
pub const UNKNOWN: &str = "N/A";

/// Presence per session, always exactly 5 days x 4 sessions. Short source
/// rows are padded with `false` at decode time.
pub type SessionGrid = [[bool; SESSIONS_PER_DAY]; DAYS_PER_WEEK];

/// One student within one group for one week, with all derived attendance
/// figures baked in. Built once by the aggregator and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub group: String,
    pub number: String,
    pub name: String,
    pub student_id: String,
    pub sessions: SessionGrid,
    pub daily_attendance: [bool; DAYS_PER_WEEK],
    pub days_attended: usize,
    pub attendance_percentage: f64,
    pub total_sessions: usize,
}
