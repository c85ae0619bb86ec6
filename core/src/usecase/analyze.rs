//! The full week analysis pipeline: locate student rows per sheet, decode
//! and aggregate each one, roll groups up, roll the week up. Pure over the
//! loaded tables, so re-running a week is always reproducible.

use crate::error::AnalyzeError;
use crate::model::sheet::SheetTable;
use crate::model::student::StudentRecord;
use crate::model::summary::{GroupSummary, WeekSummary};
use crate::service::{aggregate, scan, summary};

/// Everything one week's analysis produces: the per-group summaries (with
/// their student records) for rendering, and the week summary for the
/// registry cache.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekAnalysis {
    pub groups: Vec<GroupSummary>,
    pub summary: WeekSummary,
}

/// Analyze one week's worth of group sheets.
///
/// Sheets with no valid students are dropped here; they contribute to no
/// totals and no averages. A week where every sheet is empty is the
/// distinct [`AnalyzeError::EmptyWeek`] outcome.
pub fn analyze_week(sheets: &[SheetTable]) -> Result<WeekAnalysis, AnalyzeError> {
    let mut groups = Vec::new();
    for sheet in sheets {
        let students: Vec<StudentRecord> = scan::student_rows(sheet)
            .map(|row| aggregate::student_record(sheet, row))
            .collect();
        if let Some(group) = summary::summarize_group(&sheet.name, students) {
            groups.push(group);
        }
    }

    let summary = summary::summarize_week(&groups).ok_or(AnalyzeError::EmptyWeek)?;
    Ok(WeekAnalysis { groups, summary })
}
