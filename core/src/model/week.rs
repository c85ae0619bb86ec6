use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::summary::WeekSummary;

/// One registered week: identity, date labels, where its workbook lives, and
/// the cached summary once the week has been analyzed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekEntry {
    pub week_id: String,
    pub start_date: String,
    pub end_date: String,
    pub source_file: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub summary: Option<WeekSummary>,
}

impl WeekEntry {
    pub fn new(
        week_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        source_file: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            week_id: week_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            source_file: source_file.into(),
            description: description.into(),
            created_at: Utc::now(),
            summary: None,
        }
    }
}
