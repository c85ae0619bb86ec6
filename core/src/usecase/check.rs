//! Pre-analysis structure check: how many students does each sheet hold,
//! and how does that compare to a baseline week? Catches renamed, added or
//! dropped groups before anyone trusts the week's numbers.

use std::collections::HashMap;

use crate::model::sheet::SheetTable;
use crate::service::scan;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    pub group: String,
    pub students: usize,
}

/// Per-group valid-student counts for one workbook, in sheet order. Sheets
/// with zero students are kept here on purpose; an empty group is exactly
/// the kind of drift this check exists to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStructure {
    pub groups: Vec<GroupCount>,
    pub total_students: usize,
}

pub fn check_structure(sheets: &[SheetTable]) -> SheetStructure {
    let groups: Vec<GroupCount> = sheets
        .iter()
        .map(|sheet| GroupCount {
            group: sheet.name.clone(),
            students: scan::student_rows(sheet).count(),
        })
        .collect();
    let total_students = groups.iter().map(|g| g.students).sum();
    SheetStructure {
        groups,
        total_students,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountDrift {
    pub group: String,
    pub baseline: usize,
    pub current: usize,
}

/// Differences between a baseline structure and the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureDiff {
    pub new_groups: Vec<String>,
    pub missing_groups: Vec<String>,
    pub changed_groups: Vec<CountDrift>,
    pub group_delta: i64,
    pub student_delta: i64,
}

impl StructureDiff {
    pub fn is_unchanged(&self) -> bool {
        self.new_groups.is_empty()
            && self.missing_groups.is_empty()
            && self.changed_groups.is_empty()
    }
}

pub fn diff_structures(baseline: &SheetStructure, current: &SheetStructure) -> StructureDiff {
    let baseline_counts: HashMap<&str, usize> = baseline
        .groups
        .iter()
        .map(|g| (g.group.as_str(), g.students))
        .collect();
    let current_counts: HashMap<&str, usize> = current
        .groups
        .iter()
        .map(|g| (g.group.as_str(), g.students))
        .collect();

    let mut new_groups: Vec<String> = current
        .groups
        .iter()
        .filter(|g| !baseline_counts.contains_key(g.group.as_str()))
        .map(|g| g.group.clone())
        .collect();
    new_groups.sort();

    let mut missing_groups: Vec<String> = baseline
        .groups
        .iter()
        .filter(|g| !current_counts.contains_key(g.group.as_str()))
        .map(|g| g.group.clone())
        .collect();
    missing_groups.sort();

    let changed_groups: Vec<CountDrift> = current
        .groups
        .iter()
        .filter_map(|g| {
            let before = *baseline_counts.get(g.group.as_str())?;
            (before != g.students).then(|| CountDrift {
                group: g.group.clone(),
                baseline: before,
                current: g.students,
            })
        })
        .collect();

    StructureDiff {
        new_groups,
        missing_groups,
        changed_groups,
        group_delta: current.groups.len() as i64 - baseline.groups.len() as i64,
        student_delta: current.total_students as i64 - baseline.total_students as i64,
    }
}
