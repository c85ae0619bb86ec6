//! Group and week roll-ups over finished student records.

use crate::model::layout::DAYS_PER_WEEK;
use crate::model::student::StudentRecord;
use crate::model::summary::{GroupSummary, WeekSummary};

/// Roll one group's records up into its summary. A group with zero valid
/// students has no summary at all; it must vanish from every denominator
/// instead of producing a division artifact.
pub fn summarize_group(group: &str, students: Vec<StudentRecord>) -> Option<GroupSummary> {
    if students.is_empty() {
        return None;
    }

    let total_students = students.len();
    let average_attendance = students
        .iter()
        .map(|s| s.attendance_percentage)
        .sum::<f64>()
        / total_students as f64;
    let full_week_count = students
        .iter()
        .filter(|s| s.days_attended == DAYS_PER_WEEK)
        .count();
    let partial_count = students
        .iter()
        .filter(|s| s.days_attended > 0 && s.days_attended < DAYS_PER_WEEK)
        .count();
    let never_attended_count = students.iter().filter(|s| s.days_attended == 0).count();

    Some(GroupSummary {
        group: group.to_string(),
        total_students,
        average_attendance,
        full_week_count,
        partial_count,
        never_attended_count,
        students,
    })
}

/// Roll all group summaries of one week up into the week summary.
///
/// Counts are sums across groups; the average is the mean over every
/// individual student, not over group averages, so unevenly sized groups
/// keep their proper weight. Zero students across the whole week means
/// there is nothing to summarize.
pub fn summarize_week(groups: &[GroupSummary]) -> Option<WeekSummary> {
    let total_students: usize = groups.iter().map(|g| g.total_students).sum();
    if total_students == 0 {
        return None;
    }

    let full_week = groups.iter().map(|g| g.full_week_count).sum();
    let partial = groups.iter().map(|g| g.partial_count).sum();
    let never = groups.iter().map(|g| g.never_attended_count).sum();
    let average_attendance = groups
        .iter()
        .flat_map(|g| &g.students)
        .map(|s| s.attendance_percentage)
        .sum::<f64>()
        / total_students as f64;

    Some(WeekSummary {
        total_students,
        full_week,
        partial,
        never,
        average_attendance,
        groups: groups.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::student::SessionGrid;
    use crate::service::aggregate::aggregate_student;

    fn student(group: &str, name: &str, sessions_per_day: [usize; 5]) -> StudentRecord {
        let mut grid: SessionGrid = [[false; 4]; 5];
        for (day, &count) in sessions_per_day.iter().enumerate() {
            for session in 0..count {
                grid[day][session] = true;
            }
        }
        aggregate_student(
            group,
            "1".to_string(),
            name.to_string(),
            "S-1".to_string(),
            grid,
        )
    }

    #[test]
    fn test_group_counts_sum_to_total() {
        let students = vec![
            student("G1", "Ahmed Ali", [4, 4, 4, 4, 4]),
            student("G1", "Sara Omar", [3, 3, 0, 0, 0]),
            student("G1", "Omar Said", [0, 0, 0, 0, 0]),
            student("G1", "Mona Adel", [2, 2, 2, 2, 2]),
        ];
        let summary = summarize_group("G1", students).unwrap();
        assert_eq!(summary.total_students, 4);
        assert_eq!(summary.full_week_count, 1);
        assert_eq!(summary.partial_count, 1);
        // 2-of-4 days never cross the threshold, so Mona counts as never.
        assert_eq!(summary.never_attended_count, 2);
        assert_eq!(
            summary.full_week_count + summary.partial_count + summary.never_attended_count,
            summary.total_students
        );
    }

    #[test]
    fn test_empty_group_has_no_summary() {
        assert!(summarize_group("G1", Vec::new()).is_none());
    }

    #[test]
    fn test_group_scenario_full_partial_never() {
        // Row 1 attends all 20 sessions, row 2 exactly 3 per day (15/20),
        // row 3 nothing: total 3, full 2, partial 0, never 1, avg 66.7%.
        let students = vec![
            student("G1", "Ahmed Ali", [4, 4, 4, 4, 4]),
            student("G1", "Sara Omar", [3, 3, 3, 3, 3]),
            student("G1", "Omar Said", [0, 0, 0, 0, 0]),
        ];
        let summary = summarize_group("G1", students).unwrap();
        assert_eq!(summary.total_students, 3);
        assert_eq!(summary.full_week_count, 2);
        assert_eq!(summary.partial_count, 0);
        assert_eq!(summary.never_attended_count, 1);
        let expected = (100.0 + 100.0 + 0.0) / 3.0;
        assert!((summary.average_attendance - expected).abs() < 0.001);
    }

    #[test]
    fn test_week_average_is_student_weighted() {
        // One group of 3 students at 100%, one group of 1 student at 0%.
        // Group-of-averages would say 50%; the student mean is 75%.
        let big = summarize_group(
            "G1",
            vec![
                student("G1", "Ahmed Ali", [4, 4, 4, 4, 4]),
                student("G1", "Sara Omar", [4, 4, 4, 4, 4]),
                student("G1", "Omar Said", [4, 4, 4, 4, 4]),
            ],
        )
        .unwrap();
        let small = summarize_group(
            "G2",
            vec![student("G2", "Mona Adel", [0, 0, 0, 0, 0])],
        )
        .unwrap();

        let week = summarize_week(&[big, small]).unwrap();
        assert_eq!(week.total_students, 4);
        assert_eq!(week.groups, 2);
        assert_eq!(week.full_week, 3);
        assert_eq!(week.partial, 0);
        assert_eq!(week.never, 1);
        assert!((week.average_attendance - 75.0).abs() < 0.001);
        assert_eq!(week.full_week + week.partial + week.never, week.total_students);
    }

    #[test]
    fn test_week_with_no_groups_has_no_summary() {
        assert!(summarize_week(&[]).is_none());
    }
}
