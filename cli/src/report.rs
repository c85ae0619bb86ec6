//! Console rendering of analysis results and the week registry.

use rollcall_core::{SheetStructure, StructureDiff, WeekAnalysis, WeekEntry};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Students")]
    students: usize,
    #[tabled(rename = "Avg %")]
    average: String,
    #[tabled(rename = "Full Week")]
    full_week: usize,
    #[tabled(rename = "Partial")]
    partial: usize,
    #[tabled(rename = "Never")]
    never: usize,
}

pub fn print_week_analysis(entry: &WeekEntry, analysis: &WeekAnalysis) {
    println!(
        "\n\x1b[1;36m=== Week {} ({} - {}) ===\x1b[0m",
        entry.week_id, entry.start_date, entry.end_date
    );

    let rows: Vec<GroupRow> = analysis
        .groups
        .iter()
        .map(|g| GroupRow {
            group: g.group.clone(),
            students: g.total_students,
            average: format!("{:.1}", g.average_attendance),
            full_week: g.full_week_count,
            partial: g.partial_count,
            never: g.never_attended_count,
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    println!("{}", table);

    let s = &analysis.summary;
    let share = |count: usize| count as f64 / s.total_students as f64 * 100.0;
    println!("\nTotal students: {} across {} groups", s.total_students, s.groups);
    println!("Full week: {} ({:.1}%)", s.full_week, share(s.full_week));
    println!("Partial: {} ({:.1}%)", s.partial, share(s.partial));
    println!("Never: {} ({:.1}%)", s.never, share(s.never));
    println!("Overall average: {:.1}%", s.average_attendance);
}

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "No")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    student_id: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Sessions")]
    sessions: String,
}

pub fn print_students(analysis: &WeekAnalysis) {
    for group in &analysis.groups {
        println!("\n\x1b[1;36m{}\x1b[0m", group.group);
        let rows: Vec<StudentRow> = group
            .students
            .iter()
            .map(|s| StudentRow {
                number: s.number.clone(),
                name: s.name.clone(),
                student_id: s.student_id.clone(),
                days: format!("{}/5", s.days_attended),
                percentage: format!("{:.0}", s.attendance_percentage),
                sessions: format!("{}/20", s.total_sessions),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::modern());
        println!("{}", table);
    }
}

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week")]
    week_id: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Students")]
    students: String,
    #[tabled(rename = "Avg %")]
    average: String,
    #[tabled(rename = "Registered")]
    registered: String,
}

pub fn print_weeks(entries: &[WeekEntry]) {
    if entries.is_empty() {
        println!("No weeks registered yet.");
        return;
    }

    let rows: Vec<WeekRow> = entries
        .iter()
        .map(|e| WeekRow {
            week_id: e.week_id.clone(),
            dates: format!("{} - {}", e.start_date, e.end_date),
            students: match &e.summary {
                Some(s) => s.total_students.to_string(),
                None => "-".to_string(),
            },
            average: match &e.summary {
                Some(s) => format!("{:.1}", s.average_attendance),
                None => "not analyzed".to_string(),
            },
            registered: e.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn print_structure(structure: &SheetStructure) {
    println!("Group sheets: {}", structure.groups.len());
    for group in &structure.groups {
        println!("  {}: {} students", group.group, group.students);
    }
    println!("Total students: {}", structure.total_students);
}

pub fn print_structure_diff(diff: &StructureDiff) {
    println!("\n=== Comparison with baseline ===");
    if diff.is_unchanged() {
        println!("All groups match the baseline.");
        return;
    }

    if diff.group_delta != 0 {
        println!("Group count changed: {:+}", diff.group_delta);
    }
    if diff.student_delta != 0 {
        println!("Student count changed: {:+}", diff.student_delta);
    }
    if !diff.new_groups.is_empty() {
        println!("New groups ({}):", diff.new_groups.len());
        for group in &diff.new_groups {
            println!("  + {}", group);
        }
    }
    if !diff.missing_groups.is_empty() {
        println!("Missing groups ({}):", diff.missing_groups.len());
        for group in &diff.missing_groups {
            println!("  - {}", group);
        }
    }
    for drift in &diff.changed_groups {
        println!(
            "  {} changed: {} -> {} students",
            drift.group, drift.baseline, drift.current
        );
    }
}
