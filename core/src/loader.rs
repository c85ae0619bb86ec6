//! Reading a weekly workbook into plain [`SheetTable`]s. Everything past
//! this point works on already-materialized tables; nothing downstream
//! knows spreadsheets exist.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::model::sheet::{CellValue, SheetTable};

/// The untouched default first sheet the source workbooks carry. Excluded
/// by name, by convention; it never holds attendance data.
pub const PLACEHOLDER_SHEET: &str = "الورقة1";

/// Load every group sheet of a workbook, skipping the placeholder sheet.
/// An unreadable workbook is fatal for this artifact only; the caller's
/// registry is untouched.
pub fn load_workbook(path: &Path) -> Result<Vec<SheetTable>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let mut tables = Vec::new();

    for name in &sheet_names {
        if name == PLACEHOLDER_SHEET {
            continue;
        }
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet '{}'", name))?;
        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();
        tables.push(SheetTable::new(name.clone(), rows));
    }

    Ok(tables)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // Attendance marks sometimes come back date-formatted; the serial
        // number is still the value that was typed.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
