use serde::{Deserialize, Serialize};

/// One cell of a loaded worksheet. The source sheets are hand-maintained,
/// so any column can hold any of these at any row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Numeric view of the cell: numbers as-is, booleans as 0/1,
    /// text only when it parses as a number. Empty cells have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form for identity columns (student number / id), with a
    /// fallback for cells that hold nothing. Whole numbers lose the ".0"
    /// that spreadsheet floats carry.
    pub fn label_or(&self, fallback: &str) -> String {
        match self {
            CellValue::Empty => fallback.to_string(),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    fallback.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A normalized in-memory view of one raw worksheet: rows of loosely typed
/// cells, identified by the sheet (group) name. Immutable once loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The row at `idx`, or an empty slice past the end of the table.
    pub fn row(&self, idx: usize) -> &[CellValue] {
        self.rows.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The cell at (row, col); anything outside the table reads as Empty,
    /// which is how short rows stay harmless downstream.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_coercions() {
        assert_eq!(CellValue::Number(1.0).as_number(), Some(1.0));
        assert_eq!(CellValue::Bool(true).as_number(), Some(1.0));
        assert_eq!(CellValue::Bool(false).as_number(), Some(0.0));
        assert_eq!(CellValue::Text(" 1 ".to_string()).as_number(), Some(1.0));
        assert_eq!(CellValue::Text("x".to_string()).as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn test_out_of_range_cells_are_empty() {
        let table = SheetTable::new("G1", vec![vec![CellValue::Number(7.0)]]);
        assert_eq!(table.cell(0, 0), &CellValue::Number(7.0));
        assert_eq!(table.cell(0, 5), &CellValue::Empty);
        assert_eq!(table.cell(9, 0), &CellValue::Empty);
        assert!(table.row(9).is_empty());
    }

    #[test]
    fn test_label_strips_float_artifacts() {
        assert_eq!(CellValue::Number(12.0).label_or("N/A"), "12");
        assert_eq!(CellValue::Number(12.5).label_or("N/A"), "12.5");
        assert_eq!(CellValue::Empty.label_or("N/A"), "N/A");
        assert_eq!(CellValue::Text("  ".to_string()).label_or("N/A"), "N/A");
    }
}
