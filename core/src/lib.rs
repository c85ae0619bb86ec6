pub mod error;
pub mod loader;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use error::{AnalyzeError, RegistryError};
pub use loader::{load_workbook, PLACEHOLDER_SHEET};
pub use model::sheet::{CellValue, SheetTable};
pub use model::student::{SessionGrid, StudentRecord, UNKNOWN};
pub use model::summary::{GroupSummary, WeekSummary};
pub use model::week::WeekEntry;
pub use repository::{FileWeekStore, WeekStore};
pub use service::registry::WeekRegistry;
pub use usecase::analyze::{analyze_week, WeekAnalysis};
pub use usecase::check::{check_structure, diff_structures, SheetStructure, StructureDiff};
