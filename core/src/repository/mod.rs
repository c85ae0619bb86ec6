pub mod file;
pub mod traits;

// Re-export
pub use file::FileWeekStore;
pub use traits::WeekStore;
