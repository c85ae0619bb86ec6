pub mod layout;
pub mod sheet;
pub mod student;
pub mod summary;
pub mod week;
