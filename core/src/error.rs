use thiserror::Error;

/// Week registry contract violations. Both are recoverable by the caller,
/// usually by re-resolving the week identifier.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("week '{0}' is already registered (use update to replace it)")]
    DuplicateWeek(String),
    #[error("week '{0}' is not registered")]
    UnknownWeek(String),
}

/// Failures of the analysis pipeline itself. Malformed rows and short rows
/// are not errors (they decode to noise/absence); the only thing the
/// pipeline cannot produce is a summary over zero students.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyzeError {
    #[error("no valid students found in any group sheet")]
    EmptyWeek,
}
