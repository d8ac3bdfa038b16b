/// Simplified error system - every failure here degrades silently at the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    DomError(String),
    HistoryError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DomError(msg) => write!(f, "DOM Error: {}", msg),
            AppError::HistoryError(msg) => write!(f, "History Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type DomResult<T> = Result<T, AppError>;
pub type ValidationResult<T> = Result<T, AppError>;
