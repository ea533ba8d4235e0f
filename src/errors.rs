//! Error types for the coursework apps
//!
//! Every library operation returns [`Result`]; the binary wraps it in
//! `anyhow` at the top level.

use thiserror::Error;

/// Main error type shared by the console helper and every app
#[derive(Error, Debug)]
pub enum AppError {
    /// Input stream reached EOF (Ctrl-D or end of piped input)
    #[error("Input closed")]
    InputClosed,

    /// Ctrl-C at a prompt
    #[error("Interrupted")]
    Interrupted,

    /// Conversion requested between a unit and itself
    #[error("The To unit cannot be the same as the From unit ({unit})")]
    SameUnit { unit: String },

    /// Unit name that cannot be parsed
    #[error("Unknown distance unit: {0}")]
    UnknownUnit(String),

    /// Measurement that makes a formula meaningless (e.g. zero height)
    #[error("Invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// Mark outside 0-100
    #[error("Mark {mark} is outside the range 0-100")]
    MarkOutOfRange { mark: u32 },

    /// Mark list whose length differs from the class size
    #[error("Expected {expected} marks, got {got}")]
    MarkCount { expected: usize, got: usize },

    /// Student position past the end of the class list
    #[error("No student at position {index} (class of {students})")]
    StudentIndex { index: usize, students: usize },

    /// Statistics requested with no students
    #[error("No students to calculate statistics for")]
    NoStudents,

    /// Post id missing from the news feed
    #[error("Post {id} does not exist")]
    PostNotFound { id: u32 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Line editor errors other than EOF/interrupt
    #[error("Readline error: {0}")]
    Readline(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for coursework operations
pub type Result<T> = std::result::Result<T, AppError>;

impl From<rustyline::error::ReadlineError> for AppError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        use rustyline::error::ReadlineError;

        match err {
            ReadlineError::Eof => AppError::InputClosed,
            ReadlineError::Interrupted => AppError::Interrupted,
            ReadlineError::Io(e) => AppError::IoError(e),
            other => AppError::Readline(other.to_string()),
        }
    }
}

impl AppError {
    /// True when the user ended input, which callers treat as a clean exit
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::InputClosed | AppError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::MarkOutOfRange { mark: 101 };
        assert!(err.to_string().contains("101"));
        assert!(err.to_string().contains("0-100"));
    }

    #[test]
    fn test_post_not_found_display() {
        let err = AppError::PostNotFound { id: 7 };
        assert_eq!(err.to_string(), "Post 7 does not exist");
    }

    #[test]
    fn test_readline_conversion() {
        use rustyline::error::ReadlineError;

        assert!(matches!(AppError::from(ReadlineError::Eof), AppError::InputClosed));
        assert!(matches!(
            AppError::from(ReadlineError::Interrupted),
            AppError::Interrupted
        ));
    }

    #[test]
    fn test_end_of_input() {
        assert!(AppError::InputClosed.is_end_of_input());
        assert!(AppError::Interrupted.is_end_of_input());
        assert!(!AppError::NoStudents.is_end_of_input());
    }
}
