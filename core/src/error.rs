//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document text could not be decoded into a tree.
    #[from(ignore)]
    #[display("{_0}")]
    Parse(String),

    /// The cleaned tree could not be encoded back to text.
    #[from(ignore)]
    #[display("Unable to serialize spec file with error: {_0}")]
    Serialize(String),

    /// The document has no `paths` mapping to walk.
    #[from(ignore)]
    #[display("Document has no `paths` mapping")]
    MissingPaths,
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::NotFound, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_parse_message_is_verbatim() {
        let app_err = AppError::Parse("Unable to parse spec file.".into());
        assert_eq!(format!("{}", app_err), "Unable to parse spec file.");
    }

    #[test]
    fn test_missing_paths_display() {
        assert_eq!(
            AppError::MissingPaths.to_string(),
            "Document has no `paths` mapping"
        );
    }
}
