//! Error types for assetbook
//!
//! Library code returns `AssetbookError` (via `thiserror`); the binary wraps
//! it in `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::ValidationIssue;
use crate::domain::ports::RegisterError;
use crate::domain::value_objects::AssetId;

/// Result type alias for assetbook operations
pub type AssetbookResult<T> = Result<T, AssetbookError>;

/// Main error type for assetbook operations
#[derive(Error, Debug)]
pub enum AssetbookError {
    /// Asset input failed boundary validation
    #[error("invalid asset input: {}", join_issues(.issues))]
    InvalidInput { issues: Vec<ValidationIssue> },

    /// No asset with this id in the register
    #[error("asset '{id}' not found in the register")]
    AssetNotFound { id: AssetId },

    /// Register storage failure
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// Invalid config file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PDF rendering error
    #[error("PDF error: {message}")]
    Pdf { message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = AssetbookError::InvalidInput {
            issues: vec![
                ValidationIssue {
                    field: "name",
                    message: "Asset name is required".to_string(),
                },
                ValidationIssue {
                    field: "useful_life",
                    message: "Useful life must be positive".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid asset input: Asset name is required; Useful life must be positive"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let err = AssetbookError::AssetNotFound {
            id: "abc123".parse().unwrap(),
        };
        assert_eq!(err.to_string(), "asset 'abc123' not found in the register");
    }

    #[test]
    fn test_register_error_is_transparent() {
        let err: AssetbookError = RegisterError::AccessError {
            message: "denied".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to access register: denied");
    }
}
