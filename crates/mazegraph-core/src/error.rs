//! Error types and exit codes for mazegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad vertex, bad weight, unreadable document, no path)

mod macros;

use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph contents or input documents (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or searching a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph store contract violations (exit code 3)
    #[error("vertex already in graph: {vertex}")]
    DuplicateVertex { vertex: String },

    #[error("vertex not in graph: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid edge weight: {weight} (must be a positive integer)")]
    InvalidWeight { weight: i64 },

    #[error("no path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    #[error("invalid document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex that is already present
    pub fn duplicate_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a vertex that was never added
    pub fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for an end vertex Dijkstra could not reach
    pub fn path_not_found<V: Debug>(from: &V, to: &V) -> Self {
        GraphError::PathNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a malformed input document
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::DuplicateVertex { .. }
            | GraphError::UnknownVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::PathNotFound { .. }
            | GraphError::InvalidDocument { .. }
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::UnknownVertex { .. } => "unknown_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::PathNotFound { .. } => "path_not_found",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mazegraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphError::duplicate_vertex(&"A").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::InvalidWeight { weight: 0 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_vertex_rendered_with_debug() {
        let err = GraphError::unknown_vertex(&"B");
        assert_eq!(err.to_string(), "vertex not in graph: \"B\"");

        let err = GraphError::path_not_found(&1, &2);
        assert_eq!(err.to_string(), "no path from 1 to 2");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::InvalidWeight { weight: -4 }.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_weight");
        assert_eq!(
            json["error"]["message"],
            "invalid edge weight: -4 (must be a positive integer)"
        );
    }
}
