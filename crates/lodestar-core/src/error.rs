//! Error types and exit codes for lodestar
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (e.g. requested path does not exist)
//! - 2: Usage error (bad flags/args, out-of-range vertex index)
//! - 3: Data error (invalid graph definition)

use thiserror::Error;

/// Exit codes for the lodestar CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph definition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during lodestar operations
#[derive(Error, Debug)]
pub enum LodestarError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Expected, non-fatal outcomes (exit code 1)
    #[error("vertex {target} is unreachable from the source")]
    Unreachable { target: usize },
}

impl LodestarError {
    /// Create an error for an invalid graph definition
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        LodestarError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for an out-of-range vertex index
    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        LodestarError::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            LodestarError::UnknownFormat(_)
            | LodestarError::UsageError(_)
            | LodestarError::InvalidVertex { .. } => ExitCode::Usage,

            // Data errors
            LodestarError::InvalidGraph { .. } => ExitCode::Data,

            // Generic failures
            LodestarError::Json(_) | LodestarError::Unreachable { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LodestarError::UnknownFormat(_) => "unknown_format",
            LodestarError::UsageError(_) => "usage_error",
            LodestarError::InvalidVertex { .. } => "invalid_vertex",
            LodestarError::InvalidGraph { .. } => "invalid_graph",
            LodestarError::Json(_) => "json_error",
            LodestarError::Unreachable { .. } => "unreachable",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for lodestar operations
pub type Result<T> = std::result::Result<T, LodestarError>;
