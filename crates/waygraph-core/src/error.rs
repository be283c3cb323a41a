//! Error types and exit codes for waygraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node or name, malformed input file)
//!
//! "No path" and "cycle detected" are ordinary algorithm outcomes and are
//! not represented here.

mod macros;

use thiserror::Error;

/// Exit codes for the waygraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node/name, malformed record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waygraph operations
#[derive(Error, Debug)]
pub enum WaygraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    /// A graph operation referenced a node that was never added
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    /// One or more human-supplied names do not map to a known node
    #[error("unknown {kind}: {}", names.join(", "))]
    UnknownIdentifiers { kind: String, names: Vec<String> },

    #[error("invalid record in {source_name} line {line}: {reason}")]
    InvalidRecord {
        source_name: String,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WaygraphError {
    /// Create an error for a node absent from a graph
    pub fn node_not_found(node: impl std::fmt::Display) -> Self {
        WaygraphError::NodeNotFound {
            node: node.to_string(),
        }
    }

    /// Create an error listing every unknown name of the given kind
    pub fn unknown_identifiers<I, S>(kind: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WaygraphError::UnknownIdentifiers {
            kind: kind.to_string(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an error for a malformed line in an input source
    pub fn invalid_record(
        source_name: impl std::fmt::Display,
        line: usize,
        reason: impl std::fmt::Display,
    ) -> Self {
        WaygraphError::InvalidRecord {
            source_name: source_name.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaygraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        target: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaygraphError::FailedOperation {
            operation: operation.to_string(),
            target: target.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaygraphError::UnknownFormat(_)
            | WaygraphError::UsageError(_)
            | WaygraphError::InvalidValue { .. } => ExitCode::Usage,

            WaygraphError::NodeNotFound { .. }
            | WaygraphError::UnknownIdentifiers { .. }
            | WaygraphError::InvalidRecord { .. } => ExitCode::Data,

            WaygraphError::Io(_)
            | WaygraphError::Json(_)
            | WaygraphError::Toml(_)
            | WaygraphError::FailedOperation { .. }
            | WaygraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaygraphError::UnknownFormat(_) => "unknown_format",
            WaygraphError::UsageError(_) => "usage_error",
            WaygraphError::InvalidValue { .. } => "invalid_value",
            WaygraphError::NodeNotFound { .. } => "node_not_found",
            WaygraphError::UnknownIdentifiers { .. } => "unknown_identifier",
            WaygraphError::InvalidRecord { .. } => "invalid_record",
            WaygraphError::Io(_) => "io_error",
            WaygraphError::Json(_) => "json_error",
            WaygraphError::Toml(_) => "toml_error",
            WaygraphError::FailedOperation { .. } => "failed_operation",
            WaygraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let WaygraphError::UnknownIdentifiers { names, .. } = self {
            error_obj["names"] = serde_json::json!(names);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for waygraph operations
pub type Result<T> = std::result::Result<T, WaygraphError>;
