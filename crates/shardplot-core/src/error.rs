//! Shared error type across shardplot crates.

use thiserror::Error;

/// Stable error classes, used by the CLI diagnostics and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File system failure (missing source, unwritable output).
    Io,
    /// Input table does not match the positional schema.
    Schema,
    /// A numeric cell could not be parsed.
    InvalidNumber,
    /// An account address is not valid hexadecimal.
    InvalidAddress,
    /// Configuration rejected by parsing or validation.
    Config,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Chart rendering failed.
    Render,
}

impl ErrorCode {
    /// String representation used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Io => "IO",
            ErrorCode::Schema => "SCHEMA",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
            ErrorCode::InvalidAddress => "INVALID_ADDRESS",
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Render => "RENDER",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ShardPlotError>;

/// Unified error type used by core and report.
#[derive(Debug, Error)]
pub enum ShardPlotError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("schema mismatch at row {row}: {msg}")]
    Schema { row: usize, msg: String },
    #[error("invalid number at row {row}, column {column}: {value:?}")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("render: {0}")]
    Render(String),
}

impl ShardPlotError {
    /// Wrap an io error with the path it happened on.
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ShardPlotError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Map the error to its stable class.
    pub fn code(&self) -> ErrorCode {
        match self {
            ShardPlotError::Io { .. } => ErrorCode::Io,
            ShardPlotError::Schema { .. } => ErrorCode::Schema,
            ShardPlotError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            ShardPlotError::InvalidAddress(_) => ErrorCode::InvalidAddress,
            ShardPlotError::Config(_) => ErrorCode::Config,
            ShardPlotError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            ShardPlotError::Render(_) => ErrorCode::Render,
        }
    }
}
