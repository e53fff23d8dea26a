//! Core error types for focos-core.
//!
//! Three recoverable families: validation (caller data fails a
//! precondition, state unchanged), not-found (stale id, operation is a
//! no-op) and storage (sqlite/serialization). Persistence failures on
//! mutation paths are logged warnings, not errors; `StorageError` is only
//! returned from explicit open/load calls.

use std::path::PathBuf;
use thiserror::Error;

use crate::block::Day;

/// Umbrella error type for focos-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Caller-supplied data failed a precondition
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced id no longer exists
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Local store access failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Precondition failures. The rejected mutation leaves state unchanged.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more required fields were blank
    #[error("missing required field(s): {0}")]
    MissingFields(String),

    /// Template name was blank
    #[error("template name must not be blank")]
    BlankTemplateName,

    /// Tried to snapshot a day with no blocks
    #[error("no blocks on {0} to snapshot")]
    EmptyDay(Day),

    /// Target day is populated and overwrite was not requested
    #[error("{0} already has blocks; re-run with overwrite to replace them")]
    DayNotEmpty(Day),
}

/// Stale-reference failures. The operation is a no-op; callers are
/// expected to refresh their view.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("block not found: {0}")]
    Block(String),

    #[error("template not found: {0}")]
    Template(String),
}

/// Local key-value store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// JSON encoding/decoding failed
    #[error("encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// TOML config encoding failed
    #[error("config encoding failed: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    /// TOML config parsing failed
    #[error("config parsing failed: {0}")]
    ConfigDecode(#[from] toml::de::Error),

    /// Filesystem access failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
