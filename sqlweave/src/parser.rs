//! Request parsing
//!
//! Parses JSON statement descriptions with a size limit.

use crate::error::{BuildError, Result};
use crate::types::Statement;

/// Default maximum size of a JSON request in bytes (1MB)
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Parse a statement from JSON
///
/// The input must be an object with exactly one of `select`, `insert`,
/// `update`, `delete` or `raw` as its key.
pub fn parse_statement(json_str: &str, max_bytes: usize) -> Result<Statement> {
    if json_str.len() > max_bytes {
        return Err(BuildError::RequestTooLarge { limit: max_bytes });
    }

    serde_json::from_str(json_str).map_err(|e| BuildError::InvalidRequest(e.to_string()))
}
