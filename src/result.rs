//! Tool response helpers
//!
//! Every tool returns a single text content block: pretty-printed JSON on
//! success, `"Error: <message>"` with the error flag set on failure. Failures
//! never escape as transport-level faults.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Serialize `data` into a successful pretty-printed JSON response.
///
/// A serialization failure is converted into an error response rather than
/// propagated, so handlers stay infallible at the transport boundary.
pub fn json_response<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => error_text(e),
    }
}

/// Build an error-flagged `"Error: <message>"` response.
pub fn error_text(message: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}
