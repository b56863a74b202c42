//! Transport failure envelope.
//!
//! Returned with a non-success HTTP status when a request cannot be executed
//! at all (malformed body, unknown operation, server fault). It never carries
//! domain validation errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned with a 4xx or 5xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Stable machine-readable code, e.g. `invalid_request`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Correlation identifier of the failed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured context such as the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
