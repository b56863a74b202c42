//! Transport-level failures.

use thiserror::Error;
use todo_schema::ErrorEnvelope;

/// Failure that prevented an operation from producing a result.
///
/// Never carries domain validation errors; those arrive inside a
/// [`crate::MutationResult::Rejected`]. A transport error is shown as a
/// single global notice, not attributed to any form field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with an error status and envelope.
    #[error("{}", rejected_message(*.status, .envelope))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Decoded error envelope.
        envelope: ErrorEnvelope,
    },
    /// The response body did not match the wire contract.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// A mutation payload broke the record-xor-errors invariant.
    #[error("inconsistent mutation payload: {0}")]
    InconsistentPayload(String),
}

fn rejected_message(status: u16, envelope: &ErrorEnvelope) -> String {
    match &envelope.trace_id {
        Some(trace_id) => format!(
            "request failed ({status}): {} [trace {trace_id}]",
            envelope.message
        ),
        None => format!("request failed ({status}): {}", envelope.message),
    }
}

impl TransportError {
    /// Trace identifier reported by the server, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        match self {
            Self::Rejected { envelope, .. } => envelope.trace_id.as_deref(),
            _ => None,
        }
    }
}
