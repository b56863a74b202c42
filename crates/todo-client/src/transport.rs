//! Transport port and its reqwest-backed adapter.
//!
//! The adapter owns transport details only: request serialisation, timeout,
//! HTTP error mapping, and unwrapping the `data` envelope. Interpreting the
//! result is left to [`crate::TodoClient`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use todo_schema::{ErrorEnvelope, GRAPHQL_PATH, Operation, OperationName, OperationResponse};
use tracing::{debug, warn};
use url::Url;

use crate::TransportError;

/// Executes one operation and yields its raw result value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoTransport: Send + Sync {
    /// Send `operation` and return the value stored under its name in the
    /// response `data`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no result could be obtained.
    async fn execute(&self, operation: Operation) -> Result<Value, TransportError>;
}

/// Operation endpoint below `base_url`.
///
/// # Errors
///
/// Returns an error when `base_url` cannot be a base for a path.
///
/// # Examples
/// ```
/// use todo_client::graphql_endpoint;
/// use url::Url;
///
/// let base = Url::parse("http://127.0.0.1:5050").expect("valid URL");
/// let endpoint = graphql_endpoint(&base).expect("joins");
/// assert_eq!(endpoint.as_str(), "http://127.0.0.1:5050/graphql");
/// ```
pub fn graphql_endpoint(base_url: &Url) -> Result<Url, url::ParseError> {
    base_url.join(GRAPHQL_PATH)
}

/// [`TodoTransport`] that POSTs operations to one HTTP endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TodoTransport for HttpTransport {
    async fn execute(&self, operation: Operation) -> Result<Value, TransportError> {
        let name = operation.name();
        debug!(operation = %name, endpoint = %self.endpoint, "sending operation");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&operation.into_request())
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(operation = %name, %error, "operation failed");
            return Err(error);
        }
        extract_result(name, body.as_ref())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TransportError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => TransportError::Rejected {
            status: status.as_u16(),
            envelope,
        },
        Err(err) => TransportError::Malformed(format!(
            "status {status} without an error envelope: {err}"
        )),
    }
}

fn extract_result(operation: OperationName, body: &[u8]) -> Result<Value, TransportError> {
    let mut response: OperationResponse = serde_json::from_slice(body)
        .map_err(|err| TransportError::Malformed(format!("invalid response JSON: {err}")))?;
    response
        .take(operation)
        .ok_or_else(|| TransportError::Malformed(format!("response has no data for {operation}")))
}
