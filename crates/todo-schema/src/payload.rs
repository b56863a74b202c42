//! Success envelopes: the mutation payload and the `data` wrapper.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{OperationName, TodoDto, TodoErrorDto};

/// Result object returned by every mutation.
///
/// `errors` is empty exactly when the mutation succeeded. `todo` carries the
/// written record for create and update; delete never returns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationPayload {
    /// Written record, or `null`.
    pub todo: Option<TodoDto>,
    /// Domain validation errors in the order they were produced.
    pub errors: Vec<TodoErrorDto>,
}

impl MutationPayload {
    /// Payload for a successful write.
    #[must_use]
    pub const fn success(todo: Option<TodoDto>) -> Self {
        Self {
            todo,
            errors: Vec::new(),
        }
    }

    /// Payload for a rejected write.
    #[must_use]
    pub const fn failure(errors: Vec<TodoErrorDto>) -> Self {
        Self { todo: None, errors }
    }

    /// Whether the write was applied.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Successful response body: `{"data": {"<operationName>": <result>}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResponse {
    /// Results keyed by operation name.
    pub data: Map<String, Value>,
}

impl OperationResponse {
    /// Wrap the result of one operation.
    #[must_use]
    pub fn new(operation: OperationName, result: Value) -> Self {
        let mut data = Map::new();
        data.insert(operation.as_str().to_owned(), result);
        Self { data }
    }

    /// Remove and return the result stored for `operation`.
    pub fn take(&mut self, operation: OperationName) -> Option<Value> {
        self.data.remove(operation.as_str())
    }
}
