//! Operation request envelope and per-operation variables.
//!
//! ```text
//! POST /graphql {"operationName":"createTodo","variables":{"name":"Buy milk"}}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Names of the operations served by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationName {
    /// Read every record.
    Todos,
    /// Read one record by id.
    Todo,
    /// Create a record.
    CreateTodo,
    /// Rename a record.
    UpdateTodo,
    /// Remove a record.
    DeleteTodo,
}

impl OperationName {
    /// Every operation, reads first.
    pub const ALL: [Self; 5] = [
        Self::Todos,
        Self::Todo,
        Self::CreateTodo,
        Self::UpdateTodo,
        Self::DeleteTodo,
    ];

    /// Wire name of the operation, also used as the key under `data`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todos => "todos",
            Self::Todo => "todo",
            Self::CreateTodo => "createTodo",
            Self::UpdateTodo => "updateTodo",
            Self::DeleteTodo => "deleteTodo",
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an operation name is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {name}")]
pub struct UnknownOperation {
    /// The name that was requested.
    pub name: String,
}

impl FromStr for OperationName {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| UnknownOperation { name: s.to_owned() })
    }
}

fn empty_variables() -> Value {
    Value::Object(Map::new())
}

/// Request body accepted by the operation endpoint.
///
/// The operation name stays a plain string so an unknown name is reported as
/// a protocol failure rather than a deserialisation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    /// Operation to execute.
    pub operation_name: String,
    /// Operation arguments; defaults to an empty object.
    #[serde(default = "empty_variables")]
    pub variables: Value,
}

/// Variables for `todo(id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoVariables {
    /// Identifier to look up.
    pub id: String,
}

/// Variables for `createTodo(name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodoVariables {
    /// Proposed name.
    pub name: String,
}

/// Variables for `updateTodo(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoVariables {
    /// Record to rename.
    pub id: String,
    /// Proposed name.
    pub name: String,
}

/// Variables for `deleteTodo(id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteTodoVariables {
    /// Record to remove.
    pub id: String,
}

/// Typed operation used by clients to build requests.
///
/// # Examples
/// ```
/// use todo_schema::Operation;
///
/// let request = Operation::CreateTodo { name: "Buy milk".into() }.into_request();
/// assert_eq!(request.operation_name, "createTodo");
/// assert_eq!(request.variables["name"], "Buy milk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `todos()`
    Todos,
    /// `todo(id)`
    Todo {
        /// Identifier to look up.
        id: String,
    },
    /// `createTodo(name)`
    CreateTodo {
        /// Proposed name.
        name: String,
    },
    /// `updateTodo(id, name)`
    UpdateTodo {
        /// Record to rename.
        id: String,
        /// Proposed name.
        name: String,
    },
    /// `deleteTodo(id)`
    DeleteTodo {
        /// Record to remove.
        id: String,
    },
}

impl Operation {
    /// Name of the operation on the wire.
    #[must_use]
    pub const fn name(&self) -> OperationName {
        match self {
            Self::Todos => OperationName::Todos,
            Self::Todo { .. } => OperationName::Todo,
            Self::CreateTodo { .. } => OperationName::CreateTodo,
            Self::UpdateTodo { .. } => OperationName::UpdateTodo,
            Self::DeleteTodo { .. } => OperationName::DeleteTodo,
        }
    }

    /// Convert into the request envelope sent to the endpoint.
    #[must_use]
    pub fn into_request(self) -> OperationRequest {
        let operation_name = self.name().as_str().to_owned();
        let variables = match self {
            Self::Todos => empty_variables(),
            Self::Todo { id } | Self::DeleteTodo { id } => json!({ "id": id }),
            Self::CreateTodo { name } => json!({ "name": name }),
            Self::UpdateTodo { id, name } => json!({ "id": id, "name": name }),
        };
        OperationRequest {
            operation_name,
            variables,
        }
    }
}
