//! Wire contract shared by the todo backend and its clients.
//!
//! Both sides of the `/graphql` endpoint depend on this crate so the field
//! names, the `__kind` discriminant of the error union, and the transport
//! failure envelope cannot drift apart.
//!
//! # Example
//!
//! ```
//! use todo_schema::{MutationPayload, TodoErrorDto};
//!
//! let json = r#"{
//!     "todo": null,
//!     "errors": [
//!         {"__kind": "NameTaken", "message": "Todo name taken", "path": "name", "existingId": "1"}
//!     ]
//! }"#;
//!
//! let payload: MutationPayload = serde_json::from_str(json).expect("valid payload");
//! match &payload.errors[..] {
//!     [TodoErrorDto::NameTaken { existing_id, .. }] => assert_eq!(existing_id, "1"),
//!     other => panic!("unexpected errors: {other:?}"),
//! }
//! ```

mod envelope;
mod error;
mod operation;
mod payload;
mod todo;

pub use envelope::ErrorEnvelope;
pub use error::TodoErrorDto;
pub use operation::{
    CreateTodoVariables, DeleteTodoVariables, Operation, OperationName, OperationRequest,
    TodoVariables, UnknownOperation, UpdateTodoVariables,
};
pub use payload::{MutationPayload, OperationResponse};
pub use todo::TodoDto;

/// Path of the single operation endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Response header carrying the request correlation identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
