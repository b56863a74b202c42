//! OpenAPI schema definitions for domain and wire types.
//!
//! Domain types and the shared `todo_schema` wire types remain
//! framework-agnostic by not deriving `ToSchema`. This module provides the
//! schema definitions required for OpenAPI documentation using utoipa's
//! external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in transport error envelopes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed, names an unknown operation, or carries
    /// variables of the wrong shape.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No endpoint matches the requested path.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Transport error envelope with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "unknown operation: listTodos")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`todo_schema::OperationRequest`].
#[derive(ToSchema)]
#[schema(as = todo_schema::OperationRequest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OperationRequestSchema {
    /// One of `todos`, `todo`, `createTodo`, `updateTodo`, `deleteTodo`.
    #[schema(example = "createTodo")]
    operation_name: String,
    /// Operation arguments; defaults to `{}`.
    #[schema(example = json!({ "name": "Buy milk" }))]
    variables: Option<serde_json::Value>,
}

/// OpenAPI schema for [`todo_schema::OperationResponse`].
#[derive(ToSchema)]
#[schema(as = todo_schema::OperationResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OperationResponseSchema {
    /// Result keyed by operation name: a todo list, a todo or `null`, or a
    /// mutation payload.
    #[schema(example = json!({ "createTodo": { "todo": { "id": "1", "name": "Buy milk" }, "errors": [] } }))]
    data: serde_json::Value,
}

/// OpenAPI schema for [`todo_schema::TodoDto`].
#[derive(ToSchema)]
#[schema(as = todo_schema::TodoDto)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoSchema {
    /// Store-assigned identifier.
    #[schema(example = "1")]
    id: String,
    /// Unique, non-empty name.
    #[schema(example = "Buy milk")]
    name: String,
}

/// Discriminant of [`TodoErrorSchema`].
#[derive(ToSchema)]
pub enum TodoErrorKindSchema {
    /// Generic field-level failure.
    UserError,
    /// The name belongs to another record.
    NameTaken,
}

/// OpenAPI schema for [`todo_schema::TodoErrorDto`].
#[derive(ToSchema)]
#[schema(as = todo_schema::TodoErrorDto)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoErrorSchema {
    /// Variant tag clients narrow on.
    #[schema(rename = "__kind", example = "NameTaken")]
    kind: TodoErrorKindSchema,
    /// Human-readable message.
    #[schema(example = "Todo name taken")]
    message: String,
    /// Input field the error belongs to.
    #[schema(example = "name")]
    path: String,
    /// Record already using the name; present on `NameTaken` only.
    #[schema(rename = "existingId", example = "1")]
    existing_id: Option<String>,
}

/// OpenAPI schema for [`todo_schema::MutationPayload`].
#[derive(ToSchema)]
#[schema(as = todo_schema::MutationPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MutationPayloadSchema {
    /// Written record; `null` on failure and for deletes.
    todo: Option<TodoSchema>,
    /// Validation errors; empty exactly when the write succeeded.
    errors: Vec<TodoErrorSchema>,
}
