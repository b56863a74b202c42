//! Driving port for todo writes.
//!
//! Every write is result-typed: domain validation failures come back inside
//! the [`MutationOutcome`], and the outer `Err` is reserved for failures that
//! prevented the write from being attempted.

use async_trait::async_trait;

use crate::domain::{Error, MutationOutcome, Todo, TodoId};

/// Request to create a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoRequest {
    /// Proposed name, compared exactly.
    pub name: String,
}

/// Request to rename a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    /// Record to rename.
    pub id: TodoId,
    /// Proposed name, compared exactly.
    pub name: String,
}

/// Request to remove a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoRequest {
    /// Record to remove.
    pub id: TodoId,
}

/// Write side of the todo service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoCommand: Send + Sync {
    /// Validate and create a record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the store is
    /// unavailable. Validation failures are reported in the outcome.
    async fn create_todo(&self, request: CreateTodoRequest)
    -> Result<MutationOutcome<Todo>, Error>;

    /// Validate and rename a record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the store is
    /// unavailable. Validation failures are reported in the outcome.
    async fn update_todo(&self, request: UpdateTodoRequest)
    -> Result<MutationOutcome<Todo>, Error>;

    /// Validate and remove a record. A successful delete carries no record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the store is
    /// unavailable. Validation failures are reported in the outcome.
    async fn delete_todo(&self, request: DeleteTodoRequest)
    -> Result<MutationOutcome<()>, Error>;
}
