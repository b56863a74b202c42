//! Driving port for todo reads.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoId};

/// Read side of the todo service.
///
/// Reading an unknown id is not an error: [`TodoQuery::find_todo`] answers
/// `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoQuery: Send + Sync {
    /// Every live record, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the store is
    /// unavailable.
    async fn list_todos(&self) -> Result<Vec<Todo>, Error>;

    /// The record with `id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the store is
    /// unavailable.
    async fn find_todo(&self, id: &TodoId) -> Result<Option<Todo>, Error>;
}
