//! Todo service: validation plus store mutation as one step.
//!
//! The service owns the store behind a mutex and holds the lock for the whole
//! validate-then-apply sequence, so a uniqueness check can never be raced by
//! a concurrent write. It implements both driving ports.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, error, info};

use super::ports::{
    CreateTodoRequest, DeleteTodoRequest, TodoCommand, TodoQuery, TodoRepository,
    UpdateTodoRequest,
};
use super::validation::{validate_create, validate_delete, validate_update};
use super::{Error, MutationOutcome, Todo, TodoId, ValidationError};

/// Result-typed todo service over a store `R`.
///
/// The store is injected at construction and lives as long as the service;
/// nothing else holds it.
///
/// # Examples
/// ```
/// use backend::domain::TodoService;
/// use backend::outbound::memory::InMemoryTodoStore;
///
/// let service = TodoService::new(InMemoryTodoStore::new());
/// let outcome = service.create("Buy milk").expect("store available");
/// assert_eq!(outcome.record().map(|todo| todo.id().as_str()), Some("1"));
/// ```
pub struct TodoService<R> {
    store: Mutex<R>,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Wrap `store`, which becomes owned by the service.
    pub fn new(store: R) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, R>, Error> {
        self.store.lock().map_err(|_| {
            error!("todo store lock poisoned");
            Error::internal("todo store unavailable")
        })
    }

    /// Every live record.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<Todo>, Error> {
        Ok(self.lock()?.list())
    }

    /// The record with `id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store lock is poisoned.
    pub fn find(&self, id: &TodoId) -> Result<Option<Todo>, Error> {
        Ok(self.lock()?.find(id))
    }

    /// Create a record named `name`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store lock is poisoned.
    pub fn create(&self, name: impl Into<String>) -> Result<MutationOutcome<Todo>, Error> {
        let name = name.into();
        let mut store = self.lock()?;
        let outcome: MutationOutcome<Todo> = validate_create(&*store, &name)
            .map(|()| store.insert(name))
            .into();
        log_outcome("createTodo", &outcome, |todo| todo.id());
        Ok(outcome)
    }

    /// Rename record `id` to `name`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store lock is poisoned.
    pub fn update(
        &self,
        id: &TodoId,
        name: impl Into<String>,
    ) -> Result<MutationOutcome<Todo>, Error> {
        let name = name.into();
        let mut store = self.lock()?;
        let outcome: MutationOutcome<Todo> = validate_update(&*store, id, &name)
            .and_then(|()| store.rename(id, name).ok_or_else(ValidationError::todo_not_found))
            .into();
        log_outcome("updateTodo", &outcome, |todo| todo.id());
        Ok(outcome)
    }

    /// Remove record `id`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the store lock is poisoned.
    pub fn delete(&self, id: &TodoId) -> Result<MutationOutcome<()>, Error> {
        let mut store = self.lock()?;
        let outcome: MutationOutcome<()> = validate_delete(&*store, id)
            .and_then(|()| {
                store
                    .remove(id)
                    .map(|_| ())
                    .ok_or_else(ValidationError::todo_not_found)
            })
            .into();
        log_outcome("deleteTodo", &outcome, |()| id);
        Ok(outcome)
    }
}

fn log_outcome<'a, T>(
    operation: &'static str,
    outcome: &'a MutationOutcome<T>,
    id_of: impl FnOnce(&'a T) -> &'a TodoId,
) {
    match (outcome.record(), outcome.errors().first()) {
        (Some(record), _) => info!(operation, id = %id_of(record), "todo mutation applied"),
        (None, Some(rejection)) => debug!(
            operation,
            path = %rejection.path(),
            reason = rejection.message(),
            "todo mutation rejected"
        ),
        (None, None) => {}
    }
}

#[async_trait]
impl<R> TodoCommand for TodoService<R>
where
    R: TodoRepository + 'static,
{
    async fn create_todo(
        &self,
        request: CreateTodoRequest,
    ) -> Result<MutationOutcome<Todo>, Error> {
        self.create(request.name)
    }

    async fn update_todo(
        &self,
        request: UpdateTodoRequest,
    ) -> Result<MutationOutcome<Todo>, Error> {
        let UpdateTodoRequest { id, name } = request;
        self.update(&id, name)
    }

    async fn delete_todo(&self, request: DeleteTodoRequest) -> Result<MutationOutcome<()>, Error> {
        self.delete(&request.id)
    }
}

#[async_trait]
impl<R> TodoQuery for TodoService<R>
where
    R: TodoRepository + 'static,
{
    async fn list_todos(&self) -> Result<Vec<Todo>, Error> {
        self.list()
    }

    async fn find_todo(&self, id: &TodoId) -> Result<Option<Todo>, Error> {
        self.find(id)
    }
}
