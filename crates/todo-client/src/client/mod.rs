//! Cache-aware client over a [`TodoTransport`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use todo_schema::{MutationPayload, Operation, TodoDto, TodoErrorDto};
use tracing::{debug, info};

use crate::{Lookup, MutationResult, QueryCache, QueryKey, TodoTransport, TransportError};

/// Todo client with a read cache reconciled after successful writes.
///
/// Reads answer from the cache when they can. A write that is applied
/// invalidates the `todos` list once and evicts `todo(id)` for the written
/// id; a rejected or failed write leaves the cache untouched.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
///
/// use todo_client::{HttpTransport, MutationResult, TodoClient, graphql_endpoint};
/// use url::Url;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let base = Url::parse("http://127.0.0.1:5050")?;
/// let transport = HttpTransport::new(graphql_endpoint(&base)?, Duration::from_secs(5))?;
/// let mut client = TodoClient::new(transport);
/// if let MutationResult::Applied(todo) = client.create("Buy milk").await? {
///     println!("created {}", todo.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TodoClient<T> {
    transport: T,
    cache: QueryCache,
}

impl<T> TodoClient<T>
where
    T: TodoTransport,
{
    /// Client with an empty cache.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
        }
    }

    /// Read-only view of the cache.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    async fn run<R: DeserializeOwned>(&self, operation: Operation) -> Result<R, TransportError> {
        let name = operation.name();
        let value: Value = self.transport.execute(operation).await?;
        serde_json::from_value(value)
            .map_err(|err| TransportError::Malformed(format!("invalid {name} result: {err}")))
    }

    /// Every record, from the cache when the list is still valid.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the list has to be fetched and the
    /// request fails.
    pub async fn todos(&mut self) -> Result<Vec<TodoDto>, TransportError> {
        if let Some(todos) = self.cache.todos() {
            return Ok(todos.to_vec());
        }
        let todos: Vec<TodoDto> = self.run(Operation::Todos).await?;
        self.cache.store_todos(todos.clone());
        Ok(todos)
    }

    /// The record with `id`, or [`Lookup::NotFound`].
    ///
    /// Absent answers are cached too.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the record has to be fetched and
    /// the request fails.
    pub async fn todo(&mut self, id: &str) -> Result<Lookup<TodoDto>, TransportError> {
        let todo = match self.cache.todo(id) {
            Some(cached) => cached.cloned(),
            None => {
                let fetched: Option<TodoDto> = self
                    .run(Operation::Todo { id: id.to_owned() })
                    .await?;
                self.cache.store_todo(id, fetched.clone());
                fetched
            }
        };
        Ok(todo.map_or_else(|| Lookup::NotFound(id.to_owned()), Lookup::Found))
    }

    /// Submit `createTodo(name)`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the write produced no result.
    #[must_use = "a failed write is only visible through the returned result"]
    pub async fn create(
        &mut self,
        name: &str,
    ) -> Result<MutationResult<TodoDto>, TransportError> {
        let payload: MutationPayload = self
            .run(Operation::CreateTodo {
                name: name.to_owned(),
            })
            .await?;
        let result = MutationResult::from_record_payload(payload)?;
        let id = match &result {
            MutationResult::Applied(todo) => Some(todo.id.clone()),
            MutationResult::Rejected(_) => None,
        };
        self.reconcile("createTodo", id.as_deref(), &result);
        Ok(result)
    }

    /// Submit `updateTodo(id, name)`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the write produced no result.
    #[must_use = "a failed write is only visible through the returned result"]
    pub async fn update(
        &mut self,
        id: &str,
        name: &str,
    ) -> Result<MutationResult<TodoDto>, TransportError> {
        let payload: MutationPayload = self
            .run(Operation::UpdateTodo {
                id: id.to_owned(),
                name: name.to_owned(),
            })
            .await?;
        let result = MutationResult::from_record_payload(payload)?;
        self.reconcile("updateTodo", Some(id), &result);
        Ok(result)
    }

    /// Submit `deleteTodo(id)`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the write produced no result.
    #[must_use = "a failed write is only visible through the returned result"]
    pub async fn delete(&mut self, id: &str) -> Result<MutationResult<()>, TransportError> {
        let payload: MutationPayload = self
            .run(Operation::DeleteTodo { id: id.to_owned() })
            .await?;
        let result = MutationResult::from_unit_payload(payload)?;
        self.reconcile("deleteTodo", Some(id), &result);
        Ok(result)
    }

    fn reconcile<R>(
        &mut self,
        operation: &'static str,
        id: Option<&str>,
        result: &MutationResult<R>,
    ) {
        if !result.is_applied() {
            let kinds: Vec<&str> = result.errors().iter().map(TodoErrorDto::kind).collect();
            debug!(operation, ?id, ?kinds, "write rejected; cache kept");
            return;
        }
        self.cache.invalidate(&QueryKey::Todos);
        if let Some(written) = id {
            self.cache.invalidate(&QueryKey::Todo(written.to_owned()));
        }
        info!(operation, ?id, "write applied; todo queries invalidated");
    }
}
