//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{TodoCommand, TodoQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write side: create, update, delete.
    pub command: Arc<dyn TodoCommand>,
    /// Read side: list and lookup.
    pub query: Arc<dyn TodoQuery>,
}

impl HttpState {
    /// Construct state from the two ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::TodoService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryTodoStore;
    ///
    /// let service = Arc::new(TodoService::new(InMemoryTodoStore::new()));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.query.clone();
    /// ```
    pub fn new(command: Arc<dyn TodoCommand>, query: Arc<dyn TodoQuery>) -> Self {
        Self { command, query }
    }

    /// Construct state where a single service backs both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: TodoCommand + TodoQuery + 'static,
    {
        Self::new(service.clone(), service)
    }
}
