//! Process-local todo store.
//!
//! Records are keyed by the sequence number encoded in their identifier, so
//! iteration order is creation order. Identifiers come from a monotonic
//! counter and are never handed out twice, even after a delete.

use std::collections::BTreeMap;

use crate::domain::ports::TodoRepository;
use crate::domain::{Todo, TodoId};

/// In-memory [`TodoRepository`].
///
/// # Examples
/// ```
/// use backend::domain::ports::TodoRepository;
/// use backend::outbound::memory::InMemoryTodoStore;
///
/// let mut store = InMemoryTodoStore::new();
/// let todo = store.insert("Buy milk".to_owned());
/// assert_eq!(todo.id().as_str(), "1");
/// assert_eq!(store.find(todo.id()), Some(todo));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    todos: BTreeMap<u64, Todo>,
    last_sequence: u64,
}

impl InMemoryTodoStore {
    /// Create an empty store whose first identifier will be `"1"`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoStore {
    fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    fn find(&self, id: &TodoId) -> Option<Todo> {
        id.sequence()
            .and_then(|sequence| self.todos.get(&sequence))
            .cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Todo> {
        self.todos.values().find(|todo| todo.name() == name).cloned()
    }

    fn insert(&mut self, name: String) -> Todo {
        self.last_sequence += 1;
        let todo = Todo::new(TodoId::from_sequence(self.last_sequence), name);
        self.todos.insert(self.last_sequence, todo.clone());
        todo
    }

    fn rename(&mut self, id: &TodoId, name: String) -> Option<Todo> {
        let todo = self.todos.get_mut(&id.sequence()?)?;
        todo.rename(name);
        Some(todo.clone())
    }

    fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        self.todos.remove(&id.sequence()?)
    }
}
