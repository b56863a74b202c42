//! In-memory adapters.

mod todo_store;

pub use todo_store::InMemoryTodoStore;
