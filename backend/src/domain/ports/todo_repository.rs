//! Driven port for the record store.
//!
//! The store is the single source of truth for todos. It is accessed under
//! the service's lock, so the trait is synchronous and takes `&mut self` for
//! writes; implementations need no interior locking of their own.

use crate::domain::{Todo, TodoId};

/// Keyed collection of todos.
///
/// Implementations own every record. Reads hand out clones so no caller keeps
/// a reference into the store across operations.
#[cfg_attr(test, mockall::automock)]
pub trait TodoRepository: Send {
    /// Every live record, in presentation order.
    fn list(&self) -> Vec<Todo>;

    /// The record with `id`, if it exists.
    fn find(&self, id: &TodoId) -> Option<Todo>;

    /// The record whose name is exactly `name`, if any.
    fn find_by_name(&self, name: &str) -> Option<Todo>;

    /// Store a new record under a freshly assigned id.
    fn insert(&mut self, name: String) -> Todo;

    /// Replace the name of `id`, returning the updated record.
    ///
    /// Returns `None` when no record has `id`.
    fn rename(&mut self, id: &TodoId, name: String) -> Option<Todo>;

    /// Remove `id`, returning the removed record.
    ///
    /// Returns `None` when no record has `id`.
    fn remove(&mut self, id: &TodoId) -> Option<Todo>;
}
