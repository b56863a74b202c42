//! Query cache with explicit invalidation.
//!
//! Answers are stored per query key. A single-record answer may be `None`
//! (the id does not exist); that absence is cached like any other answer.
//! Writes never patch cached answers: they evict them and the next read
//! refetches.

use std::collections::HashMap;

use todo_schema::TodoDto;

/// Identity of a cached read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `todos()`
    Todos,
    /// `todo(id)`
    Todo(String),
}

/// Result of reading one record by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The record exists.
    Found(T),
    /// No record has the requested id.
    NotFound(String),
}

/// Cached read answers plus a per-key count of invalidations.
#[derive(Debug, Default)]
pub struct QueryCache {
    todos: Option<Vec<TodoDto>>,
    todo: HashMap<String, Option<TodoDto>>,
    invalidations: HashMap<QueryKey, usize>,
}

impl QueryCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached answer of `todos()`.
    #[must_use]
    pub fn todos(&self) -> Option<&[TodoDto]> {
        self.todos.as_deref()
    }

    /// Cached answer of `todo(id)`; the inner `None` is a cached absence.
    #[must_use]
    pub fn todo(&self, id: &str) -> Option<Option<&TodoDto>> {
        self.todo.get(id).map(Option::as_ref)
    }

    /// Store the answer of `todos()`.
    pub fn store_todos(&mut self, todos: Vec<TodoDto>) {
        self.todos = Some(todos);
    }

    /// Store the answer of `todo(id)`.
    pub fn store_todo(&mut self, id: impl Into<String>, todo: Option<TodoDto>) {
        self.todo.insert(id.into(), todo);
    }

    /// Whether `key` currently has a cached answer.
    #[must_use]
    pub fn contains(&self, key: &QueryKey) -> bool {
        match key {
            QueryKey::Todos => self.todos.is_some(),
            QueryKey::Todo(id) => self.todo.contains_key(id),
        }
    }

    /// Drop the answer for `key` so the next read refetches it.
    ///
    /// Counted even when nothing was cached.
    pub fn invalidate(&mut self, key: &QueryKey) {
        match key {
            QueryKey::Todos => self.todos = None,
            QueryKey::Todo(id) => {
                self.todo.remove(id);
            }
        }
        *self.invalidations.entry(key.clone()).or_default() += 1;
    }

    /// How many times `key` has been invalidated.
    #[must_use]
    pub fn invalidations(&self, key: &QueryKey) -> usize {
        self.invalidations.get(key).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cache() -> QueryCache {
        let mut cache = QueryCache::new();
        cache.store_todos(vec![TodoDto::new("1", "Buy milk")]);
        cache.store_todo("1", Some(TodoDto::new("1", "Buy milk")));
        cache.store_todo("600", None);
        cache
    }

    #[rstest]
    fn absence_is_a_cached_answer(cache: QueryCache) {
        assert_eq!(cache.todo("600"), Some(None));
        assert_eq!(cache.todo("2"), None);
        assert!(cache.contains(&QueryKey::Todo("600".to_owned())));
    }

    #[rstest]
    fn invalidating_the_list_keeps_single_answers(mut cache: QueryCache) {
        cache.invalidate(&QueryKey::Todos);

        assert!(cache.todos().is_none());
        assert!(cache.contains(&QueryKey::Todo("1".to_owned())));
        assert_eq!(cache.invalidations(&QueryKey::Todos), 1);
        assert_eq!(cache.invalidations(&QueryKey::Todo("1".to_owned())), 0);
    }

    #[rstest]
    fn invalidations_are_counted_per_key(mut cache: QueryCache) {
        let key = QueryKey::Todo("1".to_owned());
        cache.invalidate(&key);
        cache.invalidate(&key);

        assert_eq!(cache.invalidations(&key), 2);
        assert_eq!(cache.invalidations(&QueryKey::Todos), 0);
        assert_eq!(cache.todo("1"), None);
    }
}
