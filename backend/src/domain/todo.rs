//! Todo record and its store-assigned identifier.

use std::fmt;

/// Identifier assigned to a todo by the store.
///
/// Issued identifiers are the decimal form of a per-store counter that starts
/// at 1 and is never reused. Any string is a valid lookup key; strings the
/// store never issued simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap a raw identifier received from a caller.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Identifier for the given store sequence number.
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence.to_string())
    }

    /// Sequence number encoded by this identifier.
    ///
    /// Returns `None` unless the identifier is exactly the canonical decimal
    /// form of a sequence number, so `"01"` and `" 1"` never alias `"1"`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::TodoId;
    ///
    /// assert_eq!(TodoId::new("12").sequence(), Some(12));
    /// assert_eq!(TodoId::new("012").sequence(), None);
    /// assert_eq!(TodoId::new("nonexistent").sequence(), None);
    /// ```
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .parse::<u64>()
            .ok()
            .filter(|sequence| sequence.to_string() == self.0)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TodoId> for String {
    fn from(value: TodoId) -> Self {
        value.0
    }
}

/// A single todo item.
///
/// ## Invariants
/// - `name` is non-blank and unique among live records; both are enforced by
///   the validation engine before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    name: String,
}

impl Todo {
    /// Build a record from its parts.
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// Current name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the name, keeping the identity.
    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}
