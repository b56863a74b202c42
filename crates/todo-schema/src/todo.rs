//! Record shape returned by queries and mutations.

use serde::{Deserialize, Serialize};

/// A todo record as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    /// Store-assigned identifier.
    pub id: String,
    /// Unique, non-empty name.
    pub name: String,
}

impl TodoDto {
    /// Build a record DTO from its parts.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
