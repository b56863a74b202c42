//! Field-attributable validation errors produced by the validation engine.

use std::fmt;

use thiserror::Error;

use super::TodoId;

/// Message reported when a name is empty or whitespace-only.
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";
/// Message reported when another record already uses the name.
pub const NAME_TAKEN_MESSAGE: &str = "Todo name taken";
/// Message reported when a write targets an unknown id.
pub const TODO_NOT_FOUND_MESSAGE: &str = "Todo not found";

/// Input field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// The record identifier argument.
    Id,
    /// The name argument.
    Name,
}

impl FieldPath {
    /// Field name as sent to clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain validation failure.
///
/// A closed set: a new failure kind becomes a new variant. The conflicting
/// record's id is only reachable by matching [`ValidationError::NameTaken`].
///
/// # Examples
/// ```
/// use backend::domain::{FieldPath, TodoId, ValidationError};
///
/// let error = ValidationError::name_taken(TodoId::new("1"));
/// assert_eq!(error.path(), FieldPath::Name);
/// if let ValidationError::NameTaken { existing_id, .. } = &error {
///     assert_eq!(existing_id.as_str(), "1");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Generic field-level failure such as an empty name or unknown id.
    #[error("{path}: {message}")]
    UserError {
        /// Field the error belongs to.
        path: FieldPath,
        /// Human-readable message.
        message: String,
    },
    /// Another record already uses the requested name.
    #[error("{path}: {message} (todo {existing_id})")]
    NameTaken {
        /// Field the error belongs to.
        path: FieldPath,
        /// Human-readable message.
        message: String,
        /// Record currently holding the name.
        existing_id: TodoId,
    },
}

impl ValidationError {
    /// The name argument is empty or whitespace-only.
    pub fn name_required() -> Self {
        Self::UserError {
            path: FieldPath::Name,
            message: NAME_REQUIRED_MESSAGE.to_owned(),
        }
    }

    /// The name argument is held by `existing_id`.
    pub fn name_taken(existing_id: TodoId) -> Self {
        Self::NameTaken {
            path: FieldPath::Name,
            message: NAME_TAKEN_MESSAGE.to_owned(),
            existing_id,
        }
    }

    /// The id argument does not match a live record.
    pub fn todo_not_found() -> Self {
        Self::UserError {
            path: FieldPath::Id,
            message: TODO_NOT_FOUND_MESSAGE.to_owned(),
        }
    }

    /// Field the error belongs to.
    pub fn path(&self) -> FieldPath {
        match self {
            Self::UserError { path, .. } | Self::NameTaken { path, .. } => *path,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::UserError { message, .. } | Self::NameTaken { message, .. } => message,
        }
    }
}
