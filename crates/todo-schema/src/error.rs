//! Tagged union of field-attributable mutation errors.

use serde::{Deserialize, Serialize};

/// Domain validation error as serialised inside a mutation payload.
///
/// The `__kind` tag is the discriminant clients narrow on; `existingId` only
/// exists on the `NameTaken` variant.
///
/// # Examples
/// ```
/// use todo_schema::TodoErrorDto;
///
/// let error = TodoErrorDto::user_error("name", "Name is required");
/// let json = serde_json::to_value(&error).expect("serialises");
/// assert_eq!(json["__kind"], "UserError");
/// assert!(json.get("existingId").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__kind")]
pub enum TodoErrorDto {
    /// Generic field-level failure (empty name, unknown id).
    UserError {
        /// Human-readable message.
        message: String,
        /// Input field the error belongs to.
        path: String,
    },
    /// The requested name belongs to another record.
    NameTaken {
        /// Human-readable message.
        message: String,
        /// Input field the error belongs to.
        path: String,
        /// Identifier of the record that already uses the name.
        #[serde(rename = "existingId")]
        existing_id: String,
    },
}

impl TodoErrorDto {
    /// Build a [`TodoErrorDto::UserError`].
    #[must_use]
    pub fn user_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UserError {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Build a [`TodoErrorDto::NameTaken`].
    #[must_use]
    pub fn name_taken(
        path: impl Into<String>,
        message: impl Into<String>,
        existing_id: impl Into<String>,
    ) -> Self {
        Self::NameTaken {
            message: message.into(),
            path: path.into(),
            existing_id: existing_id.into(),
        }
    }

    /// Field the error is attributed to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::UserError { path, .. } | Self::NameTaken { path, .. } => path,
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UserError { message, .. } | Self::NameTaken { message, .. } => message,
        }
    }

    /// Value of the `__kind` discriminant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UserError { .. } => "UserError",
            Self::NameTaken { .. } => "NameTaken",
        }
    }
}
