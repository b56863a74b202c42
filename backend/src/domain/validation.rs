//! Validation engine for todo writes.
//!
//! Each validator checks a proposed write against the current store snapshot
//! and reports the first rule that fails. Rules run in a fixed order so the
//! reported error is deterministic:
//!
//! | Operation | 1st | 2nd | 3rd |
//! |-----------|-----|-----|-----|
//! | create | name blank | name taken | |
//! | update | name blank | name taken by another record | id unknown |
//! | delete | id unknown | | |
//!
//! Names are compared exactly. Trimming only decides blankness; it is never
//! applied before the uniqueness check.

use super::ports::TodoRepository;
use super::{TodoId, ValidationError};

fn ensure_name_present(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::name_required());
    }
    Ok(())
}

fn ensure_exists<R>(store: &R, id: &TodoId) -> Result<(), ValidationError>
where
    R: TodoRepository + ?Sized,
{
    match store.find(id) {
        Some(_) => Ok(()),
        None => Err(ValidationError::todo_not_found()),
    }
}

/// Check that `name` may be used for a new record.
///
/// # Errors
///
/// - [`ValidationError::UserError`] on `name` when it is blank.
/// - [`ValidationError::NameTaken`] when any record already has `name`.
pub fn validate_create<R>(store: &R, name: &str) -> Result<(), ValidationError>
where
    R: TodoRepository + ?Sized,
{
    ensure_name_present(name)?;
    if let Some(existing) = store.find_by_name(name) {
        return Err(ValidationError::name_taken(existing.id().clone()));
    }
    Ok(())
}

/// Check that record `id` may be renamed to `name`.
///
/// Renaming a record to its current name is allowed.
///
/// # Errors
///
/// - [`ValidationError::UserError`] on `name` when it is blank, even if `id`
///   is unknown.
/// - [`ValidationError::NameTaken`] when a different record has `name`.
/// - [`ValidationError::UserError`] on `id` when no record has `id`.
pub fn validate_update<R>(store: &R, id: &TodoId, name: &str) -> Result<(), ValidationError>
where
    R: TodoRepository + ?Sized,
{
    ensure_name_present(name)?;
    if let Some(existing) = store.find_by_name(name).filter(|todo| todo.id() != id) {
        return Err(ValidationError::name_taken(existing.id().clone()));
    }
    ensure_exists(store, id)
}

/// Check that record `id` may be removed.
///
/// # Errors
///
/// [`ValidationError::UserError`] on `id` when no record has `id`.
pub fn validate_delete<R>(store: &R, id: &TodoId) -> Result<(), ValidationError>
where
    R: TodoRepository + ?Sized,
{
    ensure_exists(store, id)
}
