//! Mapping between domain values and the shared wire types.
//!
//! The wire types live in `todo_schema` so the client decodes exactly what
//! this adapter encodes.

use todo_schema::{MutationPayload, TodoDto, TodoErrorDto};

use crate::domain::{MutationOutcome, Todo, ValidationError};

/// Wire form of a record.
pub fn todo_dto(todo: Todo) -> TodoDto {
    TodoDto::new(todo.id().as_str(), todo.name())
}

/// Wire form of a validation error, tagged by `__kind`.
pub fn error_dto(error: ValidationError) -> TodoErrorDto {
    match error {
        ValidationError::UserError { path, message } => {
            TodoErrorDto::user_error(path.as_str(), message)
        }
        ValidationError::NameTaken {
            path,
            message,
            existing_id,
        } => TodoErrorDto::name_taken(path.as_str(), message, existing_id),
    }
}

/// Wire form of a mutation outcome.
///
/// `record` decides what a successful write reports in the `todo` field;
/// delete reports nothing.
pub fn mutation_payload<T>(
    outcome: MutationOutcome<T>,
    record: impl FnOnce(T) -> Option<TodoDto>,
) -> MutationPayload {
    match outcome.into_result() {
        Ok(written) => MutationPayload::success(record(written)),
        Err(failure) => {
            MutationPayload::failure(failure.into_errors().into_iter().map(error_dto).collect())
        }
    }
}
