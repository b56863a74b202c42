//! Domain primitives, validation rules, and the todo service.
//!
//! Purpose: define the todo record, the validation engine that guards every
//! write, and the result-typed protocol that reports validation failures as
//! data. Transport concerns stay in `crate::inbound`.
//!
//! Public surface:
//! - Todo / TodoId: the record and its store-assigned identifier.
//! - ValidationError / FieldPath: field-attributable write failures.
//! - MutationOutcome / ValidationFailure: success-or-errors write results.
//! - TodoService: validate-then-apply service implementing the ports.
//! - Error / ErrorCode: transport-level failures (malformed requests, faults).
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;
pub mod validation;
pub mod validation_error;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::outcome::{MutationOutcome, ValidationFailure};
pub use self::todo::{Todo, TodoId};
pub use self::todo_service::TodoService;
pub use self::trace_id::TraceId;
pub use self::validation::{validate_create, validate_delete, validate_update};
pub use self::validation_error::{
    FieldPath, NAME_REQUIRED_MESSAGE, NAME_TAKEN_MESSAGE, TODO_NOT_FOUND_MESSAGE, ValidationError,
};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = todo_schema::TRACE_ID_HEADER;

/// Convenient result alias for operations that can fail at the transport
/// level.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
