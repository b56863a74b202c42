//! Result envelope returned by every write operation.

use thiserror::Error;

use super::ValidationError;

/// Non-empty, ordered set of validation errors that rejected a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mutation rejected with {} validation error(s)", .errors.len())]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Errors in the order they were produced.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the failure, yielding its errors.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationFailure {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// Outcome of a mutation: the written record, or the errors that rejected it.
///
/// Success and failure are exclusive by construction: an outcome either holds
/// a record and no errors, or no record and at least one error.
///
/// # Examples
/// ```
/// use backend::domain::{MutationOutcome, ValidationError};
///
/// let rejected: MutationOutcome<()> = MutationOutcome::failure(ValidationError::name_required());
/// assert!(rejected.record().is_none());
/// assert_eq!(rejected.errors().len(), 1);
///
/// let applied = MutationOutcome::success(());
/// assert!(applied.errors().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct MutationOutcome<T>(Result<T, ValidationFailure>);

impl<T> MutationOutcome<T> {
    /// The write was applied and produced `record`.
    pub fn success(record: T) -> Self {
        Self(Ok(record))
    }

    /// The write was rejected by `error`.
    pub fn failure(error: ValidationError) -> Self {
        Self(Err(error.into()))
    }

    /// Whether the write was applied.
    pub fn is_success(&self) -> bool {
        self.0.is_ok()
    }

    /// The written record, if the write was applied.
    pub fn record(&self) -> Option<&T> {
        self.0.as_ref().ok()
    }

    /// The rejecting errors; empty when the write was applied.
    pub fn errors(&self) -> &[ValidationError] {
        match &self.0 {
            Ok(_) => &[],
            Err(failure) => failure.errors(),
        }
    }

    /// Transform the record while keeping any failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MutationOutcome<U> {
        MutationOutcome(self.0.map(f))
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, ValidationFailure> {
        self.0
    }
}

impl<T> From<Result<T, ValidationError>> for MutationOutcome<T> {
    fn from(value: Result<T, ValidationError>) -> Self {
        Self(value.map_err(ValidationFailure::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_exclusive<T>(outcome: &MutationOutcome<T>) -> bool {
        outcome.record().is_some() == outcome.errors().is_empty()
    }

    #[rstest]
    fn success_has_record_and_no_errors() {
        let outcome = MutationOutcome::success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.record(), Some(&7));
        assert!(is_exclusive(&outcome));
    }

    #[rstest]
    #[case(ValidationError::name_required())]
    #[case(ValidationError::todo_not_found())]
    fn failure_has_errors_and_no_record(#[case] error: ValidationError) {
        let outcome: MutationOutcome<u8> = MutationOutcome::failure(error.clone());
        assert!(!outcome.is_success());
        assert_eq!(outcome.errors(), [error].as_slice());
        assert!(is_exclusive(&outcome));
    }

    #[rstest]
    fn map_keeps_failures() {
        let outcome: MutationOutcome<u8> =
            MutationOutcome::failure(ValidationError::name_required());
        let mapped = outcome.map(|value| value.to_string());
        assert_eq!(mapped.errors().len(), 1);
        assert!(mapped.record().is_none());
    }

    #[rstest]
    fn into_result_exposes_failure() {
        let outcome: MutationOutcome<()> =
            Err(ValidationError::todo_not_found()).into();
        let failure = outcome.into_result().expect_err("rejected");
        assert_eq!(failure.into_errors(), vec![ValidationError::todo_not_found()]);
    }
}
