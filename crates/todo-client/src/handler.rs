//! Interpretation of mutation results for forms.
//!
//! A decoded [`MutationResult`] is either the applied write or the domain
//! errors that rejected it. [`submit_effect`] turns it, or a transport
//! failure, into the one thing the form should do next.

use todo_schema::{MutationPayload, TodoDto, TodoErrorDto};

use crate::{Route, TransportError};

/// Label of the link rendered next to a `NameTaken` error.
pub const EDIT_EXISTING_LABEL: &str = "Edit existing todo";

/// Outcome of a write as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum MutationResult<T> {
    /// The write was applied.
    Applied(T),
    /// The write was rejected; never empty.
    Rejected(Vec<TodoErrorDto>),
}

impl<T> MutationResult<T> {
    /// Whether the write was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Rejecting errors; empty when applied.
    #[must_use]
    pub fn errors(&self) -> &[TodoErrorDto] {
        match self {
            Self::Applied(_) => &[],
            Self::Rejected(errors) => errors.as_slice(),
        }
    }

    /// Decode a payload, letting `record` judge the success branch.
    ///
    /// A payload holding both a record and errors is inconsistent.
    pub(crate) fn decode(
        payload: MutationPayload,
        record: impl FnOnce(Option<TodoDto>) -> Result<T, TransportError>,
    ) -> Result<Self, TransportError> {
        let applied = payload.is_success();
        let MutationPayload { todo, errors } = payload;
        match (todo, applied) {
            (Some(todo), false) => Err(TransportError::InconsistentPayload(format!(
                "record {} returned together with errors",
                todo.id
            ))),
            (None, false) => Ok(Self::Rejected(errors)),
            (todo, true) => record(todo).map(Self::Applied),
        }
    }
}

impl MutationResult<TodoDto> {
    /// Decode the payload of `createTodo` or `updateTodo`.
    ///
    /// # Errors
    ///
    /// [`TransportError::InconsistentPayload`] when the payload has neither
    /// a record nor errors, or both.
    pub fn from_record_payload(payload: MutationPayload) -> Result<Self, TransportError> {
        Self::decode(payload, |todo| {
            todo.ok_or_else(|| {
                TransportError::InconsistentPayload("no record and no errors".to_owned())
            })
        })
    }
}

impl MutationResult<()> {
    /// Decode the payload of `deleteTodo`, whose success carries no record.
    ///
    /// # Errors
    ///
    /// [`TransportError::InconsistentPayload`] when the payload has both a
    /// record and errors.
    pub fn from_unit_payload(payload: MutationPayload) -> Result<Self, TransportError> {
        Self::decode(payload, |_| Ok(()))
    }
}

/// Navigable reference rendered next to a field error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLink {
    /// Target of the link.
    pub route: Route,
    /// Visible text.
    pub label: &'static str,
}

/// Error shown under one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Message to render.
    pub message: String,
    /// Link to the conflicting record for `NameTaken` errors.
    pub link: Option<EditLink>,
}

impl From<&TodoErrorDto> for FieldError {
    fn from(error: &TodoErrorDto) -> Self {
        let link = match error {
            TodoErrorDto::NameTaken { existing_id, .. } => Some(EditLink {
                route: Route::Edit(existing_id.clone()),
                label: EDIT_EXISTING_LABEL,
            }),
            TodoErrorDto::UserError { .. } => None,
        };
        Self {
            message: error.message().to_owned(),
            link,
        }
    }
}

/// Field errors keyed by path, at most one per field.
///
/// When several errors share a path, the first one is kept.
///
/// # Examples
/// ```
/// use todo_client::FieldErrors;
/// use todo_schema::TodoErrorDto;
///
/// let errors = FieldErrors::from_errors(&[
///     TodoErrorDto::user_error("name", "Name is required"),
///     TodoErrorDto::name_taken("name", "Todo name taken", "1"),
/// ]);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get("name").map(|e| e.message.as_str()), Some("Name is required"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, FieldError)>,
}

impl FieldErrors {
    /// Map `errors` to their fields, first error per path winning.
    #[must_use]
    pub fn from_errors(errors: &[TodoErrorDto]) -> Self {
        let mut mapped = Self::default();
        for error in errors {
            if mapped.get(error.path()).is_none() {
                mapped
                    .entries
                    .push((error.path().to_owned(), FieldError::from(error)));
            }
        }
        mapped
    }

    /// Error attributed to `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.entries
            .iter()
            .find_map(|(field, error)| (field == path).then_some(error))
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths and errors in the order the paths first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries
            .iter()
            .map(|(field, error)| (field.as_str(), error))
    }
}

/// What a form does after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitEffect {
    /// The write was applied; leave the form.
    Navigate(Route),
    /// The write was rejected; render errors under their fields.
    FieldErrors(FieldErrors),
    /// The request failed; render one global notice.
    Notice(String),
    /// A submission is still in flight; nothing was sent.
    AlreadySubmitting,
}

/// Decide the effect of a settled submission.
///
/// # Examples
/// ```
/// use todo_client::{MutationResult, Route, SubmitEffect, submit_effect};
///
/// let effect = submit_effect(Ok(MutationResult::Applied(())));
/// assert_eq!(effect, SubmitEffect::Navigate(Route::List));
/// ```
#[must_use]
pub fn submit_effect<T>(result: Result<MutationResult<T>, TransportError>) -> SubmitEffect {
    match result {
        Ok(MutationResult::Applied(_)) => SubmitEffect::Navigate(Route::List),
        Ok(MutationResult::Rejected(errors)) => {
            SubmitEffect::FieldErrors(FieldErrors::from_errors(&errors))
        }
        Err(error) => SubmitEffect::Notice(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use todo_schema::ErrorEnvelope;

    fn name_taken(existing_id: &str) -> TodoErrorDto {
        TodoErrorDto::name_taken("name", "Todo name taken", existing_id)
    }

    #[rstest]
    fn name_taken_links_to_the_existing_record() {
        let errors = FieldErrors::from_errors(&[name_taken("1")]);
        let error = errors.get("name").expect("name error");

        assert_eq!(error.message, "Todo name taken");
        let link = error.link.as_ref().expect("link");
        assert_eq!(link.route.to_string(), "/edit/1");
        assert_eq!(link.label, "Edit existing todo");
    }

    #[rstest]
    fn user_errors_have_no_link() {
        let errors = FieldErrors::from_errors(&[TodoErrorDto::user_error("id", "Todo not found")]);
        assert_eq!(errors.get("id").and_then(|e| e.link.clone()), None);
        assert!(errors.get("name").is_none());
    }

    #[rstest]
    fn first_error_per_path_wins_and_paths_keep_order() {
        let errors = FieldErrors::from_errors(&[
            name_taken("4"),
            TodoErrorDto::user_error("id", "Todo not found"),
            name_taken("9"),
        ]);
        let paths: Vec<_> = errors.iter().map(|(path, _)| path).collect();

        assert_eq!(paths, vec!["name", "id"]);
        let link = errors.get("name").and_then(|e| e.link.clone()).expect("link");
        assert_eq!(link.route, Route::Edit("4".to_owned()));
    }

    #[rstest]
    fn record_payload_with_record_is_applied() {
        let payload = MutationPayload::success(Some(TodoDto::new("1", "Buy milk")));
        let result = MutationResult::from_record_payload(payload).expect("consistent");
        assert_eq!(result, MutationResult::Applied(TodoDto::new("1", "Buy milk")));
    }

    #[rstest]
    fn record_payload_without_anything_is_inconsistent() {
        let result = MutationResult::from_record_payload(MutationPayload::success(None));
        assert!(matches!(result, Err(TransportError::InconsistentPayload(_))));
    }

    #[rstest]
    #[case(MutationResult::from_record_payload(MutationPayload {
        todo: Some(TodoDto::new("1", "Buy milk")),
        errors: vec![name_taken("1")],
    }).map(|_| ()))]
    #[case(MutationResult::from_unit_payload(MutationPayload {
        todo: Some(TodoDto::new("1", "Buy milk")),
        errors: vec![TodoErrorDto::user_error("id", "Todo not found")],
    }).map(|_| ()))]
    fn record_and_errors_together_are_inconsistent(#[case] result: Result<(), TransportError>) {
        assert!(matches!(result, Err(TransportError::InconsistentPayload(_))));
    }

    #[rstest]
    fn unit_payload_rejection_keeps_errors() {
        let errors = vec![TodoErrorDto::user_error("id", "Todo not found")];
        let result =
            MutationResult::from_unit_payload(MutationPayload::failure(errors.clone()))
                .expect("consistent");
        assert!(!result.is_applied());
        assert_eq!(result.errors(), errors.as_slice());
    }

    #[rstest]
    fn rejected_submission_maps_field_errors() {
        let effect = submit_effect::<TodoDto>(Ok(MutationResult::Rejected(vec![name_taken("2")])));
        match effect {
            SubmitEffect::FieldErrors(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[rstest]
    #[case(TransportError::Network("connection refused".to_owned()))]
    #[case(TransportError::Rejected {
        status: 500,
        envelope: ErrorEnvelope {
            code: "internal_error".to_owned(),
            message: "Internal server error".to_owned(),
            trace_id: None,
            details: None,
        },
    })]
    fn transport_failures_become_a_notice(#[case] error: TransportError) {
        let expected = error.to_string();
        assert_eq!(
            submit_effect::<()>(Err(error)),
            SubmitEffect::Notice(expected)
        );
    }
}
