//! Create and edit form controllers.

use todo_schema::TodoDto;

use crate::{
    FieldError, FieldErrors, Lookup, SubmitEffect, TodoClient, TodoTransport, submit_effect,
};

/// Which write a form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// `createTodo(name)`
    Create,
    /// `updateTodo(id, name)`
    Edit(String),
}

/// State of a create or edit form.
///
/// Only one submission may be in flight; a second [`TodoForm::begin`]
/// before the first settles yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoForm {
    mode: FormMode,
    name: String,
    in_flight: bool,
    errors: FieldErrors,
    notice: Option<String>,
}

/// Snapshot of a form submission that has not been sent yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingSubmit {
    mode: FormMode,
    name: String,
}

impl PendingSubmit {
    /// Send the write and decide its effect.
    pub async fn send<T: TodoTransport>(self, client: &mut TodoClient<T>) -> SubmitEffect {
        match self.mode {
            FormMode::Create => submit_effect(client.create(&self.name).await),
            FormMode::Edit(id) => submit_effect(client.update(&id, &self.name).await),
        }
    }
}

impl TodoForm {
    fn with(mode: FormMode, name: String) -> Self {
        Self {
            mode,
            name,
            in_flight: false,
            errors: FieldErrors::default(),
            notice: None,
        }
    }

    /// Empty create form.
    #[must_use]
    pub fn create() -> Self {
        Self::with(FormMode::Create, String::new())
    }

    /// Edit form pre-filled from `todo`.
    #[must_use]
    pub fn edit(todo: TodoDto) -> Self {
        let TodoDto { id, name } = todo;
        Self::with(FormMode::Edit(id), name)
    }

    /// Which write the form submits.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current name input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Error rendered under `path`.
    #[must_use]
    pub fn field_error(&self, path: &str) -> Option<&FieldError> {
        self.errors.get(path)
    }

    /// Global notice from the last failed request.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Start a submission, or `None` while another is in flight.
    pub fn begin(&mut self) -> Option<PendingSubmit> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(PendingSubmit {
            mode: self.mode.clone(),
            name: self.name.clone(),
        })
    }

    /// Apply the effect of a settled submission.
    pub fn settle(&mut self, effect: &SubmitEffect) {
        match effect {
            SubmitEffect::AlreadySubmitting => return,
            SubmitEffect::Navigate(_) => {
                self.name.clear();
                self.errors = FieldErrors::default();
                self.notice = None;
            }
            SubmitEffect::FieldErrors(errors) => {
                self.errors = errors.clone();
                self.notice = None;
            }
            SubmitEffect::Notice(message) => {
                self.errors = FieldErrors::default();
                self.notice = Some(message.clone());
            }
        }
        self.in_flight = false;
    }

    /// Submit the form through `client` and apply the effect.
    pub async fn submit<T: TodoTransport>(&mut self, client: &mut TodoClient<T>) -> SubmitEffect {
        let Some(pending) = self.begin() else {
            return SubmitEffect::AlreadySubmitting;
        };
        let effect = pending.send(client).await;
        self.settle(&effect);
        effect
    }
}

/// What the edit screen shows for one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditView {
    /// The record exists; its form is pre-filled.
    Ready(TodoForm),
    /// No record has the id.
    Missing {
        /// Requested id.
        id: String,
    },
    /// The record could not be loaded.
    LoadFailed {
        /// Transport failure description.
        reason: String,
    },
}

impl EditView {
    /// Load the record with `id` and build the matching view.
    pub async fn load<T: TodoTransport>(client: &mut TodoClient<T>, id: &str) -> Self {
        match client.todo(id).await {
            Ok(Lookup::Found(todo)) => Self::Ready(TodoForm::edit(todo)),
            Ok(Lookup::NotFound(missing)) => Self::Missing { id: missing },
            Err(error) => Self::LoadFailed {
                reason: error.to_string(),
            },
        }
    }

    /// Message shown instead of a form, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Ready(_) => None,
            Self::Missing { id } => Some(format!("No todo found for id {id}")),
            Self::LoadFailed { reason } => Some(format!("Error loading todo: {reason}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use crate::transport::MockTodoTransport;
    use crate::TransportError;
    use rstest::rstest;
    use serde_json::{Value, json};
    use todo_schema::{Operation, TodoErrorDto};

    fn client_answering(answer: Result<Value, TransportError>) -> TodoClient<MockTodoTransport> {
        let mut transport = MockTodoTransport::new();
        transport
            .expect_execute()
            .times(1)
            .return_once(move |_| answer);
        TodoClient::new(transport)
    }

    #[rstest]
    #[tokio::test]
    async fn successful_create_clears_and_navigates_home() {
        let mut client =
            client_answering(Ok(json!({ "todo": { "id": "1", "name": "Buy milk" }, "errors": [] })));
        let mut form = TodoForm::create();
        form.set_name("Buy milk");

        let effect = form.submit(&mut client).await;

        assert_eq!(effect, SubmitEffect::Navigate(Route::List));
        assert_eq!(form.name(), "");
        assert!(!form.is_submitting());
    }

    #[rstest]
    #[tokio::test]
    async fn name_taken_renders_under_name_with_link() {
        let mut client = client_answering(Ok(json!({
            "todo": null,
            "errors": [{
                "__kind": "NameTaken",
                "message": "Todo name taken",
                "path": "name",
                "existingId": "1"
            }]
        })));
        let mut form = TodoForm::create();
        form.set_name("Buy milk");

        form.submit(&mut client).await;

        let error = form.field_error("name").expect("name error");
        assert_eq!(error.message, "Todo name taken");
        assert_eq!(
            error.link.as_ref().map(|link| link.route.to_string()),
            Some("/edit/1".to_owned())
        );
        assert_eq!(form.name(), "Buy milk");
        assert!(form.notice().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn transport_failure_is_a_notice_not_a_field_error() {
        let mut client = client_answering(Err(TransportError::Network("timed out".to_owned())));
        let mut form = TodoForm::edit(todo_schema::TodoDto::new("1", "Buy milk"));

        let effect = form.submit(&mut client).await;

        assert_eq!(effect, SubmitEffect::Notice("network error: timed out".to_owned()));
        assert_eq!(form.notice(), Some("network error: timed out"));
        assert!(form.field_error("name").is_none());
    }

    #[rstest]
    fn notice_replaces_earlier_field_errors() {
        let mut form = TodoForm::create();
        form.set_name("Buy milk");
        assert!(form.begin().is_some());
        form.settle(&SubmitEffect::FieldErrors(FieldErrors::from_errors(&[
            TodoErrorDto::name_taken("name", "Todo name taken", "1"),
        ])));
        assert!(form.field_error("name").is_some());

        assert!(form.begin().is_some());
        form.settle(&SubmitEffect::Notice("network error: reset".to_owned()));

        assert!(form.field_error("name").is_none());
        assert_eq!(form.notice(), Some("network error: reset"));
        assert_eq!(form.name(), "Buy milk");
    }

    #[rstest]
    fn second_submission_waits_for_the_first() {
        let mut form = TodoForm::create();
        assert!(form.begin().is_some());
        assert!(form.begin().is_none());

        form.settle(&SubmitEffect::Notice("network error: reset".to_owned()));
        assert!(form.begin().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn edit_view_prefills_the_form() {
        let mut transport = MockTodoTransport::new();
        transport
            .expect_execute()
            .withf(|op| *op == Operation::Todo { id: "2".to_owned() })
            .return_once(|_| Ok(json!({ "id": "2", "name": "Walk dog" })));
        let mut client = TodoClient::new(transport);

        match EditView::load(&mut client, "2").await {
            EditView::Ready(form) => {
                assert_eq!(form.name(), "Walk dog");
                assert_eq!(form.mode(), &FormMode::Edit("2".to_owned()));
            }
            other => panic!("expected a form, got {other:?}"),
        }
    }

    #[rstest]
    #[case(Ok(Value::Null), "No todo found for id 600")]
    #[case(
        Err(TransportError::Network("refused".to_owned())),
        "Error loading todo: network error: refused"
    )]
    #[tokio::test]
    async fn edit_view_reports_why_there_is_no_form(
        #[case] answer: Result<Value, TransportError>,
        #[case] expected: &str,
    ) {
        let mut client = client_answering(answer);
        let view = EditView::load(&mut client, "600").await;
        assert_eq!(view.message().as_deref(), Some(expected));
    }
}
