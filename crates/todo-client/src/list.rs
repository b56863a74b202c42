//! List screen: rows with edit links and per-row delete.

use todo_schema::TodoDto;

use crate::{MutationResult, Route, TodoClient, TodoTransport};

/// Label shown while a delete is in flight.
pub const DELETING_LABEL: &str = "Deleting...";

/// Delete state of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStatus {
    /// No delete requested or the last one succeeded.
    Idle,
    /// A delete is in flight.
    Deleting,
    /// The last delete failed with this message.
    Failed(String),
}

impl DeleteStatus {
    /// Text rendered next to the delete action, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Deleting => Some(DELETING_LABEL),
            Self::Failed(message) => Some(message.as_str()),
        }
    }
}

/// One record in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    todo: TodoDto,
    status: DeleteStatus,
}

impl TodoRow {
    /// Row for `todo`.
    #[must_use]
    pub const fn new(todo: TodoDto) -> Self {
        Self {
            todo,
            status: DeleteStatus::Idle,
        }
    }

    /// Record shown by the row.
    #[must_use]
    pub const fn todo(&self) -> &TodoDto {
        &self.todo
    }

    /// Target of the row's edit link.
    #[must_use]
    pub fn edit_route(&self) -> Route {
        Route::Edit(self.todo.id.clone())
    }

    /// Current delete state.
    #[must_use]
    pub const fn status(&self) -> &DeleteStatus {
        &self.status
    }

    /// Delete the record through `client`.
    ///
    /// A rejection shows its first message inline; a transport failure
    /// shows its description. Ignored while a delete is in flight.
    ///
    /// Returns whether the record was removed.
    pub async fn delete<T: TodoTransport>(&mut self, client: &mut TodoClient<T>) -> bool {
        if self.status == DeleteStatus::Deleting {
            return false;
        }
        self.status = DeleteStatus::Deleting;
        let (status, removed) = match client.delete(&self.todo.id).await {
            Ok(MutationResult::Applied(())) => (DeleteStatus::Idle, true),
            Ok(MutationResult::Rejected(errors)) => {
                let message = errors
                    .first()
                    .map_or_else(|| "Delete rejected".to_owned(), |e| e.message().to_owned());
                (DeleteStatus::Failed(message), false)
            }
            Err(error) => (DeleteStatus::Failed(error.to_string()), false),
        };
        self.status = status;
        removed
    }
}

/// What the list screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Rows in store order.
    Loaded(Vec<TodoRow>),
    /// The list could not be loaded.
    LoadFailed(String),
}

impl ListView {
    /// Load the list through `client`.
    pub async fn load<T: TodoTransport>(client: &mut TodoClient<T>) -> Self {
        match client.todos().await {
            Ok(todos) => Self::Loaded(todos.into_iter().map(TodoRow::new).collect()),
            Err(error) => Self::LoadFailed(format!("Error : {error}")),
        }
    }

    /// Loaded rows; empty when loading failed.
    #[must_use]
    pub fn rows(&self) -> &[TodoRow] {
        match self {
            Self::Loaded(rows) => rows.as_slice(),
            Self::LoadFailed(_) => &[],
        }
    }
}
