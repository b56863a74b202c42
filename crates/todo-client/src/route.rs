//! Client navigation targets.

use std::fmt;

/// Screen the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The todo list at `/`.
    List,
    /// The create form at `/create`.
    Create,
    /// The edit form for one todo at `/edit/{id}`.
    Edit(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("/"),
            Self::Create => f.write_str("/create"),
            Self::Edit(id) => write!(f, "/edit/{id}"),
        }
    }
}
