//! Client for the todo operation endpoint.
//!
//! The crate models what a front end does with the service:
//!
//! - [`TodoTransport`] sends one operation; [`HttpTransport`] does so over
//!   HTTP with reqwest.
//! - [`TodoClient`] caches reads and reconciles the cache after each applied
//!   write.
//! - [`TodoForm`], [`EditView`], and [`ListView`] turn results into what the
//!   screens render: field errors, navigation, or one global notice.
//!
//! Domain rejections and transport failures never share a type. A rejected
//! write is [`MutationResult::Rejected`]; a request that produced no result
//! is a [`TransportError`].

mod cache;
mod client;
mod error;
mod form;
mod handler;
mod list;
mod route;
mod transport;

pub use cache::{Lookup, QueryCache, QueryKey};
pub use client::TodoClient;
pub use error::TransportError;
pub use form::{EditView, FormMode, PendingSubmit, TodoForm};
pub use handler::{
    EDIT_EXISTING_LABEL, EditLink, FieldError, FieldErrors, MutationResult, SubmitEffect,
    submit_effect,
};
pub use list::{DELETING_LABEL, DeleteStatus, ListView, TodoRow};
pub use route::Route;
pub use transport::{HttpTransport, TodoTransport, graphql_endpoint};
