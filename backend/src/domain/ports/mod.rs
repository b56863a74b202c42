//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`TodoCommand`], [`TodoQuery`]) are what inbound adapters
//! call. The driven port ([`TodoRepository`]) is what the domain expects
//! from the store adapter.

mod todo_command;
mod todo_query;
mod todo_repository;

#[cfg(test)]
pub use todo_command::MockTodoCommand;
pub use todo_command::{CreateTodoRequest, DeleteTodoRequest, TodoCommand, UpdateTodoRequest};
#[cfg(test)]
pub use todo_query::MockTodoQuery;
pub use todo_query::TodoQuery;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::TodoRepository;
