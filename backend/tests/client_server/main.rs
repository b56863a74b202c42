//! End-to-end tests: the todo client library against a running server.
//!
//! Each scenario starts a real Actix server on an ephemeral port with a fresh
//! in-memory store and drives it through `todo_client` over HTTP.

mod harness;
mod steps;

use std::sync::Mutex;

use harness::{ClientServerWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/client_server.feature",
    name = "Deleting a todo invalidates the list once"
)]
fn deleting_invalidates_the_list_once(world: Mutex<ClientServerWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_server.feature",
    name = "A taken name links to the existing todo"
)]
fn taken_name_links_to_existing(world: Mutex<ClientServerWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_server.feature",
    name = "A rejected rename keeps the cached list"
)]
fn rejected_rename_keeps_cached_list(world: Mutex<ClientServerWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_server.feature",
    name = "Editing a missing todo shows no form"
)]
fn editing_missing_todo_shows_no_form(world: Mutex<ClientServerWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/client_server.feature",
    name = "An unknown operation is a transport failure"
)]
fn unknown_operation_is_transport_failure(world: Mutex<ClientServerWorld>) {
    drop(world);
}
