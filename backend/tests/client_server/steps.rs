//! Step definitions for the client/server suite.

use std::sync::Mutex;

use reqwest::Client;
use rstest_bdd_macros::{given, then, when};
use serde_json::json;
use todo_client::{EditView, Lookup, MutationResult, QueryKey, SubmitEffect, TodoForm};
use todo_schema::{GRAPHQL_PATH, TRACE_ID_HEADER};

use crate::harness::{ClientServerWorld, RawResponse};

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

fn with_world<R>(world: &Mutex<ClientServerWorld>, f: impl FnOnce(&mut ClientServerWorld) -> R) -> R {
    let mut world = world.lock().expect("world lock");
    f(&mut world)
}

#[given("a running todo server")]
fn a_running_todo_server(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        assert_eq!(world.base_url.scheme(), "http");
    });
}

#[given("the client has created a todo named {name}")]
fn the_client_has_created(world: &Mutex<ClientServerWorld>, name: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let result = local
            .block_on(runtime, client.create(unquote(&name)))
            .expect("create settles");
        assert!(result.is_applied(), "seed write rejected: {:?}", result.errors());
    });
}

#[given("the client has loaded the todo list")]
fn the_client_has_loaded_the_list(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        local
            .block_on(runtime, client.todos())
            .expect("list loads");
        world.list_invalidations_at_load = world.client.cache().invalidations(&QueryKey::Todos);
    });
}

#[when("the client deletes todo {id}")]
fn the_client_deletes(world: &Mutex<ClientServerWorld>, id: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let result = local
            .block_on(runtime, client.delete(unquote(&id)))
            .expect("delete settles");
        world.last_delete_applied = Some(result == MutationResult::Applied(()));
    });
}

#[when("the create form is submitted with {name}")]
fn the_create_form_is_submitted(world: &Mutex<ClientServerWorld>, name: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let mut form = TodoForm::create();
        form.set_name(unquote(&name));
        let effect = local.block_on(runtime, form.submit(client));
        world.last_effect = Some(effect);
    });
}

#[when("the edit form for todo {id} is submitted with {name}")]
fn the_edit_form_is_submitted(world: &Mutex<ClientServerWorld>, id: String, name: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let effect = local.block_on(runtime, async {
            match EditView::load(client, unquote(&id)).await {
                EditView::Ready(mut form) => {
                    form.set_name(unquote(&name));
                    form.submit(client).await
                }
                other => panic!("expected an edit form, got {other:?}"),
            }
        });
        world.last_effect = Some(effect);
    });
}

#[when("the edit view for todo {id} is loaded")]
fn the_edit_view_is_loaded(world: &Mutex<ClientServerWorld>, id: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let view = local.block_on(runtime, EditView::load(client, unquote(&id)));
        world.last_view = Some(view);
    });
}

#[when("the operation {name} is posted")]
fn the_operation_is_posted(world: &Mutex<ClientServerWorld>, name: String) {
    with_world(world, |world| {
        let url = world.base_url.join(GRAPHQL_PATH).expect("endpoint URL");
        let body = json!({ "operationName": unquote(&name), "variables": {} });
        let raw = world.local.block_on(&world.runtime, async move {
            let response = Client::new()
                .post(url)
                .json(&body)
                .send()
                .await
                .expect("request sent");
            let status = response.status().as_u16();
            let trace_header = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let envelope = response.json().await.expect("error envelope");
            RawResponse {
                status,
                trace_header,
                envelope,
            }
        });
        world.last_raw = Some(raw);
    });
}

#[then("the delete is applied")]
fn the_delete_is_applied(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        assert_eq!(world.last_delete_applied, Some(true));
    });
}

#[then("the todo list was invalidated once since it was loaded")]
fn the_list_was_invalidated_once(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        let now = world.client.cache().invalidations(&QueryKey::Todos);
        assert_eq!(now - world.list_invalidations_at_load, 1);
    });
}

#[then("the todo list is still cached")]
fn the_list_is_still_cached(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        let cache = world.client.cache();
        assert!(cache.contains(&QueryKey::Todos));
        assert_eq!(
            cache.invalidations(&QueryKey::Todos),
            world.list_invalidations_at_load
        );
    });
}

#[then("reading todo {id} through the client finds nothing")]
fn reading_finds_nothing(world: &Mutex<ClientServerWorld>, id: String) {
    with_world(world, |world| {
        let ClientServerWorld {
            runtime,
            local,
            client,
            ..
        } = &mut *world;
        let lookup = local
            .block_on(runtime, client.todo(unquote(&id)))
            .expect("lookup settles");
        assert_eq!(lookup, Lookup::NotFound(unquote(&id).to_owned()));
    });
}

fn with_name_error<R>(
    world: &Mutex<ClientServerWorld>,
    f: impl FnOnce(&todo_client::FieldError) -> R,
) -> R {
    with_world(world, |world| match world.last_effect.as_ref() {
        Some(SubmitEffect::FieldErrors(errors)) => f(errors.get("name").expect("name error")),
        other => panic!("expected field errors, got {other:?}"),
    })
}

#[then("the name field shows {message}")]
fn the_name_field_shows(world: &Mutex<ClientServerWorld>, message: String) {
    with_name_error(world, |error| assert_eq!(error.message, unquote(&message)));
}

#[then("the name field links to {href}")]
fn the_name_field_links_to(world: &Mutex<ClientServerWorld>, href: String) {
    with_name_error(world, |error| {
        let link = error.link.as_ref().expect("edit link");
        assert_eq!(link.route.to_string(), unquote(&href));
        assert_eq!(link.label, "Edit existing todo");
    });
}

#[then("the view reports {message}")]
fn the_view_reports(world: &Mutex<ClientServerWorld>, message: String) {
    with_world(world, |world| {
        let view = world.last_view.as_ref().expect("view loaded");
        assert_eq!(view.message().as_deref(), Some(unquote(&message)));
    });
}

#[then("the request is rejected with status {status} and code {code}")]
fn the_request_is_rejected(world: &Mutex<ClientServerWorld>, status: u16, code: String) {
    with_world(world, |world| {
        let raw = world.last_raw.as_ref().expect("raw response");
        assert_eq!(raw.status, status);
        assert_eq!(raw.envelope.code, unquote(&code));
    });
}

#[then("the rejection carries the trace id header")]
fn the_rejection_carries_trace_id(world: &Mutex<ClientServerWorld>) {
    with_world(world, |world| {
        let raw = world.last_raw.as_ref().expect("raw response");
        let header = raw.trace_header.as_deref().expect("trace header");
        assert_eq!(raw.envelope.trace_id.as_deref(), Some(header));
    });
}
