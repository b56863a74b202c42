//! Server harness and shared world for the client/server suite.
//!
//! The world owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the world stops the server.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use backend::Trace;
use backend::domain::TodoService;
use backend::inbound::http::configure;
use backend::inbound::http::error::route_not_found;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryTodoStore;
use rstest::fixture;
use todo_client::{EditView, HttpTransport, SubmitEffect, TodoClient, graphql_endpoint};
use todo_schema::ErrorEnvelope;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use url::Url;

/// Raw answer to a request sent around the client library.
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) trace_header: Option<String>,
    pub(crate) envelope: ErrorEnvelope,
}

pub(crate) struct ClientServerWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) server: ServerHandle,
    pub(crate) base_url: Url,
    pub(crate) client: TodoClient<HttpTransport>,
    pub(crate) list_invalidations_at_load: usize,
    pub(crate) last_delete_applied: Option<bool>,
    pub(crate) last_effect: Option<SubmitEffect>,
    pub(crate) last_view: Option<EditView>,
    pub(crate) last_raw: Option<RawResponse>,
}

impl Drop for ClientServerWorld {
    fn drop(&mut self) {
        let server = self.server.clone();
        self.local.block_on(&self.runtime, async move {
            server.stop(true).await;
        });
    }
}

async fn spawn_todo_server() -> Result<(Url, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let service = Arc::new(TodoService::new(InMemoryTodoStore::new()));
    let http_data = web::Data::new(HttpState::from_service(service));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(route_not_found))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    let base_url = Url::parse(&format!("http://{addr}")).map_err(|err| err.to_string())?;
    Ok((base_url, handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

#[fixture]
pub(crate) fn world() -> Mutex<ClientServerWorld> {
    let (runtime, local) = create_runtime_and_local();
    let (base_url, server) = local
        .block_on(&runtime, async { spawn_todo_server().await })
        .expect("server should start");
    let endpoint = graphql_endpoint(&base_url).expect("endpoint URL");
    let transport =
        HttpTransport::new(endpoint, Duration::from_secs(5)).expect("reqwest client");

    Mutex::new(ClientServerWorld {
        runtime,
        local,
        server,
        base_url,
        client: TodoClient::new(transport),
        list_invalidations_at_load: 0,
        last_delete_applied: None,
        last_effect: None,
        last_view: None,
        last_raw: None,
    })
}
