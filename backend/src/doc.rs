//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the operation endpoint, the health probes, and the
//! schema wrappers from `inbound::http::schemas`, which describe domain and
//! wire types without coupling them to utoipa.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, MutationPayloadSchema, OperationRequestSchema,
    OperationResponseSchema, TodoErrorKindSchema, TodoErrorSchema, TodoSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo service API",
        description = "Operation endpoint for todo reads and writes, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::operations::execute_operation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        OperationRequestSchema,
        OperationResponseSchema,
        MutationPayloadSchema,
        TodoSchema,
        TodoErrorSchema,
        TodoErrorKindSchema,
    )),
    tags(
        (name = "todos", description = "Todo reads and writes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
