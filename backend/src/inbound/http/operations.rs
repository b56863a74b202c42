//! Operation endpoint: a single GraphQL-style route for every read and write.
//!
//! ```text
//! POST /graphql {"operationName":"todos","variables":{}}
//! POST /graphql {"operationName":"createTodo","variables":{"name":"Buy milk"}}
//! ```
//!
//! Validation failures are data: a rejected write still answers 200 with the
//! errors inside its mutation payload. Only requests that cannot be executed
//! at all (malformed JSON, unknown operation, wrong variables, store fault)
//! answer with the transport error envelope.

use actix_web::{post, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use todo_schema::{
    CreateTodoVariables, DeleteTodoVariables, OperationName, OperationRequest, OperationResponse,
    TodoVariables, UnknownOperation, UpdateTodoVariables,
};
use tracing::debug;

use crate::domain::ports::{CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest};
use crate::domain::{Error, TodoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{mutation_payload, todo_dto};
use crate::inbound::http::schemas::{ErrorSchema, OperationRequestSchema, OperationResponseSchema};
use crate::inbound::http::state::HttpState;

/// JSON extractor configuration that reports malformed bodies with the
/// transport error envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed operation request: {err}"))
            .with_details(json!({ "code": "malformed_body" }))
            .into()
    })
}

fn unknown_operation_error(err: UnknownOperation) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "code": "unknown_operation",
        "operationName": err.name,
    }))
}

fn decode_variables<T>(operation: OperationName, variables: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_value(variables).map_err(|err| {
        Error::invalid_request(format!("invalid variables for {operation}: {err}")).with_details(
            json!({
                "code": "invalid_variables",
                "operationName": operation.as_str(),
            }),
        )
    })
}

fn encode<T: Serialize>(operation: OperationName, result: T) -> Result<Value, Error> {
    serde_json::to_value(result)
        .map_err(|err| Error::internal(format!("failed to encode {operation} result: {err}")))
}

/// Execute one named operation.
#[utoipa::path(
    post,
    path = "/graphql",
    request_body = OperationRequestSchema,
    responses(
        (status = 200, description = "Operation result, including rejected writes", body = OperationResponseSchema),
        (status = 400, description = "Malformed request, unknown operation, or invalid variables", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "executeOperation"
)]
#[post("/graphql")]
pub async fn execute_operation(
    state: web::Data<HttpState>,
    payload: web::Json<OperationRequest>,
) -> ApiResult<web::Json<OperationResponse>> {
    let OperationRequest {
        operation_name,
        variables,
    } = payload.into_inner();
    let operation: OperationName = operation_name.parse().map_err(unknown_operation_error)?;
    debug!(%operation, "executing operation");

    let result = match operation {
        OperationName::Todos => {
            let todos = state.query.list_todos().await?;
            encode(operation, todos.into_iter().map(todo_dto).collect::<Vec<_>>())?
        }
        OperationName::Todo => {
            let TodoVariables { id } = decode_variables(operation, variables)?;
            let found = state.query.find_todo(&TodoId::new(id)).await?;
            encode(operation, found.map(todo_dto))?
        }
        OperationName::CreateTodo => {
            let CreateTodoVariables { name } = decode_variables(operation, variables)?;
            let outcome = state
                .command
                .create_todo(CreateTodoRequest { name })
                .await?;
            encode(
                operation,
                mutation_payload(outcome, |todo| Some(todo_dto(todo))),
            )?
        }
        OperationName::UpdateTodo => {
            let UpdateTodoVariables { id, name } = decode_variables(operation, variables)?;
            let outcome = state
                .command
                .update_todo(UpdateTodoRequest {
                    id: TodoId::new(id),
                    name,
                })
                .await?;
            encode(
                operation,
                mutation_payload(outcome, |todo| Some(todo_dto(todo))),
            )?
        }
        OperationName::DeleteTodo => {
            let DeleteTodoVariables { id } = decode_variables(operation, variables)?;
            let outcome = state
                .command
                .delete_todo(DeleteTodoRequest {
                    id: TodoId::new(id),
                })
                .await?;
            encode(operation, mutation_payload(outcome, |()| None))?
        }
    };

    Ok(web::Json(OperationResponse::new(operation, result)))
}
