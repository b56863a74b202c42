//! HTTP inbound adapter exposing the operation endpoint and health probes.

pub mod dto;
pub mod error;
pub mod health;
pub mod operations;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the todo operation endpoint and its JSON extractor settings.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(operations::json_config())
        .service(operations::execute_operation);
}
