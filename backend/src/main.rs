//! Backend entry-point: loads settings, installs logging, and runs the server.

mod server;

use actix_web::{rt, web};
use backend::inbound::http::health::HealthState;
use ortho_config::OrthoConfig;
use server::{ServerSettings, create_server};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    let handle = server.handle();
    rt::spawn(async move {
        if rt::signal::ctrl_c().await.is_ok() {
            health_state.mark_unhealthy();
            info!("shutdown requested; draining connections");
            handle.stop(true).await;
        }
    });
    server.await
}
