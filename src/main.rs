use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use audit_autofill::autofill::AutoFillEngine;
use audit_autofill::handlers::{app, AppState};
use audit_autofill::{config, is_production};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECURITY_JWT_SECRET, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!("Starting audit auto-fill API in {:?} mode", config.environment);

    if is_production!() && config.security.jwt_secret.is_empty() {
        anyhow::bail!("SECURITY_JWT_SECRET must be set in production");
    }

    let engine = Arc::new(AutoFillEngine::new(&config.autofill));
    tracing::info!("Auto-fill intercepting operations in namespace '{}'", engine.namespace());

    let router = app(AppState::new(engine))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
