//! Infra Projects server
//!
//! Serves the project API under `/api` plus health probes.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ip_api::repository::{InMemoryProjectRepository, ProjectRepository};
use ip_api::AppState;
use ip_core::config::AppConfig;

mod health;

use health::{HealthChecker, HealthConfig, HealthState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting Infra Projects server"
    );

    let repo: Arc<dyn ProjectRepository> = Arc::new(InMemoryProjectRepository::new());
    let app = build_router(&config, repo);

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,ip_server=debug,ip_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

fn build_router(config: &AppConfig, repo: Arc<dyn ProjectRepository>) -> Router {
    let health_state = Arc::new(HealthState {
        health: HealthChecker::new(HealthConfig::default(), repo.clone()),
    });

    let health_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(health_state);

    Router::new()
        .merge(health_routes)
        .merge(ip_api::app(AppState::new(repo)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .layer(DefaultBodyLimit::max(config.server.max_body_size_bytes))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
