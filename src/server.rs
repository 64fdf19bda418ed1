use axum::{Router, routing::{get, post}};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::client::{ClientConfig, GenerationClient};
use crate::config::ServeArgs;
use crate::handlers::{generate_handler, health_handler, metrics_handler};
use crate::relay::Relay;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Mock mode unless an upstream model is configured
pub fn state_from_args(args: &ServeArgs) -> AppState {
    match &args.upstream_url {
        Some(url) => {
            let mut config = ClientConfig::openai(url.clone(), args.api_key.clone(), args.model.clone());
            if let Some(path) = &args.upstream_path {
                config.path = path.clone();
            }
            let relay = Relay::new(GenerationClient::new(config), Duration::from_secs(args.cache_ttl));
            AppState::relaying(relay)
        }
        None => AppState::mock(),
    }
}

pub async fn serve(args: ServeArgs) -> std::io::Result<()> {
    let state = Arc::new(state_from_args(&args));
    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    match &args.upstream_url {
        Some(url) => {
            info!("Relaying to {} (model {})", url, args.model);
            info!("Cache TTL: {} seconds", args.cache_ttl);
        }
        None => info!("No upstream configured, serving mock results"),
    }

    axum::serve(listener, router(state)).await
}
