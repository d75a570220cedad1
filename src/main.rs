use dotenvy::dotenv;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;
mod handlers {
    pub mod landing_handlers;
}
mod controllers {
    pub mod submission_controller;
}
mod api {
    pub mod webhook;
}
mod utils {
    pub mod clipboard;
    pub mod image_utils;
}
mod pages {
    pub mod landing;
}
mod models {
    pub mod submission_models;
}
mod config;
mod error;
use api::webhook::{HttpWebhookClient, WebhookClient};
use config::AppConfig;
use handlers::landing_handlers;

pub struct AppState {
    config: AppConfig,
    webhook: Arc<dyn WebhookClient>,
}

pub fn app(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/", get(landing_handlers::landing_page).post(landing_handlers::submit_form))
        .route("/api/submit", post(landing_handlers::submit_api))
        .route("/api/health", get(landing_handlers::health_check));
    Router::new()
        .merge(public_routes)
        // thumbnails, qrcode.png and the framing reference live here
        .fallback_service(ServeDir::new(&state.config.static_dir))
        // a retry carries the kept image back as base64 next to any new upload
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes * 2))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gerador_fotos=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
    let config = AppConfig::from_env()?;
    tracing::info!("Forwarding submissions to {}", config.webhook_url);
    let webhook: Arc<dyn WebhookClient> = Arc::new(HttpWebhookClient::new(config.webhook_url.clone()));
    let port = config.port;
    let state = Arc::new(AppState { config, webhook });
    let app = app(state);
    use tokio::net::TcpListener;
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
