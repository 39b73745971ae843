pub mod error;
pub mod health;
pub mod pages;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared handler state. The server itself is stateless between requests;
/// handlers only need the configuration they were started with.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
}

pub fn router(cfg: &Config) -> Router {
    let static_files = ServeDir::new(&cfg.static_files.directory)
        .append_index_html_on_directories(false)
        .not_found_service(pages::not_found.into_service());

    let state = AppState { cfg: cfg.clone() };

    Router::new()
        .route("/", get(pages::front_page))
        .route("/health", get(health::health_check))
        .route("/healthz", get(health::healthz))
        .nest_service(cfg.static_files.route.as_str(), static_files)
        .fallback(pages::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
