pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod submission;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::submission::hooks::{HookRegistry, LogHook};

pub fn build_app(config: Config) -> Router {
    // Build hook registry
    let mut hooks = HookRegistry::new();
    hooks.register(Arc::new(LogHook::new()));

    let static_root = PathBuf::from(&config.static_dir);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, hooks });

    Router::new()
        .merge(routes::form_routes())
        .route_service("/", ServeFile::new(static_root.join("index.html")))
        .nest_service("/js", ServeDir::new(static_root.join("js")))
        .route("/health", axum::routing::get(health))
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
