//! Route definitions and router construction.

use axum::Json;
use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::get;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// JSON routes, nested under `/api` by [`create_router`].
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Proxy to the telemetry service
        .route("/iss/last", get(handlers::iss::last))
        .route("/iss/trend", get(handlers::iss::trend))
        // Feeds
        .route("/jwst/feed", get(handlers::jwst::feed))
        .route("/astro/events", get(handlers::astro::events))
        .fallback(api_not_found)
}

/// Create the main Axum router.
///
/// HTML pages live at the top level, JSON under `/api`. Unknown `/api`
/// paths answer with a JSON 404, everything else with the HTML 404 page.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{slug}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(handlers::dashboard::root))
        .route("/dashboard", get(handlers::dashboard::index))
        .route("/iss", get(handlers::iss::page))
        .route("/osdr", get(handlers::osdr::page))
        .route("/page/{slug}", get(handlers::cms::page))
        .route("/health", get(health_check))
        .nest("/api", api_routes().layer(cors))
        .fallback(handlers::cms::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "now": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(format!("no endpoint at {}", uri.path()))
}
