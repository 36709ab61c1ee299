//! Library surface of the folio server.
//!
//! Exposes router assembly and configuration so integration tests can drive
//! the full application in-process.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;

use axum::{
    Json,
    extract::State,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::infra::config::Config;

/// Assemble the full application router: operational endpoints, the `/api`
/// surface, CORS, and request tracing.
pub fn create_app(state: AppState) -> axum::Router {
    let cors_layer = build_cors_layer(state.config());

    axum::Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .merge(routes::create_api_router())
        // Middleware layers in order (outer to inner):
        // 1. CORS (outermost)
        .layer(cors_layer)
        // 2. Tracing
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from configuration: allow-list when origins are
/// configured, any-origin otherwise.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    let methods: Vec<Method> = config
        .cors
        .allowed_methods
        .iter()
        .map(|m| {
            Method::from_bytes(m.as_bytes())
                .expect("CORS methods validated during config load")
        })
        .collect();
    let allow_methods = AllowMethods::list(methods);

    let allow_headers = if config.cors.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        let headers: Vec<HeaderName> = config
            .cors
            .allowed_headers
            .iter()
            .map(|h| {
                HeaderName::from_bytes(h.as_bytes())
                    .expect("CORS headers validated during config load")
            })
            .collect();
        AllowHeaders::list(headers)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers)
}

async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Health endpoint. Always 200: an empty uploads tree is a legal state, so
/// the checks are informational.
async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let uploads = &state.config().uploads;

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "projects_root": uploads.projects_dir().exists(),
            "tech_root": uploads.tech_dir().exists(),
            "profile_image": uploads.profile_image().exists(),
        }
    }))
}
