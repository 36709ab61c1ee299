use axum::{Router, routing::get};

use crate::{
    handlers::{catalog_handlers, file_handlers},
    infra::app_state::AppState,
};

/// Create the main API router with every public endpoint under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Tech endpoints
        .route("/tech", get(catalog_handlers::list_tech_handler))
        .route("/tech/{id}", get(catalog_handlers::get_tech_handler))
        // Project endpoints
        .route("/project", get(catalog_handlers::list_projects_handler))
        .route("/project/{id}", get(catalog_handlers::get_project_handler))
        .route(
            "/project/{id}/file/{filename}",
            get(file_handlers::get_project_file_handler),
        )
        // Profile image
        .route("/self", get(file_handlers::get_profile_image_handler))
}
