use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use folio_model::{Project, TechShowcase};

use crate::{
    errors::{AppError, AppResult},
    infra::app_state::AppState,
};

/// List every tech showcase discovered under the tech root.
///
/// Always 200: scan failures degrade to partial entries, never to an error
/// response.
pub async fn list_tech_handler(
    State(state): State<AppState>,
) -> Json<Vec<TechShowcase>> {
    info!("Listing tech showcases");
    Json(state.tech.list().await)
}

pub async fn get_tech_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TechShowcase>> {
    info!("Getting tech showcase: {}", id);
    state
        .tech
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("tech showcase not found: {id}")))
}

/// List every project discovered under the projects root. Always 200.
pub async fn list_projects_handler(
    State(state): State<AppState>,
) -> Json<Vec<Project>> {
    info!("Listing projects");
    Json(state.projects.list().await)
}

pub async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    info!("Getting project: {}", id);
    state
        .projects
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("project not found: {id}")))
}
