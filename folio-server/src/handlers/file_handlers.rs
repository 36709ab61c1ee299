use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use folio_core::{FileAccessError, paths::resolve_file};

use crate::{errors::AppResult, infra::app_state::AppState};

/// Serve one file out of a project directory.
/// Path format: /api/project/{id}/file/{filename}
pub async fn get_project_file_handler(
    State(state): State<AppState>,
    Path((id, filename)): Path<(String, String)>,
) -> AppResult<Response> {
    info!("Project file request: id={}, file={}", id, filename);

    let projects_root = state.config().uploads.projects_dir();
    let path = resolve_file(&projects_root, &[&id, &filename]).await?;

    let data = tokio::fs::read(&path).await.map_err(|e| {
        warn!("failed to read project file {:?}: {}", path, e);
        FileAccessError::Io(e)
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(content_type_for(&filename)),
    );

    Ok((headers, data).into_response())
}

/// Serve the fixed profile image at `<uploads>/self.jpeg`.
pub async fn get_profile_image_handler(
    State(state): State<AppState>,
) -> AppResult<Response> {
    info!("Profile image request");

    let uploads_root = &state.config().uploads.root;
    let path = resolve_file(uploads_root, &["self.jpeg"]).await?;

    let data = tokio::fs::read(&path).await.map_err(|e| {
        warn!("failed to read profile image {:?}: {}", path, e);
        FileAccessError::Io(e)
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("image/jpeg"),
    );

    Ok((headers, data).into_response())
}

// Determine content type based on file extension
fn content_type_for(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
