//! Safe resolution of request-supplied paths under an uploads root.

use std::path::{Path, PathBuf};

use crate::error::{FileAccessError, Result};

/// Resolve `segments` joined under `root`, refusing any path that ends up
/// outside the root.
///
/// Both the root and the joined path are canonicalized before comparison,
/// so `..` components and symlinks pointing out of the tree are rejected.
/// The resolved path must be a regular file; directories are not served.
pub async fn resolve_file(root: &Path, segments: &[&str]) -> Result<PathBuf> {
    let root = tokio::fs::canonicalize(root).await?;

    let mut joined = root.clone();
    for segment in segments {
        joined.push(segment);
    }

    let resolved = tokio::fs::canonicalize(&joined).await?;
    if !resolved.starts_with(&root) {
        return Err(FileAccessError::OutsideRoot);
    }

    let metadata = tokio::fs::metadata(&resolved).await?;
    if !metadata.is_file() {
        return Err(FileAccessError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not a regular file",
        )));
    }

    Ok(resolved)
}
