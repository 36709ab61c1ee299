use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use folio_model::Project;

const DEFAULT_DESCRIPTION: &str = "Project description placeholder.";

/// Scans the projects root and derives one [`Project`] per immediate
/// subdirectory.
///
/// Every call re-reads the filesystem; results reflect on-disk state at
/// the instant of the scan.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    root: PathBuf,
}

impl ProjectRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every project directory under the root.
    ///
    /// An absent root is an empty catalog, not an error. A failure while
    /// scanning one project degrades that entry to whatever was collected
    /// before the failure; the listing itself always succeeds.
    pub async fn list(&self) -> Vec<Project> {
        let mut projects = Vec::new();
        if !tokio::fs::try_exists(&self.root).await.unwrap_or(false) {
            return projects;
        }

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to list projects root {:?}: {}", self.root, e);
                return projects;
            }
        };

        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let is_dir = entry
                        .file_type()
                        .await
                        .map(|t| t.is_dir())
                        .unwrap_or(false);
                    if !is_dir {
                        continue;
                    }
                    let name = entry.file_name();
                    let Some(id) = name.to_str() else {
                        warn!("skipping non-UTF-8 project directory {:?}", name);
                        continue;
                    };
                    projects.push(self.scan_project(&entry.path(), id).await);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to enumerate projects root {:?}: {}", self.root, e);
                    break;
                }
            }
        }

        projects
    }

    /// Find a single project by exact id.
    ///
    /// Re-runs the full scan; there is no single-directory fast path.
    pub async fn get(&self, id: &str) -> Option<Project> {
        self.list().await.into_iter().find(|p| p.id == id)
    }

    async fn scan_project(&self, dir: &Path, id: &str) -> Project {
        let (title, description) = title_and_description(id);
        let mut files = BTreeMap::new();
        let mut logo = None;
        let mut cover = None;
        let mut pdf = None;

        match tokio::fs::read_dir(dir).await {
            Ok(mut entries) => loop {
                match entries.next_entry().await {
                    Ok(Some(entry)) => {
                        let is_file = entry
                            .file_type()
                            .await
                            .map(|t| t.is_file())
                            .unwrap_or(false);
                        if !is_file {
                            continue;
                        }
                        let file_name = entry.file_name();
                        let Some(name) = file_name.to_str() else {
                            continue;
                        };

                        let url = format!("/api/project/{id}/file/{name}");
                        files.insert(name.to_string(), url.clone());

                        // Classification by filename convention. Last match
                        // wins per slot; enumeration order is unspecified.
                        let lower = name.to_ascii_lowercase();
                        if lower.ends_with(".pdf") {
                            pdf = Some(url);
                        } else if lower == "logo.png" || lower == "logo.svg" {
                            logo = Some(url);
                        } else if lower == "landing.png" || lower == "cover.png" {
                            cover = Some(url);
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!("failed to enumerate project files in {:?}: {}", dir, e);
                        break;
                    }
                }
            },
            Err(e) => warn!("failed to list project files in {:?}: {}", dir, e),
        }

        Project {
            id: id.to_string(),
            title,
            description,
            logo,
            cover,
            pdf,
            files,
        }
    }
}

fn title_and_description(id: &str) -> (String, String) {
    if id.eq_ignore_ascii_case("eroots") {
        (id.to_string(), "Work in Progress".to_string())
    } else if id.eq_ignore_ascii_case("portfolio") {
        (
            "Portfolio Website".to_string(),
            "A modern, responsive portfolio site with a Svelte frontend and a Rust backend."
                .to_string(),
        )
    } else {
        (id.to_string(), DEFAULT_DESCRIPTION.to_string())
    }
}
