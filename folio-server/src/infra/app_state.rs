use std::{fmt, sync::Arc};

use folio_core::{ProjectRegistry, TechRegistry};

use crate::infra::config::Config;

/// Shared request-handling state. Cheap to clone: everything is behind an
/// `Arc`, and the registries themselves hold nothing but a root path.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub projects: Arc<ProjectRegistry>,
    pub tech: Arc<TechRegistry>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let projects = Arc::new(ProjectRegistry::new(config.uploads.projects_dir()));
        let tech = Arc::new(TechRegistry::new(config.uploads.tech_dir()));
        Self {
            config,
            projects,
            tech,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
