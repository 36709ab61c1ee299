use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

use tracing::warn;

use folio_model::{Language, TechShowcase};

const DEFAULT_DESCRIPTION: &str = "No description available.";

const SIMULATOR_DESCRIPTION: &str = "A high-fidelity Python simulation of a 2005 VW Phaeton W12 LWB. This project models the complex interaction between the 6.0L W12 engine, ZF 5HP24A automatic transmission, and the vehicle's chassis dynamics. It includes a real-time thermodynamic system, fluid dynamics for the torque converter, and a fully functional digital dashboard interface built with Tkinter.";

/// Scans the tech root and derives one [`TechShowcase`] per immediate
/// subdirectory, inlining the text content of every file found beneath it.
///
/// Like [`ProjectRegistry`](crate::registry::ProjectRegistry), every call
/// re-reads the filesystem.
#[derive(Debug, Clone)]
pub struct TechRegistry {
    root: PathBuf,
}

impl TechRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every showcase directory under the root.
    ///
    /// An absent root is an empty catalog. Unreadable files are skipped;
    /// the listing itself always succeeds.
    pub async fn list(&self) -> Vec<TechShowcase> {
        let mut showcases = Vec::new();
        if !tokio::fs::try_exists(&self.root).await.unwrap_or(false) {
            return showcases;
        }

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to list tech root {:?}: {}", self.root, e);
                return showcases;
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
                        warn!("skipping non-UTF-8 showcase directory {:?}", name);
                        continue;
                    };
                    showcases.push(scan_showcase(&entry.path(), id).await);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to enumerate tech root {:?}: {}", self.root, e);
                    break;
                }
            }
        }

        showcases
    }

    /// Find a single showcase by exact id. Re-runs the full scan.
    pub async fn get(&self, id: &str) -> Option<TechShowcase> {
        self.list().await.into_iter().find(|t| t.id == id)
    }
}

async fn scan_showcase(dir: &Path, id: &str) -> TechShowcase {
    let files = collect_files(dir).await;
    let language = infer_language(files.keys());

    let lower_id = id.to_ascii_lowercase();
    let description = if files.contains_key("simulator.py")
        || lower_id == "dashboardsim"
        || lower_id.contains("sim")
    {
        SIMULATOR_DESCRIPTION
    } else {
        DEFAULT_DESCRIPTION
    };

    TechShowcase {
        id: id.to_string(),
        title: id.to_string(),
        language,
        description: description.to_string(),
        files,
    }
}

/// Breadth-first walk collecting every non-hidden regular file under `dir`.
///
/// Keys are bare filenames: same-named files in different subdirectories
/// collapse to one entry, last visit wins. Unreadable and non-UTF-8 files
/// are logged and omitted.
async fn collect_files(dir: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    let mut queue = VecDeque::from([dir.to_path_buf()]);

    while let Some(current) = queue.pop_front() {
        let mut entries = match tokio::fs::read_dir(&current).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to walk showcase directory {:?}: {}", current, e);
                continue;
            }
        };

        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    let file_type = match entry.file_type().await {
                        Ok(t) => t,
                        Err(e) => {
                            warn!("failed to stat {:?}: {}", path, e);
                            continue;
                        }
                    };
                    if file_type.is_dir() {
                        queue.push_back(path);
                        continue;
                    }
                    if !file_type.is_file() {
                        continue;
                    }

                    let file_name = entry.file_name();
                    let Some(name) = file_name.to_str() else {
                        continue;
                    };
                    if name.starts_with('.') {
                        continue;
                    }

                    match tokio::fs::read_to_string(&path).await {
                        Ok(content) => {
                            files.insert(name.to_string(), content);
                        }
                        Err(e) => warn!("error reading file {:?}: {}", path, e),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to enumerate {:?}: {}", current, e);
                    break;
                }
            }
        }
    }

    files
}

/// First-match priority: any `.py` beats any `.java` beats any `.js`.
fn infer_language<'a>(names: impl IntoIterator<Item = &'a String>) -> Language {
    let mut has_java = false;
    let mut has_js = false;
    for name in names {
        if name.ends_with(".py") {
            return Language::Python;
        }
        has_java |= name.ends_with(".java");
        has_js |= name.ends_with(".js");
    }
    if has_java {
        Language::Java
    } else if has_js {
        Language::Javascript
    } else {
        Language::Unknown
    }
}
