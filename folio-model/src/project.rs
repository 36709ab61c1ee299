use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One portfolio project, derived from a single directory under the
/// projects root.
///
/// The `id` is the directory name and doubles as the lookup key; there is
/// no other identity. Optional asset slots are `None` when no file in the
/// directory matched the corresponding naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Download URL of `logo.png`/`logo.svg`, if present.
    pub logo: Option<String>,
    /// Download URL of `landing.png`/`cover.png`, if present.
    pub cover: Option<String>,
    /// Download URL of the last `*.pdf` encountered, if any.
    pub pdf: Option<String>,
    /// Every regular file in the project directory, filename to download URL.
    pub files: BTreeMap<String, String>,
}
