use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language label inferred from the file names found under a showcase
/// directory, first match in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Javascript,
    Unknown,
}

/// One technology showcase, derived from a single directory under the tech
/// root, with every source file's text content inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechShowcase {
    pub id: String,
    /// Always equal to `id`; kept as a separate field in the wire format.
    pub title: String,
    pub language: Language,
    pub description: String,
    /// Non-hidden regular files found anywhere under the showcase
    /// directory, keyed by bare filename. Same-named files in different
    /// subdirectories collapse to one entry; the last one visited wins.
    pub files: BTreeMap<String, String>,
}
