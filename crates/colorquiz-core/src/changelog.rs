//! Release notes backing the "What's New" screen.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CHANGELOG: &str = include_str!("../changelog.json");

/// Changelog errors.
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("Changelog has no entries")]
    Empty,
    #[error("Invalid changelog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Changes shipped in one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub version: String,
    pub changes: Vec<String>,
}

/// Versions, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Changelog {
    entries: Vec<ChangelogEntry>,
}

impl Changelog {
    /// The changelog compiled into the crate.
    pub fn embedded() -> Result<Self, ChangelogError> {
        Self::from_json(EMBEDDED_CHANGELOG)
    }

    pub fn from_json(json: &str) -> Result<Self, ChangelogError> {
        let changelog: Changelog = serde_json::from_str(json)?;
        if changelog.entries.is_empty() {
            return Err(ChangelogError::Empty);
        }
        Ok(changelog)
    }

    pub fn entries(&self) -> &[ChangelogEntry] {
        &self.entries
    }

    /// Most recent version.
    pub fn latest(&self) -> Option<&ChangelogEntry> {
        self.entries.first()
    }
}
