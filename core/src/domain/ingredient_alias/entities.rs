use std::path::Path;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, ingredient_alias::builtin};

/// Surface forms an LLM may emit for one nutrition-database name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AliasEntry {
    pub variations: Vec<String>,
    pub canonical: String,
}

impl AliasEntry {
    pub fn new<I, S>(variations: I, canonical: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variations: variations.into_iter().map(Into::into).collect(),
            canonical: canonical.into(),
        }
    }

    /// Bidirectional substring containment against any variation.
    pub fn matches(&self, raw_name: &str) -> bool {
        if raw_name.is_empty() {
            return false;
        }

        self.variations
            .iter()
            .filter(|v| !v.is_empty())
            .any(|v| raw_name.contains(v.as_str()) || v.contains(raw_name))
    }
}

/// Ordered synonym table. The first entry matching by containment wins, so
/// entry order encodes curation priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn builtin() -> Self {
        Self::new(builtin::entries())
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::error!("Failed to parse alias table: {}", e);
            CoreError::Configuration(format!("invalid alias table: {}", e))
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read alias table {}: {}", path.display(), e);
            CoreError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let table = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "alias table loaded"
        );
        Ok(table)
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, raw_name: &str) -> Option<&AliasEntry> {
        if raw_name.is_empty() {
            return None;
        }

        self.entries.iter().find(|entry| entry.matches(raw_name))
    }

    /// Canonical database name for `raw_name`, or `raw_name` itself when no
    /// entry matches.
    pub fn normalize(&self, raw_name: &str) -> String {
        self.find(raw_name)
            .map(|entry| entry.canonical.clone())
            .unwrap_or_else(|| raw_name.to_string())
    }

    /// `[raw, canonical, ...variations]` of the matching entry, first
    /// occurrence kept.
    pub fn generate_search_keywords(&self, raw_name: &str) -> Vec<String> {
        let mut keywords = vec![raw_name.to_string()];

        if let Some(entry) = self.find(raw_name) {
            for keyword in std::iter::once(&entry.canonical).chain(entry.variations.iter()) {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }

        keywords
    }
}
