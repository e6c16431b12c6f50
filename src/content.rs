//! Versioned symbol content as supplied by the content-loading layer.

use crate::error::ContentError;
use crate::model::SymbolDescriptor;
use crate::version::VersionList;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Symbol name (e.g. "streamlit.button") → descriptor, for one version.
pub type SymbolTable = BTreeMap<String, SymbolDescriptor>;

#[derive(Deserialize)]
struct RawLibrary {
    versions: Vec<String>,
    #[serde(default)]
    symbols: BTreeMap<String, SymbolTable>,
}

/// Every version of the documented library with its symbol table.
#[derive(Debug, Clone)]
pub struct Library {
    versions: VersionList,
    tables: BTreeMap<String, SymbolTable>,
}

impl Library {
    pub fn new(versions: VersionList, tables: BTreeMap<String, SymbolTable>) -> Self {
        for version in tables.keys() {
            if !versions.contains(version) {
                warn!("symbol table for unlisted version {}", version);
            }
        }
        Self { versions, tables }
    }

    /// Parse content of the form `{"versions": [..], "symbols": {version: {name: descriptor}}}`.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: RawLibrary = serde_json::from_str(text)?;
        let versions = VersionList::new(raw.versions)?;
        Ok(Self::new(versions, raw.symbols))
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn versions(&self) -> &VersionList {
        &self.versions
    }

    /// Symbol table bound to `version`, if content exists for it.
    pub fn table(&self, version: &str) -> Option<&SymbolTable> {
        self.tables.get(version)
    }

    pub fn tables(&self) -> &BTreeMap<String, SymbolTable> {
        &self.tables
    }
}
