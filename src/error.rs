//! Errors raised while loading documentation content.
//!
//! Resolution and view building never fail; gaps in a descriptor degrade to
//! a valid view model instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("version list is empty")]
    NoVersions,

    #[error("duplicate version in version list: {0}")]
    DuplicateVersion(String),
}
