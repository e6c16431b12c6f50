//! Version resolution: which symbol exists at which version, and where a
//! version switch navigates to.
//!
//! Two version families exist side by side. Numeric versions ("1.25.0") form
//! the main release line; namespaced versions ("SiS", "SiS.3.0") form an
//! independent platform line. Family membership is decided from the shape of
//! the string alone.

use crate::content::SymbolTable;
use crate::error::ContentError;
use crate::model::SymbolDescriptor;
use crate::site::SiteConfig;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Prefix shared by every namespaced version.
pub const NAMESPACE_PREFIX: &str = "SiS";

static RE_NUMERIC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]+$").unwrap());

static RE_NAMESPACED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SiS[\d.]*$").unwrap());

/// "1.25.0", "1.9"
pub fn is_numeric_version(text: &str) -> bool {
    RE_NUMERIC_VERSION.is_match(text)
}

/// "SiS", "SiS.3.0"
pub fn is_namespaced_version(text: &str) -> bool {
    RE_NAMESPACED_VERSION.is_match(text)
}

/// True when a slug segment names a version rather than a page.
pub fn is_version_token(segment: &str) -> bool {
    is_numeric_version(segment) || is_namespaced_version(segment)
}

/// Ordered version identifiers, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList(Vec<String>);

impl VersionList {
    pub fn new(versions: Vec<String>) -> Result<Self, ContentError> {
        if versions.is_empty() {
            return Err(ContentError::NoVersions);
        }
        let mut seen = HashSet::new();
        for v in &versions {
            if !seen.insert(v.as_str()) {
                return Err(ContentError::DuplicateVersion(v.clone()));
            }
        }
        Ok(Self(versions))
    }

    /// The current release; canonical (unversioned) URLs point here.
    pub fn latest(&self) -> &str {
        // Construction guarantees at least one entry.
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, version: &str) -> bool {
        self.0.iter().any(|v| v == version)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Display order for the selector.
    pub fn newest_first(&self) -> Vec<String> {
        self.0.iter().rev().cloned().collect()
    }

    /// Newest version sharing `version`'s family.
    pub fn latest_in_family(&self, version: &str) -> Option<&str> {
        let namespaced = is_namespaced_version(version);
        self.iter()
            .rev()
            .find(|v| is_namespaced_version(v) == namespaced)
    }

    pub fn is_latest_in_family(&self, version: &str) -> bool {
        self.latest_in_family(version) == Some(version)
    }
}

/// A symbol found at the requested version.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSymbol<'a> {
    pub descriptor: &'a SymbolDescriptor,
    /// Newest first
    pub versions: Vec<String>,
    pub is_latest_in_family: bool,
}

/// A symbol absent from the requested version's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub version: String,
    /// Selects the platform-line wording of the notice
    pub namespaced: bool,
    /// Newest first
    pub versions: Vec<String>,
    pub is_latest_in_family: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Found(ResolvedSymbol<'a>),
    NotFound(NotFound),
}

impl Resolution<'_> {
    /// Selector state for `current`, from the metadata gathered while resolving.
    pub fn selector(&self, current: &str, site: &SiteConfig) -> VersionSelector {
        let (versions, is_latest_in_family) = match self {
            Resolution::Found(found) => (&found.versions, found.is_latest_in_family),
            Resolution::NotFound(nf) => (&nf.versions, nf.is_latest_in_family),
        };
        build_selector(versions, current, is_latest_in_family, site)
    }
}

/// Look `symbol` up in the table bound to `current`.
///
/// A version without a table, or a table without the symbol, both yield
/// [`Resolution::NotFound`].
pub fn resolve<'a>(
    symbol: &str,
    versions: &VersionList,
    current: &str,
    tables: &'a BTreeMap<String, SymbolTable>,
) -> Resolution<'a> {
    match tables.get(current).and_then(|table| table.get(symbol)) {
        Some(descriptor) => Resolution::Found(ResolvedSymbol {
            descriptor,
            versions: versions.newest_first(),
            is_latest_in_family: versions.is_latest_in_family(current),
        }),
        None => Resolution::NotFound(NotFound {
            version: current.to_string(),
            namespaced: is_namespaced_version(current),
            versions: versions.newest_first(),
            is_latest_in_family: versions.is_latest_in_family(current),
        }),
    }
}

/// Slug segments after switching to `requested`.
///
/// The latest version carries no version segment; any other version is made
/// the first segment, replacing an existing version segment if there is one.
/// `slug` itself is never modified.
pub fn switch_target(slug: &[String], requested: &str, latest: &str) -> Vec<String> {
    let mut target = slug.to_vec();
    let leading_version = target.first().is_some_and(|s| is_version_token(s));

    if requested == latest {
        if leading_version {
            target.remove(0);
        }
    } else if leading_version {
        target[0] = requested.to_string();
    } else {
        target.insert(0, requested.to_string());
    }
    target
}

// -- Version selector ---------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorStyle {
    Current,
    Outdated,
    Namespaced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    pub value: String,
    pub label: String,
}

/// State of the version drop-down rendered beside a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSelector {
    pub current: String,
    /// Newest first
    pub options: Vec<VersionOption>,
    pub style: SelectorStyle,
    pub is_latest_in_family: bool,
}

/// Reader-facing name of a version.
pub fn version_label(version: &str, site: &SiteConfig) -> String {
    if version == NAMESPACE_PREFIX {
        site.namespace_label.clone()
    } else if let Some(rest) = version.strip_prefix("SiS.") {
        format!("{} {}", site.namespace_label, rest)
    } else {
        format!("Version {}", version)
    }
}

/// Selector over `newest_first` versions with `current` chosen.
pub fn build_selector(
    newest_first: &[String],
    current: &str,
    is_latest_in_family: bool,
    site: &SiteConfig,
) -> VersionSelector {
    let style = if is_namespaced_version(current) {
        SelectorStyle::Namespaced
    } else if newest_first.first().map(String::as_str) != Some(current) {
        SelectorStyle::Outdated
    } else {
        SelectorStyle::Current
    };

    VersionSelector {
        current: current.to_string(),
        options: newest_first
            .iter()
            .map(|value| VersionOption {
                label: version_label(value, site),
                value: value.clone(),
            })
            .collect(),
        style,
        is_latest_in_family,
    }
}
