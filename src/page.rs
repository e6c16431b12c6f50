//! Entry page state: resolves one symbol per render cycle and reacts to
//! version-selector changes.
//!
//! Every transition rebuilds the view model from scratch; a later switch
//! simply replaces the view built by an earlier one.

use crate::content::Library;
use crate::site::SiteConfig;
use crate::slug::{header_href, Route};
use crate::version::{resolve, switch_target, Resolution};
use crate::view::{build_view, RenderOptions, ViewModel};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Unresolved,
    Resolved,
    NotFoundAtVersion,
}

/// One API reference entry bound to a library, a version and a route.
#[derive(Debug)]
pub struct EntryPage<'a> {
    library: &'a Library,
    site: &'a SiteConfig,
    symbol: String,
    version: String,
    slug: Vec<String>,
    options: RenderOptions,
    state: EntryState,
    view: Option<ViewModel>,
}

impl<'a> EntryPage<'a> {
    /// `version` of `None` means the latest release.
    pub fn new(
        library: &'a Library,
        site: &'a SiteConfig,
        symbol: &str,
        version: Option<&str>,
        slug: Vec<String>,
        options: RenderOptions,
    ) -> Self {
        let version = version
            .unwrap_or_else(|| library.versions().latest())
            .to_string();
        Self {
            library,
            site,
            symbol: symbol.to_string(),
            version,
            slug,
            options,
            state: EntryState::Unresolved,
            view: None,
        }
    }

    /// Resolve the symbol at the current version and rebuild the view.
    pub fn load(&mut self) -> &ViewModel {
        let resolution = resolve(
            &self.symbol,
            self.library.versions(),
            &self.version,
            self.library.tables(),
        );
        let view = build_view(
            &self.symbol,
            &resolution,
            &self.version,
            &self.slug,
            self.site,
            &self.options,
        );
        self.state = match resolution {
            Resolution::Found(_) => EntryState::Resolved,
            Resolution::NotFound(_) => EntryState::NotFoundAtVersion,
        };
        self.view.insert(view)
    }

    /// Switch to `requested`, returning the route the page moves to.
    ///
    /// Selecting the version already shown changes nothing and returns `None`.
    pub fn select_version(&mut self, requested: &str) -> Option<Route> {
        if requested == self.version {
            debug!("version {} already selected", requested);
            return None;
        }

        let segments = switch_target(&self.slug, requested, self.library.versions().latest());
        let mut route = Route::new(segments);
        if let Some(descriptor) = self
            .library
            .table(&self.version)
            .and_then(|t| t.get(&self.symbol))
        {
            let qualified = format!("{}.{}", self.site.alias, descriptor.name);
            route = route.with_anchor(header_href(&qualified).to_lowercase());
        }

        self.version = requested.to_string();
        self.slug = route.segments.clone();
        self.load();
        Some(route)
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    /// View built by the last resolution, if any.
    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn slug(&self) -> &[String] {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"{
        "versions": ["SiS", "1.20.0", "1.25.0", "1.30.0"],
        "symbols": {
            "1.25.0": { "streamlit.button": { "name": "button", "signature": "streamlit.button(label)" } },
            "1.30.0": { "streamlit.button": { "name": "button", "signature": "streamlit.button(label, *, type=\"secondary\")" } }
        }
    }"#;

    fn library() -> Library {
        Library::from_json(CONTENT).unwrap()
    }

    fn page<'a>(lib: &'a Library, site: &'a SiteConfig, version: Option<&str>, slug: &[&str]) -> EntryPage<'a> {
        EntryPage::new(
            lib,
            site,
            "streamlit.button",
            version,
            slug.iter().map(|s| s.to_string()).collect(),
            RenderOptions::default(),
        )
    }

    #[test]
    fn starts_unresolved_and_defaults_to_latest() {
        let lib = library();
        let site = SiteConfig::default();
        let p = page(&lib, &site, None, &["button"]);
        assert_eq!(p.state(), EntryState::Unresolved);
        assert_eq!(p.version(), "1.30.0");
        assert!(p.view().is_none());
    }

    #[test]
    fn load_resolves() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, None, &["button"]);
        assert!(p.load().is_available());
        assert_eq!(p.state(), EntryState::Resolved);
    }

    #[test]
    fn load_at_missing_version() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, Some("1.20.0"), &["1.20.0", "button"]);
        assert!(!p.load().is_available());
        assert_eq!(p.state(), EntryState::NotFoundAtVersion);
    }

    #[test]
    fn switch_to_older_version() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, None, &["button"]);
        p.load();
        let route = p.select_version("1.20.0").unwrap();
        assert_eq!(route.segments, ["1.20.0", "button"]);
        assert_eq!(route.to_string(), "/1.20.0/button#stbutton");
        assert_eq!(p.slug(), ["1.20.0", "button"]);
        assert_eq!(p.state(), EntryState::NotFoundAtVersion);
    }

    #[test]
    fn switch_back_to_latest() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, Some("1.20.0"), &["1.20.0", "button"]);
        p.load();
        let route = p.select_version("1.30.0").unwrap();
        assert_eq!(route.segments, ["button"]);
        // Symbol was absent at 1.20.0, so no anchor is attached.
        assert_eq!(route.anchor, None);
        assert_eq!(p.state(), EntryState::Resolved);
    }

    #[test]
    fn reselecting_current_version_is_a_noop() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, Some("1.25.0"), &["1.25.0", "button"]);
        let before = p.load().clone();
        assert_eq!(p.select_version("1.25.0"), None);
        assert_eq!(p.slug(), ["1.25.0", "button"]);
        assert_eq!(p.view(), Some(&before));
    }

    #[test]
    fn last_switch_wins() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, None, &["button"]);
        p.load();
        p.select_version("1.20.0");
        let route = p.select_version("1.25.0").unwrap();
        assert_eq!(route.segments, ["1.25.0", "button"]);
        assert_eq!(p.version(), "1.25.0");
        let view = p.view().unwrap();
        assert_eq!(view.version, "1.25.0");
        assert_eq!(view.header.as_ref().unwrap().selector.current, "1.25.0");
        assert!(view.is_available());
    }

    #[test]
    fn switch_to_namespaced_version() {
        let lib = library();
        let site = SiteConfig::default();
        let mut p = page(&lib, &site, Some("1.25.0"), &["1.25.0", "button"]);
        p.load();
        let route = p.select_version("SiS").unwrap();
        assert_eq!(route.to_string(), "/SiS/button#stbutton");
        assert_eq!(p.state(), EntryState::NotFoundAtVersion);
        match &p.view().unwrap().body {
            crate::view::Body::NotAvailable(na) => assert!(na.namespaced),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn switch_anchor_matches_header_id() {
        let lib = Library::from_json(
            r#"{
                "versions": ["1.29.0", "1.30.0"],
                "symbols": {
                    "1.29.0": { "streamlit.Page": { "name": "Page", "signature": "streamlit.Page(page)", "is_class": true } },
                    "1.30.0": { "streamlit.Page": { "name": "Page", "signature": "streamlit.Page(page)", "is_class": true } }
                }
            }"#,
        )
        .unwrap();
        let site = SiteConfig::default();
        let mut p = EntryPage::new(
            &lib,
            &site,
            "streamlit.Page",
            None,
            vec!["Page".to_string()],
            RenderOptions::default(),
        );
        let header_id = p.load().header.as_ref().unwrap().anchor.clone();
        let route = p.select_version("1.29.0").unwrap();
        assert_eq!(route.to_string(), "/1.29.0/Page#stpage");
        assert_eq!(format!("#{}", route.anchor.unwrap()), header_id);
    }
}
