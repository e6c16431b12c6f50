//! View model — the fully resolved, render-ready form of one entry.

use crate::classify::classify;
use crate::model::SymbolDescriptor;
use crate::section::{self, Section, SectionContent};
use crate::site::SiteConfig;
use crate::slug::header_href;
use crate::version::{Resolution, VersionSelector};
use serde::Serialize;

/// Per-request presentation switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub hide_header: bool,
    /// Author-supplied deprecation notice (rich text)
    pub deprecation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    /// Lowercased `#` href of the title
    pub anchor: String,
    pub selector: VersionSelector,
}

/// Notice shown instead of the entry body when the symbol is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotAvailable {
    pub version: String,
    pub namespaced: bool,
    /// Rich text
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Body {
    Sections(Vec<Section>),
    NotAvailable(NotAvailable),
}

/// Tells presentation what needs post-processing once the view is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentHints {
    /// Code blocks awaiting syntax highlighting
    pub code_blocks: bool,
    /// Embedded frames awaiting a reload
    pub embeds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub symbol: String,
    pub version: String,
    pub header: Option<Header>,
    pub deprecation: Option<String>,
    pub description: Option<String>,
    pub body: Body,
    pub hints: ContentHints,
}

impl ViewModel {
    pub fn is_available(&self) -> bool {
        matches!(self.body, Body::Sections(_))
    }

    pub fn sections(&self) -> &[Section] {
        match &self.body {
            Body::Sections(sections) => sections,
            Body::NotAvailable(_) => &[],
        }
    }
}

/// Header title: the signature's callable path with the module aliased.
///
/// `streamlit.button(label)` → `st.button`
pub fn display_name(descriptor: &SymbolDescriptor, site: &SiteConfig) -> String {
    if site.is_component(&descriptor.name) {
        return format!("{}.{}", site.component_path, descriptor.name);
    }
    match descriptor.signature.as_deref() {
        Some(sig) => site.aliased(sig.split('(').next().unwrap_or_default()),
        None => String::new(),
    }
}

fn header_anchor(title: &str) -> String {
    format!("#{}", header_href(title)).to_lowercase()
}

fn not_available_message(version: &str, namespaced: bool, site: &SiteConfig) -> String {
    if namespaced {
        format!("<p>This method does not exist in {}.</p>", site.namespace_label)
    } else {
        format!(
            "<p>This method did not exist in version <code>{}</code> of {}.</p>",
            version, site.library_name
        )
    }
}

/// Build the view for `symbol` at `current` from its resolution.
pub fn build_view(
    symbol: &str,
    resolution: &Resolution<'_>,
    current: &str,
    slug: &[String],
    site: &SiteConfig,
    options: &RenderOptions,
) -> ViewModel {
    let selector = resolution.selector(current, site);

    let view = match resolution {
        Resolution::NotFound(nf) => {
            let title = site.aliased(symbol);
            ViewModel {
                symbol: symbol.to_string(),
                version: current.to_string(),
                header: Some(Header {
                    anchor: header_anchor(&title),
                    title,
                    selector,
                }),
                deprecation: None,
                description: None,
                body: Body::NotAvailable(NotAvailable {
                    version: nf.version.clone(),
                    namespaced: nf.namespaced,
                    message: not_available_message(&nf.version, nf.namespaced, site),
                }),
                hints: ContentHints::default(),
            }
        }
        Resolution::Found(found) => {
            let descriptor = found.descriptor;
            let sections = section::build(descriptor, classify(descriptor), slug, site);
            let (header, deprecation, description) = if options.hide_header {
                (None, None, None)
            } else {
                let title = display_name(descriptor, site);
                (
                    Some(Header {
                        anchor: header_anchor(&title),
                        title,
                        selector,
                    }),
                    options.deprecation.clone(),
                    descriptor.description().map(str::to_string),
                )
            };
            ViewModel {
                symbol: symbol.to_string(),
                version: current.to_string(),
                header,
                deprecation,
                description,
                body: Body::Sections(sections),
                hints: ContentHints::default(),
            }
        }
    };

    with_hints(view)
}

fn with_hints(mut view: ViewModel) -> ViewModel {
    let mut fragments: Vec<&str> = Vec::new();
    fragments.extend(view.description.as_deref());
    fragments.extend(view.deprecation.as_deref());
    for section in view.sections() {
        match &section.content {
            SectionContent::Text(text) => fragments.push(text),
            SectionContent::Rows(rows) => fragments.extend(rows.iter().map(|r| r.body.as_str())),
            SectionContent::Signature(_) => {}
        }
    }
    let hints = ContentHints {
        code_blocks: fragments.iter().any(|f| f.contains("<pre")),
        embeds: fragments.iter().any(|f| f.contains("<iframe")),
    };
    view.hints = hints;
    view
}
