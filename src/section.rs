//! Section assembly — the ordered body of one API reference entry.
//!
//! Order is fixed: lead (signature), Parameters, Keyword-only parameters,
//! Methods, Returns, Attributes, then free-text footers. Sections without
//! rows are left out entirely.

use crate::classify::Classified;
use crate::model::{description_or_placeholder, MethodDescriptor, PropertyDescriptor, SymbolDescriptor};
use crate::site::SiteConfig;
use crate::slug::anchor_slug;
use serde::Serialize;
use tracing::debug;

/// One table row; both fragments are author-trusted HTML rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SectionContent {
    /// Raw call signature
    Signature(String),
    /// Rich text
    Text(String),
    Rows(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub href: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLink>,
    pub content: SectionContent,
}

impl Section {
    fn rows(title: &str, rows: Vec<Row>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            source: None,
            content: SectionContent::Rows(rows),
        })
    }

    pub fn row_count(&self) -> usize {
        match &self.content {
            SectionContent::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}

pub const CLASS_LEAD: &str = "Class description";
pub const FUNCTION_LEAD: &str = "Function signature";

/// Build every section of an entry from its classified descriptor.
pub fn build(
    descriptor: &SymbolDescriptor,
    classified: Classified,
    slug: &[String],
    site: &SiteConfig,
) -> Vec<Section> {
    let page = slug.join("/");
    let mut sections = vec![lead_section(descriptor, site)];

    let methods = descriptor
        .methods
        .iter()
        .map(|m| method_row(site, &descriptor.name, m, &page))
        .collect();

    let mut attributes = classified.properties_from_args;
    attributes.extend(
        descriptor
            .properties
            .iter()
            .map(|p| property_row(site, &descriptor.name, p, &page)),
    );

    let returns = descriptor
        .returns
        .iter()
        .map(|r| Row {
            title: format!("<p><span class='italic code'>({})</span></p>", r.type_name),
            body: description_or_placeholder(r.description.as_deref()),
        })
        .collect();

    sections.extend(
        [
            Section::rows("Parameters", classified.args),
            Section::rows("Keyword-only parameters", classified.kwargs),
            Section::rows("Methods", methods),
            Section::rows("Returns", returns),
            Section::rows("Attributes", attributes),
        ]
        .into_iter()
        .flatten(),
    );

    for (title, body) in descriptor.footers() {
        sections.push(Section {
            title: title.to_string(),
            source: None,
            content: SectionContent::Text(body.to_string()),
        });
    }

    sections
}

fn lead_section(descriptor: &SymbolDescriptor, site: &SiteConfig) -> Section {
    let title = if descriptor.is_class {
        CLASS_LEAD
    } else {
        FUNCTION_LEAD
    };
    Section {
        title: title.to_string(),
        source: descriptor.source.as_ref().map(|href| SourceLink {
            href: href.clone(),
            title: format!(
                "View {}.{} source code on GitHub",
                site.alias, descriptor.name
            ),
        }),
        content: SectionContent::Signature(descriptor.signature.clone().unwrap_or_default()),
    }
}

/// Anchor of a method or property on its owner's page.
pub fn member_anchor(site: &SiteConfig, owner: &str, member: &str) -> String {
    let qualified = format!("{}.{}", owner, member).to_lowercase();
    anchor_slug(&site.aliased(&qualified))
}

/// Text between the outermost parentheses of a signature.
pub fn signature_params(signature: &str) -> Option<&str> {
    let open = signature.find('(')?;
    let close = signature.rfind(')')?;
    (close > open).then(|| &signature[open + 1..close])
}

fn method_row(site: &SiteConfig, owner: &str, method: &MethodDescriptor, page: &str) -> Row {
    let anchor = member_anchor(site, owner, &method.name);
    let params = match method.signature.as_deref() {
        Some(sig) => signature_params(sig).unwrap_or_else(|| {
            debug!("method {}.{} has malformed signature: {}", owner, method.name, sig);
            ""
        }),
        None => "",
    };
    Row {
        title: format!(
            "<p><a href=\"/{}#{}\"><span class='bold'>{}</span></a><span class='italic code'>({})</span></p>",
            page, anchor, method.name, params
        ),
        body: description_or_placeholder(method.description.as_deref()),
    }
}

fn property_row(site: &SiteConfig, owner: &str, property: &PropertyDescriptor, page: &str) -> Row {
    let anchor = member_anchor(site, owner, &property.name);
    Row {
        title: format!(
            "<p><a href=\"/{}#{}\"><span class='bold'>{}</span></a></p>",
            page, anchor, property.name
        ),
        body: description_or_placeholder(property.description.as_deref()),
    }
}
