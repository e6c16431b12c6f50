//! MDX renderer for docs sites.
//!
//! Rich-text fragments are author-trusted HTML and pass through untouched;
//! MDX renders them inline.

use crate::render::Renderer;
use crate::section::{Row, Section, SectionContent};
use crate::version::SelectorStyle;
use crate::view::{Body, Header, ViewModel};
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, view: &ViewModel) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        if let Some(ref header) = view.header {
            render_header(&mut lines, header);
        }

        if let Some(ref notice) = view.deprecation {
            render_admonition(&mut lines, "danger Deprecated", notice);
        }

        if let Some(ref desc) = view.description {
            lines.push(desc.clone());
            lines.push(String::new());
        }

        match &view.body {
            Body::Sections(sections) => {
                for section in sections {
                    render_section(&mut lines, section);
                }
            }
            Body::NotAvailable(na) => render_admonition(&mut lines, "warning", &na.message),
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "mdx"
    }
}

fn render_header(lines: &mut Vec<String>, header: &Header) {
    let id = header.anchor.trim_start_matches('#');
    lines.push(format!("## {} {{#{}}}\n", header.title, id));

    let current = header
        .selector
        .options
        .iter()
        .find(|o| o.value == header.selector.current)
        .map(|o| o.label.as_str())
        .unwrap_or(header.selector.current.as_str());
    let badge = match header.selector.style {
        SelectorStyle::Current => String::new(),
        SelectorStyle::Outdated => " `outdated`".to_string(),
        SelectorStyle::Namespaced => " `platform`".to_string(),
    };
    lines.push(format!("> **{}**{}", current, badge));

    let others: Vec<String> = header
        .selector
        .options
        .iter()
        .filter(|o| o.value != header.selector.current)
        .map(|o| format!("`{}`", o.value))
        .collect();
    if !others.is_empty() {
        lines.push(">".to_string());
        lines.push(format!("> Other versions: {}", others.join(" ")));
    }
    lines.push(String::new());
}

fn render_admonition(lines: &mut Vec<String>, kind: &str, body: &str) {
    lines.push(format!(":::{}\n", kind));
    lines.push(body.to_string());
    lines.push("\n:::".to_string());
    lines.push(String::new());
}

fn render_section(lines: &mut Vec<String>, section: &Section) {
    match &section.source {
        Some(source) => lines.push(format!(
            "#### {} [[source]]({} \"{}\")\n",
            section.title, source.href, source.title
        )),
        None => lines.push(format!("#### {}\n", section.title)),
    }

    match &section.content {
        SectionContent::Signature(sig) => {
            lines.push("```python".to_string());
            lines.push(sig.clone());
            lines.push("```".to_string());
        }
        SectionContent::Text(text) => lines.push(text.clone()),
        SectionContent::Rows(rows) => {
            for row in rows {
                lines.push(render_row(row));
            }
        }
    }
    lines.push(String::new());
}

/// Title as a list item, body indented beneath it.
fn render_row(row: &Row) -> String {
    let body = row.body.trim().replace('\n', "\n  ");
    format!("* {}\n\n  {}\n", row.title.trim(), body)
}
