//! HTML renderer — standalone HTML page with one table per entry.

use crate::render::Renderer;
use crate::section::{Section, SectionContent};
use crate::version::{SelectorStyle, VersionSelector};
use crate::view::{Body, ViewModel};
use anyhow::Result;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, view: &ViewModel) -> Result<String> {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        let title = view
            .header
            .as_ref()
            .map(|h| h.title.as_str())
            .unwrap_or(view.symbol.as_str());
        out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 56em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("table.full-width { width: 100%; border-collapse: collapse; margin-bottom: 1.5em; }\n");
        out.push_str("th, td { text-align: left; vertical-align: top; padding: 0.4em 0.6em; border-bottom: 1px solid #e6e6e6; }\n");
        out.push_str(".code { font-family: ui-monospace, monospace; }\n");
        out.push_str(".bold { font-weight: bold; }\n");
        out.push_str(".italic { font-style: italic; }\n");
        out.push_str(".old-version select { background: #fff4e5; }\n");
        out.push_str(".sis-version select { background: #e8f4fd; }\n");
        out.push_str(".deprecation, .warning { padding: 0.5em 1em; border-left: 4px solid #d9534f; background: #fbeaea; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");
        out.push_str(&format!(
            "<section data-symbol=\"{}\" data-version=\"{}\">\n",
            html_escape(&view.symbol),
            html_escape(&view.version)
        ));

        if let Some(ref header) = view.header {
            let id = header.anchor.trim_start_matches('#');
            out.push_str(&format!(
                "<h2 id=\"{}\"><a aria-hidden=\"true\" tabindex=\"-1\" href=\"{}\">#</a> {}</h2>\n",
                html_escape(id),
                html_escape(&header.anchor),
                html_escape(&header.title)
            ));
            out.push_str(&render_selector(&header.selector));
        }

        if let Some(ref notice) = view.deprecation {
            out.push_str(&format!("<div class=\"deprecation\">{}</div>\n", notice));
        }

        if let Some(ref desc) = view.description {
            out.push_str(&format!("<div class=\"code-desc\">{}</div>\n", desc));
        }

        match &view.body {
            Body::Sections(sections) => out.push_str(&render_table(sections)),
            Body::NotAvailable(na) => {
                out.push_str(&format!("<div class=\"warning\">{}</div>\n", na.message))
            }
        }

        out.push_str("</section>\n</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_selector(selector: &VersionSelector) -> String {
    let class = match selector.style {
        SelectorStyle::Current => "version-select",
        SelectorStyle::Outdated => "version-select old-version",
        SelectorStyle::Namespaced => "version-select sis-version",
    };
    let mut out = format!("<form class=\"{}\">\n<select>\n", class);
    for option in &selector.options {
        let selected = if option.value == selector.current {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "  <option value=\"{}\"{}>{}</option>\n",
            html_escape(&option.value),
            selected,
            html_escape(&option.label)
        ));
    }
    out.push_str("</select>\n</form>\n");
    out
}

fn render_table(sections: &[Section]) -> String {
    let mut out = String::from("<table class=\"full-width\">\n");
    for section in sections {
        out.push_str("<tr><th colspan=\"2\">");
        out.push_str(&html_escape(&section.title));
        if let Some(ref source) = section.source {
            out.push_str(&format!(
                " <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\">[source]</a>",
                html_escape(&source.href),
                html_escape(&source.title)
            ));
        }
        out.push_str("</th></tr>\n");

        match &section.content {
            SectionContent::Signature(sig) => out.push_str(&format!(
                "<tr><td colspan=\"2\"><p class=\"code\">{}</p></td></tr>\n",
                html_escape(sig)
            )),
            SectionContent::Text(text) => {
                out.push_str(&format!("<tr><td colspan=\"2\">{}</td></tr>\n", text))
            }
            SectionContent::Rows(rows) => {
                for row in rows {
                    out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", row.title, row.body));
                }
            }
        }
    }
    out.push_str("</table>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionOption;

    #[test]
    fn escape() {
        assert_eq!(html_escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn selector_marks_current_and_style() {
        let selector = VersionSelector {
            current: "1.20.0".into(),
            options: vec![
                VersionOption {
                    value: "1.30.0".into(),
                    label: "Version 1.30.0".into(),
                },
                VersionOption {
                    value: "1.20.0".into(),
                    label: "Version 1.20.0".into(),
                },
            ],
            style: SelectorStyle::Outdated,
            is_latest_in_family: false,
        };
        let html = render_selector(&selector);
        assert!(html.contains("class=\"version-select old-version\""));
        assert!(html.contains("<option value=\"1.20.0\" selected>Version 1.20.0</option>"));
        assert!(html.contains("<option value=\"1.30.0\">Version 1.30.0</option>"));
    }
}
