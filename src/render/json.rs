//! JSON renderer — the view model as-is, for custom presentation layers.

use crate::render::Renderer;
use crate::view::ViewModel;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &ViewModel) -> Result<String> {
        let mut out = serde_json::to_string_pretty(view)
            .with_context(|| format!("failed to serialize view of {}", view.symbol))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
