//! Data model for pre-parsed symbol descriptors — format-agnostic.
//!
//! Descriptors arrive already parsed from docstrings; nothing here validates
//! them against the documented library.

use serde::{Deserialize, Serialize};

/// A documented function or class at one version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolDescriptor {
    /// Short name, e.g. "button" for `streamlit.button`
    pub name: String,
    /// Raw call signature, e.g. "st.button(label, key=None)"
    pub signature: Option<String>,
    /// Rich-text (author-trusted HTML)
    pub description: Option<String>,
    /// Link to the implementation
    pub source: Option<String>,
    pub is_class: bool,
    /// Declared call-signature order
    pub args: Vec<ParameterDescriptor>,
    pub returns: Vec<ParameterDescriptor>,
    pub methods: Vec<MethodDescriptor>,
    pub properties: Vec<PropertyDescriptor>,
    pub example: Option<String>,
    pub examples: Option<String>,
    pub notes: Option<String>,
    pub warning: Option<String>,
}

/// A parameter, class attribute, or return value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDescriptor {
    /// Empty for return values
    pub name: String,
    pub type_name: String,
    pub description: Option<String>,
    pub is_optional: bool,
    pub is_kwarg_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDescriptor {
    pub name: String,
    pub signature: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDescriptor {
    pub name: String,
    pub description: Option<String>,
}

/// Body used wherever a descriptor leaves its description out.
pub const NO_DESCRIPTION: &str = "<p>No description</p>";

/// Resolve an optional rich-text description, treating empty text as missing.
pub fn description_or_placeholder(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

impl SymbolDescriptor {
    /// Non-empty description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Free-text footer blocks in their fixed declaration order.
    pub fn footers(&self) -> Vec<(&'static str, &str)> {
        [
            ("Example", &self.example),
            ("Examples", &self.examples),
            ("Notes", &self.notes),
            ("Warning", &self.warning),
        ]
        .into_iter()
        .filter_map(|(title, body)| body.as_deref().map(|b| (title, b)))
        .collect()
    }
}
