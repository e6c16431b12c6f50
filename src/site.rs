//! Site-wide naming used when titling entries and explaining absences.

/// Naming conventions of the documented library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Human name, e.g. "Streamlit"
    pub library_name: String,
    /// Import path used in symbol keys and signatures, e.g. "streamlit"
    pub module: String,
    /// Conventional alias shown to readers, e.g. "st"
    pub alias: String,
    /// Human name of the namespaced platform line
    pub namespace_label: String,
    /// Members documented under the components module rather than the alias
    pub component_members: Vec<String>,
    /// Path those members are titled under
    pub component_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            library_name: "Streamlit".to_string(),
            module: "streamlit".to_string(),
            alias: "st".to_string(),
            namespace_label: "Streamlit in Snowflake".to_string(),
            component_members: vec!["html".to_string(), "iframe".to_string()],
            component_path: "st.components.v1".to_string(),
        }
    }
}

impl SiteConfig {
    /// Replace the first occurrence of the module path with its alias.
    pub fn aliased(&self, text: &str) -> String {
        if self.module.is_empty() {
            return text.to_string();
        }
        text.replacen(&self.module, &self.alias, 1)
    }

    /// True when `name` is titled under the components path.
    pub fn is_component(&self, name: &str) -> bool {
        self.component_members.iter().any(|m| name.starts_with(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_replaces_first_occurrence_only() {
        let site = SiteConfig::default();
        assert_eq!(site.aliased("streamlit.button"), "st.button");
        assert_eq!(site.aliased("streamlit.streamlit"), "st.streamlit");
        assert_eq!(site.aliased("button"), "button");
    }

    #[test]
    fn component_members() {
        let site = SiteConfig::default();
        assert!(site.is_component("html"));
        assert!(site.is_component("iframe"));
        assert!(!site.is_component("button"));
    }
}
