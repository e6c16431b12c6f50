//! Anchor and route identifiers.
//!
//! Two sanitizing rules live here and are deliberately kept apart:
//! [`anchor_slug`] folds case and strips punctuation for member anchors,
//! [`header_href`] only strips dots and keeps case for symbol headers.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static RE_ANCHOR_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,/#!$%\^&*;:{}=\-`~()]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Member anchor: lowercase, punctuation removed, whitespace runs hyphenated.
///
/// `slider.value` → `slidervalue`
pub fn anchor_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = RE_ANCHOR_STRIP.replace_all(&lowered, "");
    RE_WHITESPACE.replace_all(&stripped, "-").into_owned()
}

/// Header href: dots removed, whitespace runs hyphenated, case kept.
///
/// `st.Page config` → `stPage-config`
pub fn header_href(text: &str) -> String {
    let stripped = text.replace('.', "");
    RE_WHITESPACE.replace_all(&stripped, "-").into_owned()
}

/// A navigation target handed to the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub segments: Vec<String>,
    pub anchor: Option<String>,
}

impl Route {
    pub fn new(segments: Vec<String>) -> Self {
        Self {
            segments,
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Path part only, e.g. `/1.20.0/button`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())?;
        if let Some(ref anchor) = self.anchor {
            write!(f, "#{}", anchor)?;
        }
        Ok(())
    }
}

/// Split a `/`-separated slug path into its segments, dropping empties.
pub fn parse_slug(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_member() {
        assert_eq!(anchor_slug("slider.value"), "slidervalue");
        assert_eq!(anchor_slug("St.Column_Config"), "stcolumn_config");
    }

    #[test]
    fn anchor_strips_every_listed_char() {
        assert_eq!(anchor_slug("a.,/#!$%^&*;:{}=-`~()b"), "ab");
    }

    #[test]
    fn anchor_hyphenates_whitespace() {
        assert_eq!(anchor_slug("Data  Editor\tvalue"), "data-editor-value");
    }

    #[test]
    fn header_keeps_case() {
        assert_eq!(header_href("st.Page"), "stPage");
        assert_eq!(header_href("st.column_config.Column"), "stcolumn_configColumn");
    }

    #[test]
    fn header_keeps_other_punctuation() {
        assert_eq!(header_href("st.a-b (x)"), "sta-b-(x)");
    }

    #[test]
    fn route_display() {
        let route = Route::new(vec!["1.20.0".into(), "button".into()]).with_anchor("stbutton");
        assert_eq!(route.to_string(), "/1.20.0/button#stbutton");
        assert_eq!(Route::new(vec![]).to_string(), "/");
    }

    #[test]
    fn parse_slug_drops_empty_segments() {
        assert_eq!(parse_slug("/1.20.0//button/"), ["1.20.0", "button"]);
        assert!(parse_slug("").is_empty());
    }
}
