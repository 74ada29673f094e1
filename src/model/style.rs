//! Paragraph style names.

use std::borrow::Cow;
use std::collections::HashMap;

/// Name used when a document declares no default paragraph style.
pub const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";

/// Maps style ids (`w:pStyle/@w:val`) to display names.
///
/// Built-in styles whose stored names are lowercase (`heading 1`, `caption`,
/// ...) are presented with their UI names (`Heading 1`, `Caption`), which is
/// what the classification prefixes expect.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style id with its stored name.
    pub fn insert(&mut self, id: impl Into<String>, name: &str) {
        self.names.insert(id.into(), ui_name(name).into_owned());
    }

    /// Set the default paragraph style name.
    pub fn set_default_paragraph(&mut self, name: &str) {
        self.default_paragraph = Some(ui_name(name).into_owned());
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the default paragraph style.
    pub fn default_paragraph(&self) -> &str {
        self.default_paragraph
            .as_deref()
            .unwrap_or(DEFAULT_PARAGRAPH_STYLE)
    }

    /// Resolve the display name for a paragraph's style id.
    ///
    /// Unknown ids fall back to the well-known built-in ids (`Heading1`,
    /// `Caption`, ...) and then to the default paragraph style.
    pub fn resolve<'a>(&'a self, style_id: Option<&str>) -> Cow<'a, str> {
        let Some(id) = style_id else {
            return Cow::Borrowed(self.default_paragraph());
        };
        if let Some(name) = self.names.get(id) {
            return Cow::Borrowed(name.as_str());
        }
        match builtin_name(id) {
            Some(name) => Cow::Owned(name),
            None => Cow::Borrowed(self.default_paragraph()),
        }
    }
}

/// Convert a stored built-in style name to its UI form.
fn ui_name(name: &str) -> Cow<'_, str> {
    match name {
        "caption" => Cow::Borrowed("Caption"),
        "header" => Cow::Borrowed("Header"),
        "footer" => Cow::Borrowed("Footer"),
        "title" => Cow::Borrowed("Title"),
        "subtitle" => Cow::Borrowed("Subtitle"),
        _ => match name.strip_prefix("heading ") {
            Some(level) if is_level(level) => Cow::Owned(format!("Heading {}", level)),
            _ => Cow::Borrowed(name),
        },
    }
}

/// UI name for a built-in style id used without a styles part.
fn builtin_name(id: &str) -> Option<String> {
    match id {
        "Title" | "Subtitle" | "Caption" | "Normal" => Some(id.to_string()),
        _ => id
            .strip_prefix("Heading")
            .filter(|level| is_level(level))
            .map(|level| format!("Heading {}", level)),
    }
}

fn is_level(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
