//! Ignored-section span tracking.

use super::StyleRole;
use crate::error::{Error, Result};

/// The ignored section currently open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredSection {
    /// Heading text that opened the span
    pub name: String,
    /// Level of that heading
    pub level: u32,
}

/// Tracks whether the traversal is inside an ignored section.
///
/// A span opens at a heading whose text matches a configured name
/// (case-insensitive, exact) and closes at the next heading of the same
/// level. Spans do not nest; a new match replaces the open span.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    names: Vec<String>,
    state: Option<IgnoredSection>,
}

impl SectionTracker {
    /// Create a tracker for the given section names.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            names: names.iter().map(|n| n.as_ref().to_lowercase()).collect(),
            state: None,
        }
    }

    /// Advance over one non-empty paragraph in document order.
    ///
    /// Returns whether the paragraph lies inside an ignored section. A
    /// heading's level is needed only while a span is open or when its text
    /// names an ignored section; an unnumbered `label` fails only then.
    pub fn update(&mut self, role: StyleRole, label: &str, text: &str) -> Result<bool> {
        if let StyleRole::Heading(level) = role {
            let required_level = || level.ok_or_else(|| Error::HeadingLevel(label.to_string()));

            if let Some(open_level) = self.state.as_ref().map(|s| s.level) {
                if open_level == required_level()? {
                    log::debug!("Ignored section ends at '{}'", text);
                    self.state = None;
                }
            }
            if self.matches(text) {
                let level = required_level()?;
                log::debug!("Ignored section '{}' starts at level {}", text, level);
                self.state = Some(IgnoredSection {
                    name: text.to_string(),
                    level,
                });
            }
        }
        Ok(self.state.is_some())
    }

    /// The open span, if any.
    pub fn current(&self) -> Option<&IgnoredSection> {
        self.state.as_ref()
    }

    /// Whether a span is open.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    fn matches(&self, text: &str) -> bool {
        if self.names.is_empty() {
            return false;
        }
        self.names.contains(&text.to_lowercase())
    }
}
