//! Style label classification.

use crate::error::{Error, Result};
use crate::model::Paragraph;
use crate::options::OptionName;

const HEADING: &str = "Heading";
const TITLE: &str = "Title";
const SUBTITLE: &str = "Subtitle";
const CAPTION: &str = "Caption";

/// Check if a style label names a heading.
pub fn is_heading(label: &str) -> bool {
    label.starts_with(HEADING)
}

/// Check if a style label names a title.
pub fn is_title(label: &str) -> bool {
    label.starts_with(TITLE)
}

/// Check if a style label names a subtitle.
pub fn is_subtitle(label: &str) -> bool {
    label.starts_with(SUBTITLE)
}

/// Check if a style label names a caption.
pub fn is_caption(label: &str) -> bool {
    label.starts_with(CAPTION)
}

/// Extract the level from a heading label such as `Heading 2`.
///
/// The literal `Heading` prefix is removed and the remainder parsed as a
/// positive integer.
pub fn heading_level(label: &str) -> Result<u32> {
    label
        .strip_prefix(HEADING)
        .and_then(|rest| rest.trim().parse::<u32>().ok())
        .filter(|level| *level > 0)
        .ok_or_else(|| Error::HeadingLevel(label.to_string()))
}

/// Semantic role of a paragraph, derived from its style label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    /// `Heading N`; `None` when the label carries no valid level
    Heading(Option<u32>),
    /// `Title`
    Title,
    /// `Subtitle`
    Subtitle,
    /// `Caption`
    Caption,
    /// Anything else
    Body,
}

impl StyleRole {
    /// Classify a style label.
    pub fn classify(label: &str) -> Self {
        if is_heading(label) {
            StyleRole::Heading(heading_level(label).ok())
        } else if is_title(label) {
            StyleRole::Title
        } else if is_subtitle(label) {
            StyleRole::Subtitle
        } else if is_caption(label) {
            StyleRole::Caption
        } else {
            StyleRole::Body
        }
    }

    /// Classify a paragraph by its style name.
    pub fn of(paragraph: &Paragraph<'_>) -> Self {
        Self::classify(&paragraph.style_name())
    }

    /// Whether this is a heading, numbered or not.
    pub fn is_heading(self) -> bool {
        matches!(self, StyleRole::Heading(_))
    }

    /// Heading level, if this is a numbered heading.
    pub fn heading_level(self) -> Option<u32> {
        match self {
            StyleRole::Heading(level) => level,
            _ => None,
        }
    }

    /// The option that strips paragraphs of this role.
    pub fn toggle(self) -> Option<OptionName> {
        match self {
            StyleRole::Heading(_) => Some(OptionName::Headings),
            StyleRole::Title => Some(OptionName::Titles),
            StyleRole::Subtitle => Some(OptionName::Subtitles),
            StyleRole::Caption => Some(OptionName::Captions),
            StyleRole::Body => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(is_heading("Heading 1"));
        assert!(is_title("Title"));
        assert!(is_subtitle("Subtitle"));
        assert!(is_caption("Caption"));
        assert!(!is_title("Subtitle"));
        assert!(!is_heading("heading 1"));
        assert!(!is_caption("Normal"));
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("Heading 1").unwrap(), 1);
        assert_eq!(heading_level("Heading 9").unwrap(), 9);
        assert_eq!(heading_level("Heading12").unwrap(), 12);
    }

    #[test]
    fn test_heading_level_requires_number() {
        assert!(matches!(
            heading_level("Heading"),
            Err(Error::HeadingLevel(_))
        ));
        assert!(heading_level("Heading One").is_err());
        assert!(heading_level("Heading 0").is_err());
        assert!(heading_level("Normal").is_err());
    }

    #[test]
    fn test_prefix_is_literal() {
        // Only the literal prefix is removed, not every character of "Heading ".
        assert!(heading_level("Heading  3").is_ok());
        assert!(heading_level("HeadingH3").is_err());
        assert!(heading_level("Heading 3a").is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(StyleRole::classify("Heading 2"), StyleRole::Heading(Some(2)));
        assert_eq!(StyleRole::classify("Title"), StyleRole::Title);
        assert_eq!(StyleRole::classify("Subtitle"), StyleRole::Subtitle);
        assert_eq!(StyleRole::classify("Caption"), StyleRole::Caption);
        assert_eq!(StyleRole::classify("Normal"), StyleRole::Body);
        assert_eq!(StyleRole::classify("List Paragraph"), StyleRole::Body);
    }

    #[test]
    fn test_classify_unnumbered_heading() {
        let role = StyleRole::classify("Heading Unnumbered");
        assert_eq!(role, StyleRole::Heading(None));
        assert!(role.is_heading());
        assert_eq!(role.heading_level(), None);
        assert_eq!(StyleRole::classify("Heading"), StyleRole::Heading(None));
    }

    #[test]
    fn test_toggles() {
        assert_eq!(StyleRole::Heading(Some(1)).toggle(), Some(OptionName::Headings));
        assert_eq!(StyleRole::Heading(None).toggle(), Some(OptionName::Headings));
        assert_eq!(StyleRole::Caption.toggle(), Some(OptionName::Captions));
        assert_eq!(StyleRole::Body.toggle(), None);
        assert_eq!(StyleRole::Heading(Some(4)).heading_level(), Some(4));
        assert_eq!(StyleRole::Title.heading_level(), None);
    }
}
