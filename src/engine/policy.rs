//! The option-driven removal policy.

use super::{BlockAction, BlockVisitor, RemovalReason, SectionTracker, StyleRole};
use crate::error::Result;
use crate::model::{Paragraph, Table};
use crate::options::Options;

/// Applies [`Options`] to each block.
///
/// For a paragraph, in order:
/// 1. inside an ignored section: remove
/// 2. an enabled role rule matches: remove
/// 3. `bibliography` on: strip nested content markers
///
/// Tables are kept unless `tables` is on; then a table inside an ignored
/// section is removed whole and any other table is descended into.
#[derive(Debug, Clone)]
pub struct RemovalPolicy<'a> {
    options: &'a Options,
    tracker: SectionTracker,
}

impl<'a> RemovalPolicy<'a> {
    /// Create a policy for one pass.
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            tracker: SectionTracker::new(&options.ignored_sections),
        }
    }

    /// The section tracker.
    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    fn rule_for(&self, role: StyleRole) -> Option<RemovalReason> {
        match role {
            StyleRole::Heading(_) if self.options.headings => Some(RemovalReason::Heading),
            StyleRole::Title if self.options.titles => Some(RemovalReason::Title),
            StyleRole::Subtitle if self.options.subtitles => Some(RemovalReason::Subtitle),
            StyleRole::Caption if self.options.captions => Some(RemovalReason::Caption),
            _ => None,
        }
    }
}

impl BlockVisitor for RemovalPolicy<'_> {
    fn visit_paragraph(&mut self, paragraph: &Paragraph<'_>, text: &str) -> Result<BlockAction> {
        let label = paragraph.style_name();
        let role = StyleRole::classify(&label);

        if self.tracker.update(role, &label, text)? {
            return Ok(BlockAction::Remove(RemovalReason::IgnoredSection));
        }
        if let Some(reason) = self.rule_for(role) {
            return Ok(BlockAction::Remove(reason));
        }
        if self.options.bibliography {
            return Ok(BlockAction::StripMarkers);
        }
        Ok(BlockAction::Keep)
    }

    fn visit_table(&mut self, _table: &Table<'_>) -> Result<BlockAction> {
        if !self.options.tables {
            return Ok(BlockAction::Keep);
        }
        if self.tracker.is_active() {
            return Ok(BlockAction::Remove(RemovalReason::IgnoredSection));
        }
        Ok(BlockAction::Descend)
    }

    fn strip_body_markers(&self) -> bool {
        self.options.bibliography
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, StyleMap};

    fn styled(style_id: &str) -> Element {
        Element::new("w:p").with_child(
            Element::new("w:pPr")
                .with_child(Element::new("w:pStyle").with_attribute("w:val", style_id)),
        )
    }

    fn decide(policy: &mut RemovalPolicy<'_>, style_id: &str, text: &str) -> BlockAction {
        let styles = StyleMap::new();
        let element = styled(style_id);
        let paragraph = Paragraph::new(&element, &styles).unwrap();
        policy.visit_paragraph(&paragraph, text).unwrap()
    }

    #[test]
    fn test_role_rules() {
        let options = Options::new().with_headings(true).with_captions(true);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(
            decide(&mut policy, "Heading1", "Intro"),
            BlockAction::Remove(RemovalReason::Heading)
        );
        assert_eq!(
            decide(&mut policy, "Caption", "Figure 1"),
            BlockAction::Remove(RemovalReason::Caption)
        );
        assert_eq!(decide(&mut policy, "Title", "A Title"), BlockAction::Keep);
        assert_eq!(decide(&mut policy, "Normal", "Body"), BlockAction::Keep);
    }

    #[test]
    fn test_section_wins_over_roles() {
        let options = Options::new()
            .with_headings(true)
            .with_ignored_sections(["References"]);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(
            decide(&mut policy, "Heading1", "References"),
            BlockAction::Remove(RemovalReason::IgnoredSection)
        );
        assert!(policy.tracker().is_active());
    }

    #[test]
    fn test_bibliography_strips_kept_paragraphs() {
        let options = Options::new().with_bibliography(true);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(decide(&mut policy, "Normal", "Cited"), BlockAction::StripMarkers);
        assert!(policy.strip_body_markers());
    }

    #[test]
    fn test_unnumbered_heading_follows_role_rule() {
        let mut styles = StyleMap::new();
        styles.insert("Unnumbered", "Heading Unnumbered");
        let element = styled("Unnumbered");
        let paragraph = Paragraph::new(&element, &styles).unwrap();

        let options = Options::new().with_ignored_sections(["References"]);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(
            policy.visit_paragraph(&paragraph, "Preface").unwrap(),
            BlockAction::Keep
        );

        let options = options.clone().with_headings(true);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(
            policy.visit_paragraph(&paragraph, "Preface").unwrap(),
            BlockAction::Remove(RemovalReason::Heading)
        );
        assert!(policy.visit_paragraph(&paragraph, "References").is_err());
    }

    #[test]
    fn test_tables() {
        let element = Element::new("w:tbl");
        let table = Table::new(&element).unwrap();

        let options = Options::new().with_ignored_sections(["Appendix"]);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(policy.visit_table(&table).unwrap(), BlockAction::Keep);

        let options = options.with_tables(true);
        let mut policy = RemovalPolicy::new(&options);
        assert_eq!(policy.visit_table(&table).unwrap(), BlockAction::Descend);
        decide(&mut policy, "Heading2", "appendix");
        assert_eq!(
            policy.visit_table(&table).unwrap(),
            BlockAction::Remove(RemovalReason::IgnoredSection)
        );
    }
}
