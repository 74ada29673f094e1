//! Statistics collected during a processing pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Why a block was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Inside an ignored section
    IgnoredSection,
    /// Heading paragraph
    Heading,
    /// Title paragraph
    Title,
    /// Subtitle paragraph
    Subtitle,
    /// Caption paragraph
    Caption,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemovalReason::IgnoredSection => "ignored section",
            RemovalReason::Heading => "heading",
            RemovalReason::Title => "title",
            RemovalReason::Subtitle => "subtitle",
            RemovalReason::Caption => "caption",
        };
        f.write_str(s)
    }
}

/// Counters for one pass over a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Non-empty paragraphs visited
    pub paragraphs_seen: u32,

    /// Paragraphs removed
    pub paragraphs_removed: u32,

    /// Paragraphs skipped because their text was empty
    pub empty_paragraphs_skipped: u32,

    /// Tables encountered
    pub tables_seen: u32,

    /// Tables removed whole
    pub tables_removed: u32,

    /// Content markers removed from inside paragraphs
    pub nested_markers_removed: u32,

    /// Content markers removed from the body
    pub body_markers_removed: u32,

    /// Removed blocks by reason
    pub removed_by_reason: BTreeMap<RemovalReason, u32>,
}

impl ProcessReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited paragraph.
    pub fn add_paragraph(&mut self) {
        self.paragraphs_seen += 1;
    }

    /// Record a skipped empty paragraph.
    pub fn add_empty_paragraph(&mut self) {
        self.empty_paragraphs_skipped += 1;
    }

    /// Record a visited table.
    pub fn add_table(&mut self) {
        self.tables_seen += 1;
    }

    /// Record a removed paragraph.
    pub fn remove_paragraph(&mut self, reason: RemovalReason) {
        self.paragraphs_removed += 1;
        *self.removed_by_reason.entry(reason).or_insert(0) += 1;
    }

    /// Record a removed table.
    pub fn remove_table(&mut self, reason: RemovalReason) {
        self.tables_removed += 1;
        *self.removed_by_reason.entry(reason).or_insert(0) += 1;
    }

    /// Record removed nested markers.
    pub fn add_nested_markers(&mut self, count: usize) {
        self.nested_markers_removed += count as u32;
    }

    /// Record removed body markers.
    pub fn add_body_markers(&mut self, count: usize) {
        self.body_markers_removed += count as u32;
    }

    /// Blocks removed for a reason.
    pub fn removed_for(&self, reason: RemovalReason) -> u32 {
        self.removed_by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Total blocks removed.
    pub fn blocks_removed(&self) -> u32 {
        self.paragraphs_removed + self.tables_removed
    }

    /// Total content markers removed.
    pub fn markers_removed(&self) -> u32 {
        self.nested_markers_removed + self.body_markers_removed
    }

    /// Check if the pass changed nothing.
    pub fn is_unchanged(&self) -> bool {
        self.blocks_removed() == 0 && self.markers_removed() == 0
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: &ProcessReport) {
        self.paragraphs_seen += other.paragraphs_seen;
        self.paragraphs_removed += other.paragraphs_removed;
        self.empty_paragraphs_skipped += other.empty_paragraphs_skipped;
        self.tables_seen += other.tables_seen;
        self.tables_removed += other.tables_removed;
        self.nested_markers_removed += other.nested_markers_removed;
        self.body_markers_removed += other.body_markers_removed;
        for (reason, count) in &other.removed_by_reason {
            *self.removed_by_reason.entry(*reason).or_insert(0) += count;
        }
    }
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} paragraphs removed, {} of {} tables removed, {} content markers removed",
            self.paragraphs_removed,
            self.paragraphs_seen,
            self.tables_removed,
            self.tables_seen,
            self.markers_removed()
        )
    }
}
