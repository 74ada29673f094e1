//! Word counting.

use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Tokens that are never counted as words.
pub const DEFAULT_PUNCTUATION: [&str; 5] = [".", "-", "\u{2013}", "\u{2014}", "_"];

/// Word totals for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Words in body paragraphs
    pub body: u32,
    /// Words in table cells (zero unless tables are counted)
    pub tables: u32,
}

impl WordCount {
    /// Body and table words together.
    pub fn total(&self) -> u32 {
        self.body + self.tables
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())
    }
}

/// Counts whitespace-separated words, skipping bare punctuation tokens.
#[derive(Debug, Clone)]
pub struct WordCounter {
    punctuation: BTreeSet<String>,
    include_tables: bool,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.iter().map(|s| s.to_string()).collect(),
            include_tables: false,
        }
    }
}

impl WordCounter {
    /// Counter with the default punctuation set, body only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the punctuation set.
    pub fn with_punctuation<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.punctuation = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Also count words in table cells.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }

    /// Count the words in a piece of text.
    pub fn count_text(&self, text: &str) -> u32 {
        text.split_whitespace()
            .filter(|token| !self.punctuation.contains(*token))
            .count() as u32
    }

    /// Count the words a reader would see in a document.
    pub fn count_document(&self, doc: &Document) -> WordCount {
        let body = doc
            .paragraphs()
            .map(|p| self.count_text(&p.visible_text()))
            .sum();

        let tables = if self.include_tables {
            doc.tables()
                .flat_map(|table| table.paragraphs(doc.styles()))
                .map(|p| self.count_text(&p.visible_text()))
                .sum()
        } else {
            0
        };

        WordCount { body, tables }
    }
}
