//! Resolved processing options.
//!
//! [`Options`] is the immutable, typed configuration the engine consumes.
//! It is built once by the caller (directly, or through [`ConfigLoader`]
//! from an INI file) and shared read-only across a pass.

mod loader;

pub use loader::{
    default_config_ini, default_config_path, load_config, resolve_entries, write_default_config,
    ConfigLoader, ConfigSource, ConfigWarning, ResolvedConfig, DEFAULT_SECTION,
};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section names written to a freshly created configuration file.
pub const DEFAULT_IGNORED_SECTIONS: [&str; 5] = [
    "Appendices",
    "Appendix",
    "Bibliography",
    "References",
    "Works Cited",
];

/// Options controlling which content is stripped.
///
/// `Default` turns everything off; [`Options::enabled_defaults`] gives the
/// values a new configuration file starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Strip heading paragraphs
    pub headings: bool,

    /// Strip title paragraphs
    pub titles: bool,

    /// Strip subtitle paragraphs
    pub subtitles: bool,

    /// Strip caption paragraphs
    pub captions: bool,

    /// Strip content markers (citations, bibliography fields)
    pub bibliography: bool,

    /// Section names stripped with everything under them
    pub ignored_sections: Vec<String>,

    /// Apply the same rules inside table cells
    pub tables: bool,
}

impl Options {
    /// Create options with everything off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values used when a new configuration file is created.
    pub fn enabled_defaults() -> Self {
        Self {
            headings: true,
            titles: true,
            subtitles: true,
            captions: true,
            bibliography: true,
            ignored_sections: DEFAULT_IGNORED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tables: false,
        }
    }

    /// Enable or disable heading removal.
    pub fn with_headings(mut self, enabled: bool) -> Self {
        self.headings = enabled;
        self
    }

    /// Enable or disable title removal.
    pub fn with_titles(mut self, enabled: bool) -> Self {
        self.titles = enabled;
        self
    }

    /// Enable or disable subtitle removal.
    pub fn with_subtitles(mut self, enabled: bool) -> Self {
        self.subtitles = enabled;
        self
    }

    /// Enable or disable caption removal.
    pub fn with_captions(mut self, enabled: bool) -> Self {
        self.captions = enabled;
        self
    }

    /// Enable or disable content marker removal.
    pub fn with_bibliography(mut self, enabled: bool) -> Self {
        self.bibliography = enabled;
        self
    }

    /// Set the ignored section names.
    pub fn with_ignored_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable processing of table cells.
    pub fn with_tables(mut self, enabled: bool) -> Self {
        self.tables = enabled;
        self
    }

    /// Typed value of an option.
    pub fn get(&self, name: OptionName) -> OptionValue {
        match name {
            OptionName::Headings => OptionValue::Bool(self.headings),
            OptionName::Titles => OptionValue::Bool(self.titles),
            OptionName::Subtitles => OptionValue::Bool(self.subtitles),
            OptionName::Captions => OptionValue::Bool(self.captions),
            OptionName::Bibliography => OptionValue::Bool(self.bibliography),
            OptionName::IgnoredSections => OptionValue::List(self.ignored_sections.clone()),
            OptionName::Tables => OptionValue::Bool(self.tables),
        }
    }

    /// Look up an option by its configuration name.
    ///
    /// Fails with [`Error::UnknownOption`] for names the engine does not
    /// implement.
    pub fn value(&self, name: &str) -> Result<OptionValue> {
        Ok(self.get(name.parse()?))
    }

    /// Whether a boolean option is on, or a list option is non-empty.
    pub fn is_enabled(&self, name: OptionName) -> bool {
        match self.get(name) {
            OptionValue::Bool(b) => b,
            OptionValue::List(items) => !items.is_empty(),
        }
    }

    pub(crate) fn assign(&mut self, name: OptionName, value: OptionValue) {
        match (name, value) {
            (OptionName::Headings, OptionValue::Bool(v)) => self.headings = v,
            (OptionName::Titles, OptionValue::Bool(v)) => self.titles = v,
            (OptionName::Subtitles, OptionValue::Bool(v)) => self.subtitles = v,
            (OptionName::Captions, OptionValue::Bool(v)) => self.captions = v,
            (OptionName::Bibliography, OptionValue::Bool(v)) => self.bibliography = v,
            (OptionName::IgnoredSections, OptionValue::List(v)) => self.ignored_sections = v,
            (OptionName::Tables, OptionValue::Bool(v)) => self.tables = v,
            (name, value) => log::warn!("Ignoring mistyped value {} for {}", value, name),
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = OptionName::ALL
            .iter()
            .map(|name| format!("{}: {}", name, self.get(*name)))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Names of the recognized options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionName {
    /// `headings`
    Headings,
    /// `titles`
    Titles,
    /// `subtitles`
    Subtitles,
    /// `captions`
    Captions,
    /// `bibliography`
    Bibliography,
    /// `ignored_sections`
    IgnoredSections,
    /// `tables`
    Tables,
}

/// Declared type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` / `false`, case-insensitive
    Bool,
    /// JSON array of strings
    List,
}

impl OptionName {
    /// Every recognized option, in configuration file order.
    pub const ALL: [OptionName; 7] = [
        OptionName::Headings,
        OptionName::Titles,
        OptionName::Subtitles,
        OptionName::Captions,
        OptionName::Bibliography,
        OptionName::IgnoredSections,
        OptionName::Tables,
    ];

    /// Name as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionName::Headings => "headings",
            OptionName::Titles => "titles",
            OptionName::Subtitles => "subtitles",
            OptionName::Captions => "captions",
            OptionName::Bibliography => "bibliography",
            OptionName::IgnoredSections => "ignored_sections",
            OptionName::Tables => "tables",
        }
    }

    /// Declared type.
    pub fn kind(self) -> OptionKind {
        match self {
            OptionName::IgnoredSections => OptionKind::List,
            _ => OptionKind::Bool,
        }
    }

    /// Value used when the option is missing or malformed.
    pub fn off_fallback(self) -> OptionValue {
        match self.kind() {
            OptionKind::Bool => OptionValue::Bool(false),
            OptionKind::List => OptionValue::List(Vec::new()),
        }
    }

    /// Parse a raw configuration value according to the declared type.
    pub fn parse_value(self, raw: &str) -> Option<OptionValue> {
        match self.kind() {
            OptionKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Some(OptionValue::Bool(true)),
                "false" => Some(OptionValue::Bool(false)),
                _ => None,
            },
            OptionKind::List => serde_json::from_str::<Vec<String>>(raw.trim())
                .ok()
                .map(OptionValue::List),
        }
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OptionName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownOption(s.to_string()))
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean toggle
    Bool(bool),
    /// List of strings
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => f.write_str("True"),
            OptionValue::Bool(false) => f.write_str("False"),
            OptionValue::List(items) => {
                let json = serde_json::to_string(items).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
