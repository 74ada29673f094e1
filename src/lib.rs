//! # abacus
//!
//! Prepares `.docx` documents for word counting.
//!
//! Academic word limits usually exclude headings, titles, captions, citations
//! and whole sections such as the bibliography or appendices. This library
//! removes that content from a copy of the document so the result can be
//! counted directly.
//!
//! ## Quick Start
//!
//! ```no_run
//! use abacus::{Abacus, Options};
//!
//! fn main() -> abacus::Result<()> {
//!     let result = Abacus::new()
//!         .with_options(Options::enabled_defaults())
//!         .process("thesis.docx")?;
//!
//!     println!("{}", result.report());
//!     result.save("ABACUS_thesis.docx")?;
//!     Ok(())
//! }
//! ```
//!
//! ## What gets removed
//!
//! - **Ignored sections**: everything from a heading named like `References`
//!   up to the next heading of the same level
//! - **Styled paragraphs**: headings, titles, subtitles and captions
//! - **Content markers**: citation and bibliography fields
//! - **Tables**: optionally, the same rules inside table cells

pub mod count;
pub mod detect;
pub mod engine;
pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod process;
pub mod render;

// Re-export commonly used types
pub use count::{WordCount, WordCounter};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use engine::{process_document, ProcessReport, RemovalReason, StyleRole};
pub use error::{Error, Result};
pub use model::{BlockHandle, BlockKind, Container, Document, Element, Paragraph, Table};
pub use options::{load_config, ConfigLoader, OptionName, OptionValue, Options};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use process::{process_file, ProcessOutcome, Processor};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Parse a `.docx` file.
///
/// # Example
///
/// ```no_run
/// use abacus::parse_file;
///
/// let doc = parse_file("thesis.docx").unwrap();
/// println!("{}", doc.plain_text());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a `.docx` file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Parse a `.docx` from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Parse a `.docx` from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    DocxParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse a `.docx` from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    DocxParser::from_reader(reader)?.parse()
}

/// Process an in-memory `.docx` and return the new archive.
///
/// # Example
///
/// ```no_run
/// use abacus::{process_bytes, Options};
///
/// let data = std::fs::read("thesis.docx").unwrap();
/// let output = process_bytes(&data, &Options::enabled_defaults()).unwrap();
/// std::fs::write("ABACUS_thesis.docx", output).unwrap();
/// ```
pub fn process_bytes(data: &[u8], options: &Options) -> Result<Vec<u8>> {
    Processor::new(options.clone())
        .process_bytes(data)
        .map(|(bytes, _)| bytes)
}

/// Count the words in a `.docx` file.
pub fn word_count<P: AsRef<Path>>(path: P) -> Result<WordCount> {
    let doc = parse_file(path)?;
    Ok(WordCounter::new().count_document(&doc))
}

/// Builder for loading and processing documents.
///
/// # Example
///
/// ```no_run
/// use abacus::{Abacus, JsonFormat, Options};
///
/// let result = Abacus::new()
///     .with_options(Options::new().with_captions(true))
///     .lenient()
///     .process("thesis.docx")?;
/// println!("{}", result.to_json(JsonFormat::Pretty)?);
/// # Ok::<(), abacus::Error>(())
/// ```
pub struct Abacus {
    parse_options: ParseOptions,
    options: Options,
}

impl Abacus {
    /// Create a builder with every option off.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            options: Options::default(),
        }
    }

    /// Set the removal options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Load and process a file in memory.
    pub fn process<P: AsRef<Path>>(self, path: P) -> Result<AbacusResult> {
        let document = DocxParser::open_with_options(path, self.parse_options.clone())?.parse()?;
        self.finish(document)
    }

    /// Load and process a `.docx` held in memory.
    pub fn process_bytes(self, data: &[u8]) -> Result<AbacusResult> {
        let document =
            DocxParser::from_bytes_with_options(data, self.parse_options.clone())?.parse()?;
        self.finish(document)
    }

    fn finish(self, mut document: Document) -> Result<AbacusResult> {
        let report = process_document(&mut document, &self.options)?;
        Ok(AbacusResult {
            document,
            report,
            tables: self.options.tables,
        })
    }
}

impl Default for Abacus {
    fn default() -> Self {
        Self::new()
    }
}

/// A processed document and what was removed from it.
pub struct AbacusResult {
    /// The processed document
    pub document: Document,
    /// What the pass removed
    report: ProcessReport,
    tables: bool,
}

impl AbacusResult {
    /// The processing report.
    pub fn report(&self) -> &ProcessReport {
        &self.report
    }

    /// Words left in the document.
    pub fn word_count(&self) -> WordCount {
        WordCounter::new()
            .with_tables(self.tables)
            .count_document(&self.document)
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Serialize the document as a `.docx` archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        render::to_docx_bytes(&self.document)
    }

    /// Write the document to a `.docx` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save_docx(&self.document, path)
    }

    /// Visible text of the remaining body paragraphs.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abacus_builder() {
        let abacus = Abacus::new()
            .lenient()
            .with_options(Options::new().with_titles(true));

        assert!(matches!(
            abacus.parse_options.error_mode,
            parser::ErrorMode::Lenient
        ));
        assert!(abacus.options.titles);
    }

    #[test]
    fn test_abacus_builder_default() {
        let builder = Abacus::default();
        assert_eq!(builder.options, Options::default());
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Strict);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(matches!(parse_bytes(&data), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        assert!(parse_bytes(&data).is_err());
    }

    #[test]
    fn test_parse_bytes_truncated_zip() {
        // Right signature, but not a readable archive
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        assert!(matches!(parse_bytes(data), Err(Error::Zip(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_bytes() {
        let result = Abacus::new().process_bytes(b"not a docx");
        assert!(result.is_err());
    }

    fn sample_docx() -> Vec<u8> {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Introduction</w:t></w:r></w:p><w:p><w:r><w:t>Words matter here</w:t></w:r></w:p><w:sectPr/></w:body></w:document>"#;
        let doc = parser::parse_document_xml(xml.as_bytes(), None).unwrap();
        render::to_docx_bytes(&doc).unwrap()
    }

    #[test]
    fn test_builder_processes_bytes() {
        let result = Abacus::new()
            .with_options(Options::new().with_headings(true))
            .process_bytes(&sample_docx())
            .unwrap();

        assert_eq!(result.report().paragraphs_removed, 1);
        assert_eq!(result.plain_text(), "Words matter here");
        assert_eq!(result.word_count().total(), 3);
        assert!(parse_bytes(&result.to_bytes().unwrap()).is_ok());
    }

    #[test]
    fn test_builder_processes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("thesis.docx");
        std::fs::write(&path, sample_docx()).unwrap();

        let result = Abacus::new().lenient().process(&path).unwrap();
        assert!(result.report().is_unchanged());
        assert_eq!(result.plain_text(), "Introduction\nWords matter here");
    }

    #[test]
    fn test_process_file_rejects_non_docx() {
        let result = process_file("notes.txt", &Options::default(), true);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
