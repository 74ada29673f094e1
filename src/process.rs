//! File-level processing pipeline.
//!
//! The input is never modified: it is copied to a scratch directory, the
//! copy is loaded and processed, and the result is written next to the
//! input under an `ABACUS_` name.
//!
//! # Example
//!
//! ```no_run
//! use abacus::{process::Processor, Options};
//!
//! let outcome = Processor::new(Options::enabled_defaults())
//!     .with_overwrite(false)
//!     .process_file("thesis.docx")
//!     .unwrap();
//! println!("{} -> {}", outcome.words_before, outcome.words_after);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tempfile::TempDir;

use crate::count::{WordCount, WordCounter};
use crate::detect::has_docx_extension;
use crate::engine::{process_document, ProcessReport};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{save_docx, to_docx_bytes};

/// Prefix of every output file name.
pub const OUTPUT_PREFIX: &str = "ABACUS_";

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y_%H%M%S";

/// Split an input path into its directory and file name.
///
/// Fails with [`Error::InvalidInput`] unless the extension is `.docx`.
pub fn parse_input<P: AsRef<Path>>(input: P) -> Result<(PathBuf, String)> {
    let input = input.as_ref();
    if !has_docx_extension(input) {
        return Err(Error::InvalidInput(input.display().to_string()));
    }
    let basename = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidInput(input.display().to_string()))?;
    let dir = input.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((dir, basename))
}

/// Output file name for a processed document.
///
/// `ABACUS_<basename>` when overwriting, otherwise the name carries the
/// given time as `dd-mm-YYYY_HHMMSS`.
pub fn output_file_name(basename: &str, overwrite: bool, now: NaiveDateTime) -> String {
    if overwrite {
        format!("{}{}", OUTPUT_PREFIX, basename)
    } else {
        format!(
            "{}{}_{}",
            OUTPUT_PREFIX,
            now.format(TIMESTAMP_FORMAT),
            basename
        )
    }
}

/// A copy of the input in a scratch directory.
///
/// The directory is deleted when the copy is dropped or closed.
#[derive(Debug)]
pub struct ScratchCopy {
    dir: TempDir,
    path: PathBuf,
}

impl ScratchCopy {
    /// Path of the copied file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the scratch directory, logging any failure.
    pub fn close(self) {
        let dir = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            log::warn!("Couldn't remove scratch directory {}: {}", dir.display(), e);
        }
    }
}

/// Copy the input into a fresh scratch directory.
pub fn copy_doc<P: AsRef<Path>>(input: P) -> Result<ScratchCopy> {
    let input = input.as_ref();
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    let name = input
        .file_name()
        .ok_or_else(|| Error::InvalidInput(input.display().to_string()))?;

    let dir = tempfile::Builder::new().prefix("abacus").tempdir()?;
    let path = dir.path().join(name);
    fs::copy(input, &path)?;
    log::debug!("Copied {} to {}", input.display(), path.display());
    Ok(ScratchCopy { dir, path })
}

/// Result of processing one file.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// The input document
    pub input: PathBuf,

    /// The written document
    pub output: PathBuf,

    /// What the pass removed
    pub report: ProcessReport,

    /// Words before processing
    pub words_before: WordCount,

    /// Words after processing
    pub words_after: WordCount,
}

impl ProcessOutcome {
    /// Words removed by the pass.
    pub fn words_removed(&self) -> u32 {
        self.words_before.total().saturating_sub(self.words_after.total())
    }
}

/// Runs the copy, load, process and save steps for files.
#[derive(Debug, Clone)]
pub struct Processor {
    options: Options,
    overwrite: bool,
    parse_options: ParseOptions,
    counter: WordCounter,
}

impl Processor {
    /// Create a processor with the given options.
    ///
    /// Output overwrites the previous `ABACUS_` file by default; tables are
    /// word-counted when the options process them.
    pub fn new(options: Options) -> Self {
        let counter = WordCounter::new().with_tables(options.tables);
        Self {
            options,
            overwrite: true,
            parse_options: ParseOptions::default(),
            counter,
        }
    }

    /// Choose between a fixed and a timestamped output name.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the word counter.
    pub fn with_counter(mut self, counter: WordCounter) -> Self {
        self.counter = counter;
        self
    }

    /// The options applied to each document.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Process a file and write the result next to it.
    pub fn process_file<P: AsRef<Path>>(&self, input: P) -> Result<ProcessOutcome> {
        let input = input.as_ref();
        let (dir, basename) = parse_input(input)?;
        let scratch = copy_doc(input)?;

        let result = self.process_copy(scratch.path(), &dir, &basename);
        scratch.close();

        let (output, report, words_before, words_after) = result?;
        Ok(ProcessOutcome {
            input: input.to_path_buf(),
            output,
            report,
            words_before,
            words_after,
        })
    }

    /// Process an in-memory `.docx` and return the new archive.
    pub fn process_bytes(&self, data: &[u8]) -> Result<(Vec<u8>, ProcessReport)> {
        let mut doc =
            DocxParser::from_bytes_with_options(data, self.parse_options.clone())?.parse()?;
        let report = process_document(&mut doc, &self.options)?;
        Ok((to_docx_bytes(&doc)?, report))
    }

    fn process_copy(
        &self,
        copy: &Path,
        dir: &Path,
        basename: &str,
    ) -> Result<(PathBuf, ProcessReport, WordCount, WordCount)> {
        let mut doc = DocxParser::open_with_options(copy, self.parse_options.clone())?.parse()?;

        let words_before = self.counter.count_document(&doc);
        let report = process_document(&mut doc, &self.options)?;
        let words_after = self.counter.count_document(&doc);

        let output = dir.join(output_file_name(
            basename,
            self.overwrite,
            Local::now().naive_local(),
        ));
        save_docx(&doc, &output)?;
        log::info!("Output file: {}", output.display());
        Ok((output, report, words_before, words_after))
    }
}

/// Process a file with the given options; see [`Processor`].
pub fn process_file<P: AsRef<Path>>(
    input: P,
    options: &Options,
    overwrite: bool,
) -> Result<ProcessOutcome> {
    Processor::new(options.clone())
        .with_overwrite(overwrite)
        .process_file(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_input() {
        let (dir, basename) = parse_input("/home/me/thesis.docx").unwrap();
        assert_eq!(dir, PathBuf::from("/home/me"));
        assert_eq!(basename, "thesis.docx");

        let (dir, basename) = parse_input("thesis.docx").unwrap();
        assert_eq!(dir, PathBuf::new());
        assert_eq!(basename, "thesis.docx");
    }

    #[test]
    fn test_parse_input_rejects_other_extensions() {
        assert!(matches!(
            parse_input("thesis.doc"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(parse_input("thesis"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_output_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        assert_eq!(output_file_name("a.docx", true, now), "ABACUS_a.docx");
        assert_eq!(
            output_file_name("a.docx", false, now),
            "ABACUS_05-03-2024_140709_a.docx"
        );
    }

    #[test]
    fn test_copy_doc_missing_input() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.docx");
        assert!(matches!(
            copy_doc(&missing),
            Err(Error::InputNotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_copy_doc_is_removed_on_close() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.docx");
        fs::write(&input, b"PK\x03\x04").unwrap();

        let copy = copy_doc(&input).unwrap();
        let copied = copy.path().to_path_buf();
        assert_eq!(fs::read(&copied).unwrap(), b"PK\x03\x04");
        assert_ne!(copied, input);

        copy.close();
        assert!(!copied.exists());
        assert!(input.exists());
    }
}
