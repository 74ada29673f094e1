//! `.docx` format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Container format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the archive starts with an empty (spanned or zero-entry) marker
    pub empty_archive: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Office Open XML package")
    }
}

/// ZIP local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// ZIP end-of-central-directory signature (archive without entries).
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";
const MAGIC_LEN: usize = 4;

/// Expected extension of input documents.
pub const DOCX_EXTENSION: &str = "docx";

/// Detect the container format from a file path.
///
/// # Arguments
/// * `path` - Path to the document
///
/// # Returns
/// * `Ok(DocxFormat)` if the file starts with a ZIP signature
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use abacus::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("thesis.docx").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; MAGIC_LEN];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::UnknownFormat,
        _ => Error::Io(e),
    })?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 4 bytes of the file
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if data.len() < MAGIC_LEN {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocxFormat {
            empty_archive: false,
        });
    }
    if data.starts_with(ZIP_EMPTY_MAGIC) {
        return Ok(DocxFormat {
            empty_archive: true,
        });
    }

    Err(Error::UnknownFormat)
}

/// Check that a path carries the `.docx` extension.
pub fn has_docx_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCX_EXTENSION))
}

/// Check if a file is a `.docx` document.
///
/// # Returns
/// * `true` if the extension is `.docx` and the content is a ZIP container
/// * `false` otherwise
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    has_docx_extension(path) && detect_format_from_path(path).is_ok()
}

/// Check if bytes start like a ZIP container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
