//! Error types for abacus library.

use crate::model::NodeId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for abacus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("File {} not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input is not a `.docx` document.
    #[error("{0} is not a .docx file")]
    InvalidInput(String),

    /// The data is not a ZIP container.
    #[error("Unknown file format: not a valid .docx container")]
    UnknownFormat,

    /// Error reading or writing the ZIP container.
    #[error("Container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Malformed XML in a package part.
    #[error("XML error: {0}")]
    Xml(String),

    /// The configuration file does not exist.
    #[error("Config file {} not found", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An option name the engine does not implement was consulted.
    #[error("{0} is not an implemented option")]
    UnknownOption(String),

    /// A heading style label without a numeric level.
    #[error("Style label '{0}' has no numeric heading level")]
    HeadingLevel(String),

    /// A block handle resolved to an element of the wrong kind.
    #[error("Invalid object in document: expected {expected}, found {found}")]
    UnexpectedElement {
        /// Element that was expected
        expected: &'static str,
        /// Element that was found
        found: String,
    },

    /// A block handle no longer refers to an attached element.
    #[error("Block {0} is not attached to the document")]
    DetachedBlock(NodeId),

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}

impl Error {
    /// Whether the error was caused by bad user input rather than an internal fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound(_)
                | Error::InvalidInput(_)
                | Error::UnknownFormat
                | Error::ConfigNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("notes.txt".to_string());
        assert_eq!(err.to_string(), "notes.txt is not a .docx file");

        let err = Error::UnknownOption("figures".to_string());
        assert_eq!(err.to_string(), "figures is not an implemented option");

        let err = Error::HeadingLevel("Heading".to_string());
        assert_eq!(
            err.to_string(),
            "Style label 'Heading' has no numeric heading level"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(Error::InputNotFound(PathBuf::from("a.docx")).is_input_error());
        assert!(Error::UnknownFormat.is_input_error());
        assert!(!Error::Xml("bad".to_string()).is_input_error());
    }
}
