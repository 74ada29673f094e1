//! `.docx` package parser using zip and quick-xml.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::{CompressionMethod, ZipArchive};

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{
    Compression, Document, Package, PackageEntry, StyleMap, DOCUMENT_PART, STYLES_PART,
};

use super::options::{ErrorMode, ParseOptions};
use super::styles::parse_styles;
use super::xml::parse_element_tree;

/// Word-processing document parser.
pub struct DocxParser {
    package: Package,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a `.docx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a `.docx` file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a package from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut package = Package::new();

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let compression = match file.compression() {
                CompressionMethod::Stored => Compression::Stored,
                _ => Compression::Deflated,
            };
            let name = file.name().to_string();
            let mut contents = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut contents)?;
            package.push(PackageEntry {
                name,
                data: contents,
                compression,
            });
        }

        log::debug!("Read package with {} entries", package.len());
        Ok(Self { package, options })
    }

    /// Parse a package from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a package from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Package entries read from the archive.
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Parse the main document part and styles into a [`Document`].
    pub fn parse(self) -> Result<Document> {
        let part = self
            .package
            .get(DOCUMENT_PART)
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        let root = parse_element_tree(&part.data)?;
        let styles = self.load_styles()?;
        Document::new(root, styles, self.package)
    }

    fn load_styles(&self) -> Result<StyleMap> {
        let Some(entry) = self.package.get(STYLES_PART) else {
            log::debug!("No styles part, using built-in style names");
            return Ok(StyleMap::new());
        };
        match parse_styles(&entry.data) {
            Ok(styles) => Ok(styles),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Ignoring unreadable styles part: {}", e);
                Ok(StyleMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_package(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT: &str = r#"<w:document xmlns:w="urn:w"><w:body><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn test_parse_package() {
        let data = build_package(&[
            ("[Content_Types].xml", "<Types/>"),
            (DOCUMENT_PART, DOCUMENT),
        ]);
        let doc = DocxParser::from_bytes(&data).unwrap().parse().unwrap();
        let para = doc.paragraphs().next().unwrap();
        assert_eq!(para.text(), "Intro");
        assert_eq!(para.style_name(), "Heading 1");
        assert_eq!(doc.package().len(), 2);
    }

    #[test]
    fn test_missing_document_part() {
        let data = build_package(&[("[Content_Types].xml", "<Types/>")]);
        let result = DocxParser::from_bytes(&data).unwrap().parse();
        assert!(matches!(result, Err(Error::MissingPart(_))));
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxParser::from_bytes(b"plain text, not a package");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_lenient_styles() {
        let data = build_package(&[(DOCUMENT_PART, DOCUMENT), (STYLES_PART, "<w:styles>")]);

        let strict = DocxParser::from_bytes(&data).unwrap().parse();
        assert!(matches!(strict, Err(Error::Xml(_))));

        let lenient = DocxParser::from_bytes_with_options(&data, ParseOptions::new().lenient())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(
            lenient.paragraphs().next().unwrap().style_name(),
            "Heading 1"
        );
    }
}
