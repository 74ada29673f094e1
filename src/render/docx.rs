//! `.docx` package writer.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::xml::write_document_xml;
use crate::error::Result;
use crate::model::{Compression, Document, DOCUMENT_PART};

/// Serialize a document back into a `.docx` archive.
///
/// Every package entry is written in its original order and compression;
/// only the main document part is regenerated.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    let document_xml = write_document_xml(doc)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut wrote_document = false;

    for entry in doc.package().entries() {
        let data = if entry.name == DOCUMENT_PART {
            wrote_document = true;
            &document_xml
        } else {
            &entry.data
        };
        writer.start_file(entry.name.as_str(), file_options(entry.compression))?;
        writer.write_all(data)?;
    }

    if !wrote_document {
        writer.start_file(DOCUMENT_PART, file_options(Compression::Deflated))?;
        writer.write_all(&document_xml)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Write a document to a `.docx` file, replacing any existing file.
pub fn save_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let data = to_docx_bytes(doc)?;
    std::fs::write(path, data)?;
    log::debug!("Saved document to {}", path.display());
    Ok(())
}

fn file_options(compression: Compression) -> SimpleFileOptions {
    let method = match compression {
        Compression::Stored => CompressionMethod::Stored,
        Compression::Deflated => CompressionMethod::Deflated,
    };
    SimpleFileOptions::default().compression_method(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Package, PackageEntry};
    use crate::parser::{parse_document_xml, DocxParser};

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="urn:w"><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn test_document_only_package() {
        let doc = parse_document_xml(DOCUMENT.as_bytes(), None).unwrap();
        let bytes = to_docx_bytes(&doc).unwrap();

        let reparsed = DocxParser::from_bytes(&bytes).unwrap().parse().unwrap();
        assert_eq!(reparsed.plain_text(), "Hello");
        assert_eq!(reparsed.package().len(), 1);
    }

    #[test]
    fn test_entries_keep_order_and_compression() {
        let mut package = Package::new();
        package.push(PackageEntry {
            name: "[Content_Types].xml".to_string(),
            data: b"<Types/>".to_vec(),
            compression: Compression::Stored,
        });
        package.push(PackageEntry::new(DOCUMENT_PART, DOCUMENT.as_bytes().to_vec()));
        package.push(PackageEntry::new("word/media/image1.png", vec![0x89, b'P', b'N', b'G']));

        let root = crate::parser::parse_element_tree(DOCUMENT.as_bytes()).unwrap();
        let doc = Document::new(root, Default::default(), package).unwrap();
        let bytes = to_docx_bytes(&doc).unwrap();

        let parser = DocxParser::from_bytes(&bytes).unwrap();
        let names: Vec<&str> = parser
            .package()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["[Content_Types].xml", DOCUMENT_PART, "word/media/image1.png"]
        );
        assert_eq!(parser.package().entries()[0].compression, Compression::Stored);
        assert_eq!(
            parser.package().get("word/media/image1.png").unwrap().data,
            vec![0x89, b'P', b'N', b'G']
        );
    }
}
