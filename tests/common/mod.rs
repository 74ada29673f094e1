//! Helpers for building `.docx` fixtures in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

/// Styles part using the stored names Word writes for built-in styles.
pub fn styles_xml() -> String {
    let style = |id: &str, name: &str| {
        format!(
            r#"<w:style w:type="paragraph" w:styleId="{}"><w:name w:val="{}"/></w:style>"#,
            id, name
        )
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{}"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>{}{}{}{}{}{}</w:styles>"#,
        NS,
        style("Heading1", "heading 1"),
        style("Heading2", "heading 2"),
        style("Title", "Title"),
        style("Subtitle", "Subtitle"),
        style("Caption", "caption"),
        style("ListParagraph", "List Paragraph"),
    )
}

/// A paragraph with an optional style id.
pub fn p(style: Option<&str>, text: &str) -> String {
    let ppr = style
        .map(|s| format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, s))
        .unwrap_or_default();
    format!(
        r#"<w:p>{}<w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        ppr, text
    )
}

/// A body paragraph followed by a citation marker.
pub fn cited(text: &str, citation: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{} </w:t></w:r><w:sdt><w:sdtPr><w:citation/></w:sdtPr><w:sdtContent><w:r><w:t>{}</w:t></w:r></w:sdtContent></w:sdt></w:p>"#,
        text, citation
    )
}

/// A body-level bibliography marker.
pub fn bibliography(entries: &[&str]) -> String {
    let paragraphs: String = entries.iter().map(|e| p(None, e)).collect();
    format!(
        r#"<w:sdt><w:sdtPr><w:docPartObj><w:docPartGallery w:val="Bibliographies"/></w:docPartObj></w:sdtPr><w:sdtContent>{}</w:sdtContent></w:sdt>"#,
        paragraphs
    )
}

/// A one-row table with one paragraph per cell.
pub fn table(cells: &[String]) -> String {
    let cells: String = cells
        .iter()
        .map(|c| format!("<w:tc><w:tcPr/>{}</w:tc>", c))
        .collect();
    format!("<w:tbl><w:tblPr/><w:tr>{}</w:tr></w:tbl>", cells)
}

/// The main document part around the given blocks.
pub fn document_xml(blocks: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#,
        NS,
        blocks.concat()
    )
}

/// A complete `.docx` archive around the given blocks.
pub fn build_docx(blocks: &[String]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("word/document.xml", document_xml(blocks)),
        ("word/styles.xml", styles_xml()),
    ];
    for (name, content) in parts {
        writer.start_file(name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
