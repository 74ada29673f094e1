//! Reader for `word/styles.xml`.

use super::xml::parse_element_tree;
use crate::error::Result;
use crate::model::StyleMap;

/// Build a style map from the styles part.
pub fn parse_styles(data: &[u8]) -> Result<StyleMap> {
    let root = parse_element_tree(data)?;
    let mut styles = StyleMap::new();

    for style in root.child_elements().filter(|e| e.is("style")) {
        let Some(id) = style.attribute("styleId") else {
            continue;
        };
        let Some(name) = style.find_child("name").and_then(|n| n.attribute("val")) else {
            continue;
        };
        styles.insert(id, name);

        let is_paragraph = style.attribute("type") == Some("paragraph");
        let is_default = matches!(style.attribute("default"), Some("1" | "true" | "on"));
        if is_paragraph && is_default {
            styles.set_default_paragraph(name);
        }
    }

    Ok(styles)
}
