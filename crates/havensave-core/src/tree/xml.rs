//! XML loading into an [`AttributedTree`].

use crate::errors::{HavenError, Result};
use crate::tree::node::{AttributedTree, Node};
use std::path::Path;

/// Parse XML text into a tree. `source_id` names the document in results.
///
/// # Errors
///
/// `DocumentParse` when the text is not well-formed XML.
pub fn parse_document(text: &str, source_id: &str) -> Result<AttributedTree> {
    let doc = roxmltree::Document::parse(text).map_err(|e| HavenError::DocumentParse {
        source_id: source_id.to_string(),
        message: e.to_string(),
    })?;
    Ok(AttributedTree::new(source_id, convert(doc.root_element())))
}

/// Read and parse an XML file; the path becomes the tree's source id.
///
/// # Errors
///
/// `Io` if the file cannot be read, `DocumentParse` if it is not XML.
pub fn load_document(path: &Path) -> Result<AttributedTree> {
    let text = std::fs::read_to_string(path).map_err(|e| HavenError::io("load_document", e))?;
    parse_document(&text, &path.display().to_string())
}

fn convert(element: roxmltree::Node<'_, '_>) -> Node {
    let mut node = Node::new(element.tag_name().name());
    for attr in element.attributes() {
        node.attributes.insert(attr.name(), attr.value());
    }
    node.children = element
        .children()
        .filter(|c| c.is_element())
        .map(convert)
        .collect();
    node
}
