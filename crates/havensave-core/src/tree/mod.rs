//! Attributed tree: the in-memory form of a parsed save document.
//!
//! A tree is built once per loaded file and then only read by the scanner
//! and the comparator.

pub mod node;
pub mod xml;

pub use node::{AttributedTree, Attributes, Node, Preorder};
pub use xml::{load_document, parse_document};
