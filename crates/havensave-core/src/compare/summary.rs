use crate::tree::Node;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Depth-bounded shape of a subtree.
///
/// Only the first child of each tag is expanded; siblings with the same tag
/// are represented by the count in `child_tag_counts`. A node deeper than
/// the limit keeps its tag and is marked `truncated` with nothing else filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub tag: String,
    pub attribute_keys: BTreeSet<String>,
    pub child_tag_counts: BTreeMap<String, usize>,
    pub children: Vec<StructuralSummary>,
    pub truncated: bool,
}

impl StructuralSummary {
    /// Summarize `node`, which sits at depth 0
    pub fn build(node: &Node, max_depth: usize) -> Self {
        Self::at_depth(node, 0, max_depth)
    }

    fn at_depth(node: &Node, depth: usize, max_depth: usize) -> Self {
        if depth > max_depth {
            return Self::truncated(&node.tag);
        }

        let mut child_tag_counts = BTreeMap::new();
        let mut children = Vec::new();
        for child in &node.children {
            let count = child_tag_counts.entry(child.tag.clone()).or_insert(0);
            if *count == 0 {
                children.push(Self::at_depth(child, depth + 1, max_depth));
            }
            *count += 1;
        }

        Self {
            tag: node.tag.clone(),
            attribute_keys: node.attributes.keys().map(str::to_string).collect(),
            child_tag_counts,
            children,
            truncated: false,
        }
    }

    fn truncated(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attribute_keys: BTreeSet::new(),
            child_tag_counts: BTreeMap::new(),
            children: Vec::new(),
            truncated: true,
        }
    }

    /// Summary of the first child with `tag`
    pub fn child(&self, tag: &str) -> Option<&StructuralSummary> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn child_tags(&self) -> BTreeSet<&str> {
        self.child_tag_counts.keys().map(String::as_str).collect()
    }

    /// Number of summarized nodes, truncated ones included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(StructuralSummary::node_count)
            .sum::<usize>()
    }
}
