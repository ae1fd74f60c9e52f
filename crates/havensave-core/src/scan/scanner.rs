//! Two-pass identifier scanner.

use crate::catalog::ReferenceCatalog;
use crate::errors::Result;
use crate::scan::model::{ScanCategory, ScanResult, Tally};
use crate::scan::rules::{
    covered_tags, rules_by_anchor, TargetRule, GENERIC_ID_ATTRIBUTES, TARGET_RULES,
};
use crate::tree::{load_document, AttributedTree};
use crate::{log_op_end, log_op_start};
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

/// Scanner bound to a catalog and a targeted rule table.
///
/// Holds no mutable state; one instance can scan any number of trees,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct IdScanner<'c> {
    catalog: &'c ReferenceCatalog,
    rules: &'c [TargetRule],
    covered: BTreeSet<&'static str>,
}

impl<'c> IdScanner<'c> {
    /// Scanner using the standard rule table
    pub fn new(catalog: &'c ReferenceCatalog) -> Self {
        Self::with_rules(catalog, TARGET_RULES)
    }

    pub fn with_rules(catalog: &'c ReferenceCatalog, rules: &'c [TargetRule]) -> Self {
        Self {
            catalog,
            rules,
            covered: covered_tags(rules),
        }
    }

    pub fn scan(&self, tree: &AttributedTree) -> ScanResult {
        let start = Instant::now();
        log_op_start!("scan", source_id = tree.source_id());

        let mut tally = Tally::default();
        self.targeted_pass(tree, &mut tally);
        self.catch_all_pass(tree, &mut tally);
        let result = tally.finish(tree.source_id(), Utc::now());

        log_op_end!(
            "scan",
            duration_ms = start.elapsed().as_millis() as u64,
            total_ids = result.total_ids_found,
            unknown_ids = result.unknown_count() as u64
        );
        result
    }

    fn targeted_pass(&self, tree: &AttributedTree, tally: &mut Tally) {
        for (anchor_tag, rules) in rules_by_anchor(self.rules) {
            for anchor in tree.root().descendants_named(anchor_tag) {
                for rule in &rules {
                    for target in rule.targets(anchor) {
                        let Some(id) = target.attr_int(rule.id_attr) else {
                            continue;
                        };
                        if self.catalog.is_known(id, rule.category) {
                            tally.known();
                            continue;
                        }
                        let category = ScanCategory::from(rule.category);
                        if tally.unknown(id, category, target, || rule.describe(anchor)) {
                            tracing::warn!(
                                rule = rule.name,
                                category = category.as_str(),
                                id_value = id,
                                "unknown identifier"
                            );
                        }
                    }
                }
            }
        }
    }

    fn catch_all_pass(&self, tree: &AttributedTree, tally: &mut Tally) {
        for node in tree.iter() {
            if self.covered.contains(node.tag.as_str()) {
                continue;
            }
            for attr in GENERIC_ID_ATTRIBUTES {
                let Some(id) = node.attr_int(attr) else {
                    continue;
                };
                if self.catalog.is_known_any(id) {
                    tally.known();
                } else if tally.unknown(id, ScanCategory::Generic, node, || {
                    format!("//{}", node.tag)
                }) {
                    tracing::debug!(tag = %node.tag, attr = *attr, id_value = id, "unknown generic identifier");
                }
            }
        }
    }
}

/// Scan a tree with the standard rule table
pub fn scan(tree: &AttributedTree, catalog: &ReferenceCatalog) -> ScanResult {
    IdScanner::new(catalog).scan(tree)
}

/// Load an XML save file and scan it
///
/// # Errors
///
/// Propagates load failures (`Io`, `DocumentParse`); scanning itself cannot fail.
pub fn scan_file(path: &Path, catalog: &ReferenceCatalog) -> Result<ScanResult> {
    let tree = load_document(path)?;
    Ok(scan(&tree, catalog))
}
