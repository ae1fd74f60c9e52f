//! Scan output types.

use crate::catalog::IdCategory;
use crate::tree::{Attributes, Node};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category an unknown identifier was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanCategory {
    Attribute,
    Skill,
    Trait,
    Condition,
    StorageItem,
    Research,
    Craft,
    /// Found by the catch-all pass and unknown in every category
    Generic,
}

impl ScanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanCategory::Generic => "generic",
            ScanCategory::Attribute => IdCategory::Attribute.as_str(),
            ScanCategory::Skill => IdCategory::Skill.as_str(),
            ScanCategory::Trait => IdCategory::Trait.as_str(),
            ScanCategory::Condition => IdCategory::Condition.as_str(),
            ScanCategory::StorageItem => IdCategory::StorageItem.as_str(),
            ScanCategory::Research => IdCategory::Research.as_str(),
            ScanCategory::Craft => IdCategory::Craft.as_str(),
        }
    }

    /// Section heading used in reports
    pub fn heading(&self) -> &'static str {
        match self {
            ScanCategory::Attribute => "Attributes",
            ScanCategory::Skill => "Skills",
            ScanCategory::Trait => "Traits",
            ScanCategory::Condition => "Conditions",
            ScanCategory::StorageItem => "Storage Items",
            ScanCategory::Research => "Research",
            ScanCategory::Craft => "Crafts",
            ScanCategory::Generic => "Generic IDs",
        }
    }
}

impl From<IdCategory> for ScanCategory {
    fn from(category: IdCategory) -> Self {
        match category {
            IdCategory::Attribute => ScanCategory::Attribute,
            IdCategory::Skill => ScanCategory::Skill,
            IdCategory::Trait => ScanCategory::Trait,
            IdCategory::Condition => ScanCategory::Condition,
            IdCategory::StorageItem => ScanCategory::StorageItem,
            IdCategory::Research => ScanCategory::Research,
            IdCategory::Craft => ScanCategory::Craft,
        }
    }
}

impl fmt::Display for ScanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier absent from the catalog, with where it was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownItem {
    pub id_value: i64,
    pub category: ScanCategory,
    /// Approximate location of the first sighting
    pub path: String,
    pub tag: String,
    pub attributes: Attributes,
    pub occurrences: u32,
}

impl fmt::Display for UnknownItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {} ID {} in <{}> at {}",
            self.category, self.id_value, self.tag, self.path
        )
    }
}

/// Outcome of scanning one tree.
///
/// Invariant: `total_ids_found == known_count + Σ occurrences`, and no two
/// items share `(id_value, category)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub source_id: String,
    pub scanned_at: DateTime<Utc>,
    pub total_ids_found: u64,
    pub known_count: u64,
    /// First-sighting order; use [`ScanResult::sorted_unknowns`] for output
    pub unknown_items: Vec<UnknownItem>,
}

impl ScanResult {
    /// Number of distinct unknown identifiers
    pub fn unknown_count(&self) -> usize {
        self.unknown_items.len()
    }

    /// Total sightings of unknown identifiers
    pub fn unknown_occurrences(&self) -> u64 {
        self.unknown_items
            .iter()
            .map(|i| u64::from(i.occurrences))
            .sum()
    }

    pub fn is_clean(&self) -> bool {
        self.unknown_items.is_empty()
    }

    /// Unknown items ordered by `(category name, id_value)`
    pub fn sorted_unknowns(&self) -> Vec<&UnknownItem> {
        let mut items: Vec<&UnknownItem> = self.unknown_items.iter().collect();
        items.sort_by(|a, b| {
            (a.category.as_str(), a.id_value).cmp(&(b.category.as_str(), b.id_value))
        });
        items
    }

    /// Equality ignoring `scanned_at`
    pub fn same_findings(&self, other: &ScanResult) -> bool {
        self.source_id == other.source_id
            && self.total_ids_found == other.total_ids_found
            && self.known_count == other.known_count
            && self.unknown_items == other.unknown_items
    }
}

/// Running counters for one scan pass.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    total: u64,
    known: u64,
    items: Vec<UnknownItem>,
    index: HashMap<(ScanCategory, i64), usize>,
}

impl Tally {
    pub(crate) fn known(&mut self) {
        self.total += 1;
        self.known += 1;
    }

    /// Record an unknown sighting; returns true when it is the first one
    pub(crate) fn unknown(
        &mut self,
        id_value: i64,
        category: ScanCategory,
        node: &Node,
        path: impl FnOnce() -> String,
    ) -> bool {
        self.total += 1;
        if let Some(&pos) = self.index.get(&(category, id_value)) {
            self.items[pos].occurrences += 1;
            return false;
        }
        self.index.insert((category, id_value), self.items.len());
        self.items.push(UnknownItem {
            id_value,
            category,
            path: path(),
            tag: node.tag.clone(),
            attributes: node.attributes.clone(),
            occurrences: 1,
        });
        true
    }

    pub(crate) fn finish(self, source_id: &str, scanned_at: DateTime<Utc>) -> ScanResult {
        ScanResult {
            source_id: source_id.to_string(),
            scanned_at,
            total_ids_found: self.total,
            known_count: self.known,
            unknown_items: self.items,
        }
    }
}
