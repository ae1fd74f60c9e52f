//! Reference catalog of identifiers known to this build.
//!
//! The catalog is partitioned by [`IdCategory`] and carries a derived union
//! set for catch-all classification. It is built once and shared read-only;
//! nothing mutates it after construction.

mod builtin;
pub mod category;

pub use category::IdCategory;

use crate::errors::{HavenError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

/// Immutable, versioned set of known identifiers per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCatalog {
    version: String,
    sets: BTreeMap<IdCategory, BTreeSet<i64>>,
    union: BTreeSet<i64>,
}

static BUILTIN: OnceLock<ReferenceCatalog> = OnceLock::new();

impl ReferenceCatalog {
    /// Start building a catalog with the given version label
    pub fn builder(version: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder {
            version: version.into(),
            sets: IdCategory::ALL
                .iter()
                .map(|c| (*c, BTreeSet::new()))
                .collect(),
        }
    }

    /// The catalog compiled into this build, constructed on first use
    pub fn builtin() -> &'static ReferenceCatalog {
        BUILTIN.get_or_init(|| {
            builtin::ENTRIES
                .iter()
                .fold(
                    ReferenceCatalog::builder(builtin::VERSION),
                    |b, (category, ids)| b.with_ids(*category, ids.iter().copied()),
                )
                .build()
        })
    }

    /// Parse a catalog override from TOML.
    ///
    /// ```toml
    /// version = "alpha-20"
    /// attributes = [210, 212]
    /// skills = [1, 2, 3]
    /// ```
    ///
    /// Categories that are not listed are empty.
    ///
    /// # Errors
    ///
    /// `InvalidCatalog` when the text is not valid TOML or names an unknown key.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| HavenError::InvalidCatalog {
            reason: e.to_string(),
        })?;
        let builder = ReferenceCatalog::builder(file.version)
            .with_ids(IdCategory::Attribute, file.attributes)
            .with_ids(IdCategory::Skill, file.skills)
            .with_ids(IdCategory::Trait, file.traits)
            .with_ids(IdCategory::Condition, file.conditions)
            .with_ids(IdCategory::StorageItem, file.storage_items)
            .with_ids(IdCategory::Research, file.research)
            .with_ids(IdCategory::Craft, file.crafts);
        Ok(builder.build())
    }

    /// Load a TOML catalog override from disk
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidCatalog` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| HavenError::io("load_catalog", e))?;
        Self::from_toml_str(&text)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether `id` is known within one category
    pub fn is_known(&self, id: i64, category: IdCategory) -> bool {
        self.sets
            .get(&category)
            .is_some_and(|ids| ids.contains(&id))
    }

    /// Whether `id` is known in any category
    pub fn is_known_any(&self, id: i64) -> bool {
        self.union.contains(&id)
    }

    pub fn known_ids(&self, category: IdCategory) -> impl Iterator<Item = i64> + '_ {
        self.sets.get(&category).into_iter().flatten().copied()
    }

    pub fn category_len(&self, category: IdCategory) -> usize {
        self.sets.get(&category).map_or(0, BTreeSet::len)
    }

    /// Number of distinct identifiers across all categories
    pub fn len(&self) -> usize {
        self.union.len()
    }

    pub fn is_empty(&self) -> bool {
        self.union.is_empty()
    }
}

/// Accumulates identifiers before freezing them into a [`ReferenceCatalog`].
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    version: String,
    sets: BTreeMap<IdCategory, BTreeSet<i64>>,
}

impl CatalogBuilder {
    pub fn with_ids(mut self, category: IdCategory, ids: impl IntoIterator<Item = i64>) -> Self {
        self.sets.entry(category).or_default().extend(ids);
        self
    }

    pub fn build(self) -> ReferenceCatalog {
        let union = self.sets.values().flatten().copied().collect();
        ReferenceCatalog {
            version: self.version,
            sets: self.sets,
            union,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    version: String,
    #[serde(default)]
    attributes: Vec<i64>,
    #[serde(default)]
    skills: Vec<i64>,
    #[serde(default)]
    traits: Vec<i64>,
    #[serde(default)]
    conditions: Vec<i64>,
    #[serde(default)]
    storage_items: Vec<i64>,
    #[serde(default)]
    research: Vec<i64>,
    #[serde(default)]
    crafts: Vec<i64>,
}
