//! Per-save profile: the facts the comparator diffs.

use crate::compare::summary::StructuralSummary;
use crate::compare::version::{detect_version, VersionSource, METADATA_TAG};
use crate::tree::{AttributedTree, Node};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Facts extracted from one save document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveProfile {
    pub source_id: String,
    pub version: String,
    pub version_source: VersionSource,
    pub game_mode: Option<String>,
    pub id_counter: Option<i64>,
    pub sector_count: Option<i64>,
    pub root_attributes: BTreeMap<String, String>,
    pub gamedata_attributes: BTreeMap<String, String>,
    pub structure: StructuralSummary,
    /// Sector entity types plus `Ship` / `Character` when present
    pub entity_types: BTreeSet<String>,
    pub facility_types: BTreeSet<String>,
    /// Facility and item identifiers mapped to their type or name
    pub item_names: BTreeMap<String, String>,
}

impl SaveProfile {
    pub fn analyze(tree: &AttributedTree, max_depth: usize) -> Self {
        let root = tree.root();
        let detected = detect_version(root);
        let gamedata = root.child(METADATA_TAG);
        let (facility_types, item_names) = facilities_and_items(root);

        let profile = Self {
            source_id: tree.source_id().to_string(),
            version: detected.label,
            version_source: detected.source,
            game_mode: root.attr("mode").map(str::to_string),
            id_counter: root.attr_int("idCounter"),
            sector_count: gamedata.and_then(|g| g.attr_int("sectorCount")),
            root_attributes: attr_map(root),
            gamedata_attributes: gamedata.map(attr_map).unwrap_or_default(),
            structure: StructuralSummary::build(root, max_depth),
            entity_types: entity_types(root),
            facility_types,
            item_names,
        };

        tracing::debug!(
            source_id = %profile.source_id,
            version = %profile.version,
            entity_types = profile.entity_types.len(),
            facility_types = profile.facility_types.len(),
            item_ids = profile.item_names.len(),
            "save profile built"
        );
        profile
    }
}

fn attr_map(node: &Node) -> BTreeMap<String, String> {
    node.attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn entity_types(root: &Node) -> BTreeSet<String> {
    let mut types: BTreeSet<String> = root
        .descendants_named("sector")
        .flat_map(|sector| sector.descendants_named("entity"))
        .filter_map(|entity| entity.attr("type"))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if root.descendants_named("ship").next().is_some() {
        types.insert("Ship".to_string());
    }
    if root.descendants_named("character").next().is_some() {
        types.insert("Character".to_string());
    }
    types
}

fn facilities_and_items(root: &Node) -> (BTreeSet<String>, BTreeMap<String, String>) {
    let mut facility_types = BTreeSet::new();
    let mut item_names = BTreeMap::new();

    for facility in root.descendants_named("facility") {
        let Some(kind) = facility.attr("type").filter(|t| !t.is_empty()) else {
            continue;
        };
        facility_types.insert(kind.to_string());
        if let Some(id) = facility.attr("id").filter(|i| !i.is_empty()) {
            item_names.insert(id.to_string(), kind.to_string());
        }
    }

    for item in root.descendants_named("item") {
        let id = item.attr("id").filter(|i| !i.is_empty());
        let name = item
            .attr("type")
            .filter(|t| !t.is_empty())
            .or_else(|| item.attr("name"))
            .filter(|n| !n.is_empty());
        if let (Some(id), Some(name)) = (id, name) {
            item_names.insert(id.to_string(), name.to_string());
        }
    }

    (facility_types, item_names)
}
