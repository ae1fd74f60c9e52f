//! Game version detection.

use crate::tree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root attributes that name the version, in priority order
pub const ROOT_VERSION_ATTRS: &[&str] = &["version", "gameVersion", "saveVersion", "alpha"];

/// `gamedata` attributes that name the version, in priority order
pub const METADATA_VERSION_ATTRS: &[&str] = &["version", "gameVersion"];

pub const METADATA_TAG: &str = "gamedata";

/// Label for saves recognised by a structural fingerprint
pub const FINGERPRINT_MODERN: &str = "Alpha 20+";

/// Label when nothing identifies the version
pub const INFERRED_LEGACY: &str = "Alpha <20 (inferred)";

/// Where a detected version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    RootAttribute,
    Metadata,
    Fingerprint,
    Legacy,
}

impl VersionSource {
    /// Whether the version was read from data rather than inferred
    pub fn is_explicit(&self) -> bool {
        matches!(self, VersionSource::RootAttribute | VersionSource::Metadata)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedVersion {
    pub label: String,
    pub source: VersionSource,
}

impl fmt::Display for DetectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Detect the game version of a document rooted at `root`.
///
/// Explicit attributes on the root win, then those on the `gamedata` child,
/// then structural fingerprints (`gamedata@galaxyCount`, or any
/// `starmap/systems/l@gen`), and finally the legacy sentinel.
pub fn detect_version(root: &Node) -> DetectedVersion {
    if let Some(label) = first_attr(root, ROOT_VERSION_ATTRS) {
        return DetectedVersion {
            label,
            source: VersionSource::RootAttribute,
        };
    }

    let metadata = root.child(METADATA_TAG);
    if let Some(label) = metadata.and_then(|m| first_attr(m, METADATA_VERSION_ATTRS)) {
        return DetectedVersion {
            label,
            source: VersionSource::Metadata,
        };
    }

    if has_modern_fingerprint(root, metadata) {
        return DetectedVersion {
            label: FINGERPRINT_MODERN.to_string(),
            source: VersionSource::Fingerprint,
        };
    }

    DetectedVersion {
        label: INFERRED_LEGACY.to_string(),
        source: VersionSource::Legacy,
    }
}

fn first_attr(node: &Node, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| node.attr(k))
        .map(str::to_string)
}

fn has_modern_fingerprint(root: &Node, metadata: Option<&Node>) -> bool {
    if metadata.is_some_and(|m| m.attributes.contains_key("galaxyCount")) {
        return true;
    }
    root.child("starmap")
        .and_then(|s| s.child("systems"))
        .is_some_and(|systems| {
            systems
                .children_named("l")
                .any(|l| l.attributes.contains_key("gen"))
        })
}
