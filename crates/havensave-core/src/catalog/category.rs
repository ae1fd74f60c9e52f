use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed identifier categories of the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdCategory {
    Attribute,
    Skill,
    Trait,
    Condition,
    StorageItem,
    Research,
    Craft,
}

impl IdCategory {
    pub const ALL: &'static [IdCategory] = &[
        IdCategory::Attribute,
        IdCategory::Skill,
        IdCategory::Trait,
        IdCategory::Condition,
        IdCategory::StorageItem,
        IdCategory::Research,
        IdCategory::Craft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdCategory::Attribute => "attribute",
            IdCategory::Skill => "skill",
            IdCategory::Trait => "trait",
            IdCategory::Condition => "condition",
            IdCategory::StorageItem => "storage_item",
            IdCategory::Research => "research",
            IdCategory::Craft => "craft",
        }
    }
}

impl fmt::Display for IdCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
