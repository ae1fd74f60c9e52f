//! Declarative table of targeted identifier locations.

use crate::catalog::IdCategory;
use crate::tree::Node;
use std::collections::BTreeSet;

/// Attribute names inspected by the catch-all pass.
pub const GENERIC_ID_ATTRIBUTES: &[&str] = &["id", "type", "objId", "itemId", "typeId"];

/// How a rule describes the location of what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Same text for every sighting
    Fixed(&'static str),
    /// Anchor qualified by one of its attributes, followed by the steps
    Labeled { label_attr: &'static str },
}

/// One targeted location: every `anchor` element strictly below the root,
/// then `steps` (first match for intermediate steps, every match for the last
/// one), then the identifier in `id_attr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRule {
    pub name: &'static str,
    pub anchor: &'static str,
    pub steps: &'static [&'static str],
    pub id_attr: &'static str,
    pub category: IdCategory,
    pub location: Location,
}

pub const TARGET_RULES: &[TargetRule] = &[
    TargetRule {
        name: "character-attribute",
        anchor: "c",
        steps: &["pers", "attr", "a"],
        id_attr: "id",
        category: IdCategory::Attribute,
        location: Location::Labeled { label_attr: "entId" },
    },
    TargetRule {
        name: "character-skill",
        anchor: "c",
        steps: &["pers", "skills", "s"],
        id_attr: "id",
        category: IdCategory::Skill,
        location: Location::Labeled { label_attr: "entId" },
    },
    TargetRule {
        name: "character-trait",
        anchor: "c",
        steps: &["pers", "traits", "t"],
        id_attr: "id",
        category: IdCategory::Trait,
        location: Location::Labeled { label_attr: "entId" },
    },
    TargetRule {
        name: "character-condition",
        anchor: "c",
        steps: &["pers", "conditions", "c"],
        id_attr: "id",
        category: IdCategory::Condition,
        location: Location::Labeled { label_attr: "entId" },
    },
    TargetRule {
        name: "storage-item",
        anchor: "item",
        steps: &[],
        id_attr: "id",
        category: IdCategory::StorageItem,
        location: Location::Fixed("//item"),
    },
    TargetRule {
        name: "storage-object",
        anchor: "s",
        steps: &[],
        id_attr: "objId",
        category: IdCategory::StorageItem,
        location: Location::Fixed("//s[@objId]"),
    },
    TargetRule {
        name: "research",
        anchor: "research",
        steps: &[],
        id_attr: "id",
        category: IdCategory::Research,
        location: Location::Fixed("//research"),
    },
    TargetRule {
        name: "craft",
        anchor: "craft",
        steps: &[],
        id_attr: "type",
        category: IdCategory::Craft,
        location: Location::Fixed("//craft"),
    },
];

impl TargetRule {
    /// Tag of the element that carries the identifier
    pub fn target_tag(&self) -> &'static str {
        self.steps.last().copied().unwrap_or(self.anchor)
    }

    /// Elements under `anchor` (inclusive when there are no steps) that this
    /// rule reads an identifier from
    pub fn targets<'a>(&self, anchor: &'a Node) -> Vec<&'a Node> {
        let Some((last, intermediate)) = self.steps.split_last() else {
            return vec![anchor];
        };
        let mut current = anchor;
        for step in intermediate {
            match current.child(step) {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }
        current.children_named(last).collect()
    }

    /// Location text for a sighting under `anchor`
    pub fn describe(&self, anchor: &Node) -> String {
        match self.location {
            Location::Fixed(text) => text.to_string(),
            Location::Labeled { label_attr } => {
                let label = anchor.attr(label_attr).unwrap_or("unknown");
                let mut path = format!("//{}[@{}='{}']", self.anchor, label_attr, label);
                for step in self.steps {
                    path.push('/');
                    path.push_str(step);
                }
                path
            }
        }
    }
}

/// Tags the catch-all pass must skip: every anchor and every target tag.
pub fn covered_tags(rules: &[TargetRule]) -> BTreeSet<&'static str> {
    rules
        .iter()
        .flat_map(|r| [r.anchor, r.target_tag()])
        .collect()
}

/// Distinct anchors in first-appearance order, each with its rules.
pub fn rules_by_anchor(rules: &[TargetRule]) -> Vec<(&'static str, Vec<&TargetRule>)> {
    let mut groups: Vec<(&'static str, Vec<&TargetRule>)> = Vec::new();
    for rule in rules {
        match groups.iter_mut().find(|(anchor, _)| *anchor == rule.anchor) {
            Some((_, members)) => members.push(rule),
            None => groups.push((rule.anchor, vec![rule])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covered_tags_match_targeted_elements() {
        let covered = covered_tags(TARGET_RULES);
        let expected: BTreeSet<&str> = ["a", "c", "craft", "item", "research", "s", "t"]
            .into_iter()
            .collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_character_rules_grouped_under_one_anchor() {
        let groups = rules_by_anchor(TARGET_RULES);
        let anchors: Vec<_> = groups.iter().map(|(a, _)| *a).collect();
        assert_eq!(anchors, vec!["c", "item", "s", "research", "craft"]);
        assert_eq!(groups[0].1.len(), 4);
    }

    #[test]
    fn test_targets_follow_first_intermediate_match() {
        let character = Node::new("c")
            .with_attr("entId", "12")
            .with_child(
                Node::new("pers").with_child(
                    Node::new("attr")
                        .with_child(Node::new("a").with_attr("id", "210"))
                        .with_child(Node::new("a").with_attr("id", "212")),
                ),
            )
            .with_child(Node::new("pers"));
        let rule = &TARGET_RULES[0];
        assert_eq!(rule.targets(&character).len(), 2);
        assert_eq!(rule.describe(&character), "//c[@entId='12']/pers/attr/a");
    }

    #[test]
    fn test_missing_intermediate_yields_nothing() {
        let character = Node::new("c").with_child(Node::new("pers"));
        assert!(TARGET_RULES[1].targets(&character).is_empty());
        assert_eq!(TARGET_RULES[1].describe(&character), "//c[@entId='unknown']/pers/skills/s");
    }
}
