use havensave_core::tree::{AttributedTree, Node};
use havensave_core::{IdCategory, ReferenceCatalog};

/// Small catalog: attributes {210}, skills {1, 2}
#[allow(dead_code)]
pub fn scenario_catalog() -> ReferenceCatalog {
    ReferenceCatalog::builder("test")
        .with_ids(IdCategory::Attribute, [210])
        .with_ids(IdCategory::Skill, [1, 2])
        .build()
}

/// Character block `<c entId=..><pers><attr>..</attr><skills>..</skills></pers></c>`
#[allow(dead_code)]
pub fn character(ent_id: &str, attrs: &[i64], skills: &[i64]) -> Node {
    let mut attr = Node::new("attr");
    for id in attrs {
        attr = attr.with_child(Node::new("a").with_attr("id", id.to_string()).with_attr("points", "3"));
    }
    let mut skill_block = Node::new("skills");
    for id in skills {
        skill_block = skill_block.with_child(Node::new("s").with_attr("sk", "1").with_attr("id", id.to_string()));
    }
    Node::new("c")
        .with_attr("entId", ent_id)
        .with_child(Node::new("pers").with_child(attr).with_child(skill_block))
}

/// Wrap nodes under a `<game>` root
#[allow(dead_code)]
pub fn save_tree(source_id: &str, children: Vec<Node>) -> AttributedTree {
    let mut root = Node::new("game");
    for child in children {
        root = root.with_child(child);
    }
    AttributedTree::new(source_id, root)
}

/// A newer-format save document
#[allow(dead_code)]
pub const NEWER_SAVE: &str = r#"<game mode="normal" idCounter="9000" seed="42">
  <gamedata sectorCount="12" galaxyCount="3"/>
  <ships>
    <ship sid="1">
      <facility id="31" type="Bed"/>
      <facility id="32" type="Reactor"/>
      <characters><character/></characters>
    </ship>
  </ships>
  <sectors><sector><entity type="Derelict"/></sector></sectors>
  <storage><item id="157" type="Metal"/></storage>
</game>"#;

/// An older-format save document
#[allow(dead_code)]
pub const OLDER_SAVE: &str = r#"<game mode="normal" idCounter="400" legacyFlag="1">
  <gamedata sectorCount="4"/>
  <ships>
    <ship>
      <facility id="31" type="Cot"/>
      <characters><character/></characters>
    </ship>
  </ships>
  <oldMarket/>
  <storage><item id="157" name="Metal"/></storage>
</game>"#;
