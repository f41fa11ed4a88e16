//! Snapshot rendering helpers.
//!
//! Render a subtree as an indented outline, one node per line, suitable for
//! `insta` snapshots and plain string assertions.

use std::fmt::Write;

use crate::dom::{Dom, NodeId};
use crate::element::Content;

/// Render `id` and its descendants as an indented outline.
///
/// Each line is `tag`, then `#id` if present, then every other attribute as
/// `[name="value"]` in key order, then the content: quoted for text,
/// prefixed with `raw` for raw markup. Children are indented two spaces.
/// Lines are joined with `'\n'` with no trailing newline.
///
/// # Examples
///
/// ```
/// use tagmount::dom::{Dom, NodeData};
/// use tagmount::testing::tree_to_string;
///
/// let mut dom = Dom::new();
/// let root = dom.insert(NodeData::new("div").with_id("root"));
/// dom.insert_child(root, NodeData::new("p").with_content("hi")).unwrap();
/// assert_eq!(tree_to_string(&dom, root), "div#root\n  p \"hi\"");
/// ```
pub fn tree_to_string(dom: &Dom, id: NodeId) -> String {
    let mut lines = Vec::new();
    write_outline(dom, id, 0, &mut lines);
    lines.join("\n")
}

/// Render the document root's subtree. Empty if there is no root.
pub fn dom_to_string(dom: &Dom) -> String {
    dom.root()
        .map(|root| tree_to_string(dom, root))
        .unwrap_or_default()
}

fn write_outline(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(id) else {
        return;
    };
    let mut line = "  ".repeat(depth);
    line.push_str(&data.tag);
    if let Some(node_id) = data.id() {
        line.push('#');
        line.push_str(node_id);
    }
    for (name, value) in data.attributes.iter().filter(|(name, _)| *name != "id") {
        let _ = write!(line, "[{name}={value:?}]");
    }
    match &data.content {
        Content::Empty => {}
        Content::Text(text) => {
            let _ = write!(line, " {text:?}");
        }
        Content::Raw(markup) => {
            let _ = write!(line, " raw {markup:?}");
        }
    }
    lines.push(line);
    for &child in dom.children(id) {
        write_outline(dom, child, depth + 1, lines);
    }
}
