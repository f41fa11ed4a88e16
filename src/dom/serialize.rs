//! HTML serialization of subtrees.

use std::fmt::Write;

use super::node::NodeId;
use super::tags;
use super::tree::Dom;
use crate::element::Content;

impl Dom {
    /// Serialize a node, its attributes, content and children as HTML.
    ///
    /// Returns an empty string if the node does not exist.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id);
        out
    }

    /// Serialize only what is inside a node: its content followed by its children.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_inner(&mut out, id);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let Some(data) = self.get(id) else {
            return;
        };
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            // Writing into a String cannot fail.
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
        }
        out.push('>');
        if tags::is_void_element(&data.tag) {
            return;
        }
        self.write_inner(out, id);
        let _ = write!(out, "</{}>", data.tag);
    }

    fn write_inner(&self, out: &mut String, id: NodeId) {
        let Some(data) = self.get(id) else {
            return;
        };
        match &data.content {
            Content::Empty => {}
            Content::Text(text) => out.push_str(&escape_text(text)),
            Content::Raw(markup) => out.push_str(markup),
        }
        for &child in self.children(id) {
            self.write_node(out, child);
        }
    }
}

/// Escape text content: `&`, `<`, `>`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value: `&`, `"`, `<`, `>`.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
