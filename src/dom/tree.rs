//! Tree operations: create, attribute and content setters, append, remove, walk.

use std::collections::{HashSet, VecDeque};

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};
use super::tags;
use crate::config::DomConfig;
use crate::element::Content;
use crate::error::MountError;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// An in-memory document tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`, attached or not. Parent/child
/// relationships are stored in secondary maps so that node removal is
/// O(subtree size) and lookup is O(1). A node created with
/// [`create_element`](Self::create_element) exists in the arena but belongs
/// to no parent until it is appended.
#[derive(Debug)]
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
    custom_elements: HashSet<String>,
    strict_attributes: bool,
}

impl Dom {
    /// Create an empty DOM with the default (strict) configuration.
    pub fn new() -> Self {
        Self::with_config(DomConfig::default())
    }

    /// Create an empty DOM from a config.
    ///
    /// Custom element names that fail validation are skipped.
    pub fn with_config(config: DomConfig) -> Self {
        let mut dom = Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            custom_elements: HashSet::new(),
            strict_attributes: config.strict_attributes,
        };
        for name in &config.custom_elements {
            if let Err(err) = dom.define_element(name) {
                tracing::warn!(%err, "skipping custom element from config");
            }
        }
        dom
    }

    /// Register a custom element name so that it can be created.
    pub fn define_element(&mut self, name: &str) -> Result<(), MountError> {
        tags::validate_custom_element_name(name)?;
        if self.custom_elements.insert(name.to_owned()) {
            tracing::debug!(name, "custom element defined");
        }
        Ok(())
    }

    /// Whether `tag` names an element this DOM can create.
    pub fn is_supported(&self, tag: &str) -> bool {
        let tag = tag.to_ascii_lowercase();
        tags::is_html_element(&tag) || self.custom_elements.contains(&tag)
    }

    /// Insert a root-level node (no parent), bypassing validation.
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`, bypassing validation.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, MountError> {
        if !self.nodes.contains_key(parent) {
            return Err(MountError::DetachedContainer);
        }
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.attach(parent, id);
        Ok(id)
    }

    /// Create a detached element.
    ///
    /// The tag is lowercased and must be a known HTML element or a
    /// registered custom element.
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId, MountError> {
        let normalized = tag.to_ascii_lowercase();
        if !tags::is_html_element(&normalized) && !self.custom_elements.contains(&normalized) {
            return Err(MountError::UnsupportedElementType {
                tag: tag.to_owned(),
            });
        }
        let id = self.nodes.insert(NodeData::new(normalized));
        self.children.insert(id, Vec::new());
        Ok(id)
    }

    /// Set (or replace) an attribute on a node.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), MountError> {
        tags::validate_attribute_name(name)?;
        if self.strict_attributes {
            tags::check_strict_value(name, value)?;
        }
        let data = self
            .nodes
            .get_mut(id)
            .ok_or(MountError::DetachedContainer)?;
        data.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.nodes.get_mut(id)?.attributes.remove(name)
    }

    /// Replace a node's content. No-op if the node does not exist.
    pub fn set_content(&mut self, id: NodeId, content: Content) {
        if let Some(data) = self.nodes.get_mut(id) {
            data.content = content;
        }
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// An already attached child is moved. Fails with
    /// [`MountError::DetachedContainer`] if either node does not exist and
    /// with [`MountError::HierarchyRequest`] if `child` is `parent`, one of its
    /// ancestors, or the document root.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), MountError> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(MountError::DetachedContainer);
        }
        if child == parent || self.root == Some(child) || self.ancestors(parent).contains(&child)
        {
            return Err(MountError::HierarchyRequest);
        }
        self.detach(child);
        self.attach(parent, child);
        Ok(())
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the `NodeData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<NodeData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        self.detach(id);
        if self.root == Some(id) {
            self.root = None;
        }

        let mut pending = VecDeque::from([id]);
        let mut removed = None;
        while let Some(current) = pending.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                pending.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }
        removed
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.parent.remove(child) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&c| c != child);
            }
        }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node in insertion order. Returns an empty slice
    /// if the node has no children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the top of its tree, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data. Writes through this bypass validation.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    /// The document root, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the DOM is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the DOM contains a node with the given id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// ```text
    ///        div#root
    ///       /        \
    ///    nav#a      main#b
    ///    /   \
    ///  a#c   a#d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div").with_id("root"));
        let a = dom.insert_child(root, NodeData::new("nav").with_id("a")).unwrap();
        let b = dom.insert_child(root, NodeData::new("main").with_id("b")).unwrap();
        let c = dom.insert_child(a, NodeData::new("a").with_id("c")).unwrap();
        let d = dom.insert_child(a, NodeData::new("a").with_id("d")).unwrap();
        (dom, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root() {
        let mut dom = Dom::new();
        let id = dom.insert(NodeData::new("html"));
        assert_eq!(dom.root(), Some(id));
        let _second = dom.insert(NodeData::new("div"));
        assert_eq!(dom.root(), Some(id));
    }

    #[test]
    fn insert_child_into_removed_parent() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("div"));
        dom.remove(root);
        assert_eq!(
            dom.insert_child(root, NodeData::new("p")),
            Err(MountError::DetachedContainer)
        );
    }

    #[test]
    fn parent_and_children() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.parent(a), Some(root));
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
    }

    #[test]
    fn ancestors() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.ancestors(c), vec![a, root]);
        assert!(dom.ancestors(root).is_empty());
    }

    #[test]
    fn create_element_is_detached_and_lowercased() {
        let mut dom = Dom::new();
        let id = dom.create_element("DIV").unwrap();
        assert_eq!(dom.get(id).unwrap().tag, "div");
        assert_eq!(dom.parent(id), None);
        assert_eq!(dom.root(), None);
    }

    #[test]
    fn create_element_unknown_tag() {
        let mut dom = Dom::new();
        let err = dom.create_element("bogus-tag").unwrap_err();
        assert_eq!(
            err,
            MountError::UnsupportedElementType {
                tag: "bogus-tag".into()
            }
        );
        assert!(dom.is_empty());
    }

    #[test]
    fn define_element_enables_creation() {
        let mut dom = Dom::new();
        dom.define_element("bogus-tag").unwrap();
        assert!(dom.is_supported("bogus-tag"));
        let id = dom.create_element("bogus-tag").unwrap();
        assert_eq!(dom.get(id).unwrap().tag, "bogus-tag");
    }

    #[test]
    fn define_element_rejects_invalid_name() {
        let mut dom = Dom::new();
        assert_eq!(
            dom.define_element("widget"),
            Err(MountError::InvalidElementName {
                name: "widget".into()
            })
        );
    }

    #[test]
    fn config_registers_custom_elements() {
        let config = DomConfig::new()
            .with_custom_element("user-card")
            .with_custom_element("NotValid");
        let dom = Dom::with_config(config);
        assert!(dom.is_supported("user-card"));
        assert!(!dom.is_supported("NotValid"));
    }

    #[test]
    fn set_attribute_preserves_name_case() {
        let mut dom = Dom::new();
        let id = dom.create_element("div").unwrap();
        dom.set_attribute(id, "dataFoo", "1").unwrap();
        dom.set_attribute(id, "ID", "x").unwrap();
        dom.set_attribute(id, "id", "y").unwrap();
        let node = dom.get(id).unwrap();
        assert_eq!(node.attribute("dataFoo"), Some("1"));
        assert_eq!(node.attribute("datafoo"), None);
        assert_eq!(node.attribute("ID"), Some("x"));
        assert_eq!(node.attribute("id"), Some("y"));
        assert_eq!(node.attributes.len(), 3);
    }

    #[test]
    fn strict_mode_checks_url_attributes_in_any_case() {
        let mut dom = Dom::new();
        let id = dom.create_element("a").unwrap();
        let err = dom.set_attribute(id, "HREF", "javascript:alert(1)").unwrap_err();
        assert!(matches!(err, MountError::InvalidAttributeValue { .. }));
    }

    #[test]
    fn set_attribute_strict_rejects_javascript_url() {
        let mut dom = Dom::new();
        let id = dom.create_element("a").unwrap();
        let err = dom.set_attribute(id, "href", "javascript:void(0)").unwrap_err();
        assert!(matches!(err, MountError::InvalidAttributeValue { ref name, .. } if name == "href"));
        assert!(dom.get(id).unwrap().attributes.is_empty());
    }

    #[test]
    fn set_attribute_lenient_accepts_javascript_url() {
        let mut dom = Dom::with_config(DomConfig::new().with_strict_attributes(false));
        let id = dom.create_element("a").unwrap();
        dom.set_attribute(id, "href", "javascript:void(0)").unwrap();
        // Names are validated regardless of strictness.
        assert!(dom.set_attribute(id, "bad name", "x").is_err());
    }

    #[test]
    fn remove_attribute() {
        let mut dom = Dom::new();
        let id = dom.create_element("a").unwrap();
        dom.set_attribute(id, "title", "t").unwrap();
        assert_eq!(dom.remove_attribute(id, "TITLE"), None);
        assert_eq!(dom.remove_attribute(id, "title"), Some("t".into()));
        assert_eq!(dom.remove_attribute(id, "title"), None);
    }

    #[test]
    fn set_content_replaces() {
        let mut dom = Dom::new();
        let id = dom.create_element("p").unwrap();
        dom.set_content(id, Content::text("one"));
        dom.set_content(id, Content::raw("<b>two</b>"));
        assert_eq!(dom.get(id).unwrap().content, Content::raw("<b>two</b>"));
    }

    #[test]
    fn append_child_moves_node() {
        let (mut dom, _root, a, b, c, d) = build_tree();
        dom.append_child(b, c).unwrap();
        assert_eq!(dom.parent(c), Some(b));
        assert_eq!(dom.children(a), &[d]);
        assert_eq!(dom.children(b), &[c]);
    }

    #[test]
    fn append_child_rejects_cycles() {
        let (mut dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.append_child(c, a), Err(MountError::HierarchyRequest));
        assert_eq!(dom.append_child(a, a), Err(MountError::HierarchyRequest));
        let loose = dom.create_element("section").unwrap();
        assert_eq!(dom.append_child(loose, root), Err(MountError::HierarchyRequest));
    }

    #[test]
    fn append_child_to_removed_container() {
        let (mut dom, _root, a, ..) = build_tree();
        let p = dom.create_element("p").unwrap();
        dom.remove(a);
        assert_eq!(dom.append_child(a, p), Err(MountError::DetachedContainer));
        assert_eq!(dom.parent(p), None);
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        let removed = dom.remove(a).unwrap();
        assert_eq!(removed.tag, "nav");
        for gone in [a, c, d] {
            assert!(!dom.contains(gone));
        }
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.len(), 2);
    }

    #[test]
    fn remove_root_and_stale_id() {
        let (mut dom, root, ..) = build_tree();
        dom.remove(root);
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
        assert!(dom.remove(root).is_none());
    }

    #[test]
    fn walk_depth_first() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(dom.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn default_impl() {
        let dom = Dom::default();
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }
}
