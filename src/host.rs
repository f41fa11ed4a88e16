//! The host toolkit interface the mounter drives.
//!
//! A host owns native nodes and the tree they live in. [`mount`](crate::mount::mount)
//! only ever talks to a host through this trait, so any toolkit that can create
//! a node from a tag, set attributes generically, set content and append a
//! child can be mounted into.

use std::fmt::Debug;

use crate::dom::{Dom, NodeId};
use crate::element::Content;
use crate::error::MountError;

/// Node creation, attribute application and tree insertion primitives.
pub trait Host {
    /// Handle to a native node.
    type Node: Copy + Eq + Debug;

    /// Allocate a new, unattached node of the given type.
    ///
    /// Fails with [`MountError::UnsupportedElementType`] for unknown tags.
    fn create_node(&mut self, tag: &str) -> Result<Self::Node, MountError>;

    /// Replace the node's content.
    fn set_content(&mut self, node: Self::Node, content: &Content);

    /// Apply one attribute. The name is arbitrary; hosts decide what they accept.
    ///
    /// Fails with [`MountError::InvalidAttributeValue`] on rejection.
    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str)
        -> Result<(), MountError>;

    /// Append `node` as the last child of `container`.
    ///
    /// Fails with [`MountError::DetachedContainer`] if the container cannot
    /// accept children.
    fn append_child(&mut self, container: Self::Node, node: Self::Node) -> Result<(), MountError>;

    /// Destroy a node that was created but never appended.
    fn discard_node(&mut self, node: Self::Node);

    /// Detach a node from its parent and destroy it with its subtree.
    ///
    /// Fails with [`MountError::DetachedContainer`] if the node no longer exists.
    fn remove_node(&mut self, node: Self::Node) -> Result<(), MountError>;
}

impl Host for Dom {
    type Node = NodeId;

    fn create_node(&mut self, tag: &str) -> Result<NodeId, MountError> {
        self.create_element(tag)
    }

    fn set_content(&mut self, node: NodeId, content: &Content) {
        Dom::set_content(self, node, content.clone());
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), MountError> {
        Dom::set_attribute(self, node, name, value)
    }

    fn append_child(&mut self, container: NodeId, node: NodeId) -> Result<(), MountError> {
        Dom::append_child(self, container, node)
    }

    fn discard_node(&mut self, node: NodeId) {
        self.remove(node);
    }

    fn remove_node(&mut self, node: NodeId) -> Result<(), MountError> {
        self.remove(node)
            .map(|_| ())
            .ok_or(MountError::DetachedContainer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<H: Host>(host: &mut H, parent: H::Node) -> Result<H::Node, MountError> {
        let node = host.create_node("span")?;
        host.set_content(node, &Content::text("hi"));
        host.set_attribute(node, "title", "greeting")?;
        host.append_child(parent, node)?;
        Ok(node)
    }

    #[test]
    fn dom_implements_host() {
        let mut dom = Dom::new();
        let root = dom.create_element("div").unwrap();
        let span = build(&mut dom, root).unwrap();
        assert_eq!(dom.children(root), &[span]);
        assert_eq!(dom.outer_html(root), r#"<div><span title="greeting">hi</span></div>"#);
    }

    #[test]
    fn discard_and_remove() {
        let mut dom = Dom::new();
        let root = dom.create_element("div").unwrap();
        let loose = Host::create_node(&mut dom, "p").unwrap();
        dom.discard_node(loose);
        assert!(!dom.contains(loose));

        let span = build(&mut dom, root).unwrap();
        Host::remove_node(&mut dom, span).unwrap();
        assert!(dom.children(root).is_empty());
        assert_eq!(
            Host::remove_node(&mut dom, span),
            Err(MountError::DetachedContainer)
        );
    }
}
