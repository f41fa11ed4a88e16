//! DOM queries: by id, class, tag, predicate, and CSS selector.

use super::node::{NodeData, NodeId};
use super::tree::Dom;
use crate::selector::{SelectorError, SelectorList};

impl Dom {
    /// Find the first node in document order whose `id` attribute matches.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter_document()
            .find(|&(_, data)| data.id() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Find all nodes in document order that carry the given class.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.query_all(|data| data.has_class(class))
    }

    /// Find all nodes in document order with the given tag (case-insensitive).
    pub fn query_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.query_all(|data| data.tag == tag)
    }

    /// Find all nodes in document order matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_document()
            .filter(|(_, data)| predicate(data))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// First node in document order matching a CSS selector list.
    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .iter_document()
            .map(|(node_id, _)| node_id)
            .find(|&node_id| list.matches(self, node_id)))
    }

    /// All nodes in document order matching a CSS selector list.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .iter_document()
            .map(|(node_id, _)| node_id)
            .filter(|&node_id| list.matches(self, node_id))
            .collect())
    }

    /// Iterate over the nodes connected to the root, pre-order.
    ///
    /// Detached nodes (created but never appended) are not visited.
    fn iter_document(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.root()
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
            .into_iter()
            .filter_map(move |id| self.get(id).map(|data| (id, data)))
    }
}
