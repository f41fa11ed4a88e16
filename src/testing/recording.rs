//! A host wrapper that records every toolkit call and can inject failures.

use crate::dom::{Dom, NodeId};
use crate::element::Content;
use crate::error::MountError;
use crate::host::Host;

/// One call made through the [`Host`] trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    CreateNode(String),
    SetContent(NodeId),
    SetAttribute(NodeId, String),
    AppendChild { container: NodeId, node: NodeId },
    DiscardNode(NodeId),
    RemoveNode(NodeId),
}

/// A failure to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Reject the attribute with this name.
    Attribute(String),
    /// Reject every append as if the container were gone.
    Append,
}

/// Wraps a [`Dom`], logging calls and optionally failing some of them.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub dom: Dom,
    calls: Vec<HostCall>,
    faults: Vec<Fault>,
}

impl RecordingHost {
    /// Wrap an existing DOM.
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            calls: Vec::new(),
            faults: Vec::new(),
        }
    }

    /// Inject a failure (builder).
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.faults.push(fault);
        self
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Host for RecordingHost {
    type Node = NodeId;

    fn create_node(&mut self, tag: &str) -> Result<NodeId, MountError> {
        self.calls.push(HostCall::CreateNode(tag.to_owned()));
        self.dom.create_node(tag)
    }

    fn set_content(&mut self, node: NodeId, content: &Content) {
        self.calls.push(HostCall::SetContent(node));
        Host::set_content(&mut self.dom, node, content);
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), MountError> {
        self.calls.push(HostCall::SetAttribute(node, name.to_owned()));
        if self.faults.contains(&Fault::Attribute(name.to_owned())) {
            return Err(MountError::invalid_attribute(name, "rejected by injected fault"));
        }
        self.dom.set_attribute(node, name, value)
    }

    fn append_child(&mut self, container: NodeId, node: NodeId) -> Result<(), MountError> {
        self.calls.push(HostCall::AppendChild { container, node });
        if self.faults.contains(&Fault::Append) {
            return Err(MountError::DetachedContainer);
        }
        self.dom.append_child(container, node)
    }

    fn discard_node(&mut self, node: NodeId) {
        self.calls.push(HostCall::DiscardNode(node));
        self.dom.discard_node(node);
    }

    fn remove_node(&mut self, node: NodeId) -> Result<(), MountError> {
        self.calls.push(HostCall::RemoveNode(node));
        self.dom.remove_node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut host = RecordingHost::default();
        let root = host.create_node("div").unwrap();
        let p = host.create_node("p").unwrap();
        host.set_attribute(p, "class", "lead").unwrap();
        host.append_child(root, p).unwrap();
        assert_eq!(
            host.calls(),
            &[
                HostCall::CreateNode("div".into()),
                HostCall::CreateNode("p".into()),
                HostCall::SetAttribute(p, "class".into()),
                HostCall::AppendChild { container: root, node: p },
            ]
        );
        host.clear_calls();
        assert!(host.calls().is_empty());
    }

    #[test]
    fn injected_faults() {
        let mut host = RecordingHost::default()
            .with_fault(Fault::Attribute("data-x".into()))
            .with_fault(Fault::Append);
        let root = host.create_node("div").unwrap();
        let p = host.create_node("p").unwrap();
        assert!(host.set_attribute(p, "title", "ok").is_ok());
        assert!(matches!(
            host.set_attribute(p, "data-x", "1"),
            Err(MountError::InvalidAttributeValue { .. })
        ));
        assert_eq!(host.append_child(root, p), Err(MountError::DetachedContainer));
        assert_eq!(host.dom.parent(p), None);
    }
}
