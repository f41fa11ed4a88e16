//! The element mounter: descriptor in, configured node appended to a container.

use crate::element::ElementDescriptor;
use crate::error::MountError;
use crate::host::Host;

/// Materialize `descriptor` as a new node and append it to `container`.
///
/// Steps, in order: create the node from the tag, set its content, apply
/// every attribute through the host's generic setter, append it as the last
/// child of `container`. The node is not attached until the last step, so no
/// half-configured node is ever visible in the container.
///
/// All-or-nothing: if any step fails, the created node is discarded and the
/// error is returned; the container is left exactly as it was. Mounting is
/// additive, so equal descriptors mounted twice produce two nodes.
///
/// Returns the handle of the new node, which [`unmount`] accepts.
///
/// # Examples
///
/// ```
/// use tagmount::{mount, Dom, ElementDescriptor, NodeData};
///
/// let mut dom = Dom::new();
/// let root = dom.insert(NodeData::new("div").with_id("root"));
/// let link = ElementDescriptor::new("a")
///     .attr("href", "https://example.com")
///     .text("Click here");
/// mount(&mut dom, &link, root).unwrap();
/// assert_eq!(
///     dom.inner_html(root),
///     r#"<a href="https://example.com">Click here</a>"#
/// );
/// ```
pub fn mount<H: Host>(
    host: &mut H,
    descriptor: &ElementDescriptor,
    container: H::Node,
) -> Result<H::Node, MountError> {
    let node = host.create_node(descriptor.tag())?;

    if let Err(err) = configure(host, descriptor, node) {
        tracing::debug!(tag = descriptor.tag(), %err, "mount rolled back");
        host.discard_node(node);
        return Err(err);
    }

    if let Err(err) = host.append_child(container, node) {
        tracing::debug!(tag = descriptor.tag(), ?container, %err, "mount rolled back");
        host.discard_node(node);
        return Err(err);
    }

    tracing::debug!(
        tag = descriptor.tag(),
        attributes = descriptor.attributes().len(),
        ?node,
        ?container,
        "element mounted"
    );
    Ok(node)
}

fn configure<H: Host>(
    host: &mut H,
    descriptor: &ElementDescriptor,
    node: H::Node,
) -> Result<(), MountError> {
    host.set_content(node, descriptor.payload());
    for (name, value) in descriptor.attributes() {
        host.set_attribute(node, name, value)?;
        tracing::trace!(name, value, "attribute applied");
    }
    Ok(())
}

/// Remove a mounted node, with its subtree, from its container and the host.
///
/// Pair with [`mount`] to replace an element; there is no in-place update.
pub fn unmount<H: Host>(host: &mut H, node: H::Node) -> Result<(), MountError> {
    host.remove_node(node)?;
    tracing::debug!(?node, "element unmounted");
    Ok(())
}
