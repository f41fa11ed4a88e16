//! Error taxonomy for mounting and tree operations.

/// Errors returned by [`mount`](crate::mount::mount) and the host operations it drives.
///
/// A failed mount never leaves a node behind: whichever step fails, the
/// container and the host tree look exactly as they did before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The host does not know how to create a node of this type.
    #[error("unsupported element type: {tag:?}")]
    UnsupportedElementType { tag: String },
    /// The host rejected an attribute name or value.
    #[error("invalid value for attribute {name:?}: {reason}")]
    InvalidAttributeValue { name: String, reason: String },
    /// The container (or the node being removed) no longer exists.
    #[error("container is detached or destroyed")]
    DetachedContainer,
    /// Appending would make a node its own ancestor.
    #[error("cannot append a node into itself or its own descendant")]
    HierarchyRequest,
    /// A custom element name failed validation.
    #[error("invalid custom element name: {name:?}")]
    InvalidElementName { name: String },
}

impl MountError {
    pub(crate) fn invalid_attribute(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAttributeValue {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_tag() {
        let err = MountError::UnsupportedElementType {
            tag: "bogus-tag".into(),
        };
        assert_eq!(err.to_string(), r#"unsupported element type: "bogus-tag""#);
    }

    #[test]
    fn display_invalid_attribute() {
        let err = MountError::invalid_attribute("href", "javascript: URLs are not allowed");
        assert_eq!(
            err.to_string(),
            r#"invalid value for attribute "href": javascript: URLs are not allowed"#
        );
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(MountError::DetachedContainer, MountError::DetachedContainer);
        assert_ne!(MountError::DetachedContainer, MountError::HierarchyRequest);
    }
}
