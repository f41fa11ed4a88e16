//! Element descriptors: the plain data description of one node before it is mounted.

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// The flat payload placed inside a node.
///
/// Content is never parsed into nested descriptors. Text is stored verbatim
/// and escaped when serialized; raw content is trusted markup and is emitted
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// No payload.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Trusted markup, inserted without escaping.
    Raw(String),
}

impl Content {
    /// Create text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create raw (trusted markup) content.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// The stored string, whichever variant holds it. Empty content reads as `""`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Text(s) | Self::Raw(s) => s,
        }
    }

    /// Whether there is no payload at all.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Whether this content bypasses escaping.
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// ElementDescriptor
// ---------------------------------------------------------------------------

/// Description of a single node: type tag, open attribute set, flat content.
///
/// # Examples
///
/// ```
/// use tagmount::ElementDescriptor;
///
/// let link = ElementDescriptor::new("a")
///     .attr("href", "https://example.com")
///     .attr("target", "_blank")
///     .text("Click here");
/// assert_eq!(link.attributes().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    tag: String,
    attributes: BTreeMap<String, String>,
    content: Content,
}

impl ElementDescriptor {
    /// Create a descriptor with no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            content: Content::Empty,
        }
    }

    /// Set an attribute (builder). Setting the same name again replaces the value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set several attributes at once (builder).
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set text content (builder).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Set raw, unescaped markup as content (builder).
    pub fn raw_content(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Raw(markup.into());
        self
    }

    /// Set content of any kind (builder).
    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    /// The node type name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attribute mapping.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// The content payload.
    pub fn payload(&self) -> &Content {
        &self.content
    }
}
