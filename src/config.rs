//! DOM configuration: attribute strictness and custom element registration.

// ---------------------------------------------------------------------------
// DomConfig
// ---------------------------------------------------------------------------

/// Configuration for an in-memory [`Dom`](crate::dom::Dom).
#[derive(Debug, Clone)]
pub struct DomConfig {
    /// Reject control characters in attribute values and `javascript:` URLs
    /// in URL-valued attributes.
    pub strict_attributes: bool,
    /// Custom element names registered when the DOM is created.
    pub custom_elements: Vec<String>,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            strict_attributes: true,
            custom_elements: Vec::new(),
        }
    }
}

impl DomConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set attribute strictness (builder).
    pub fn with_strict_attributes(mut self, strict: bool) -> Self {
        self.strict_attributes = strict;
        self
    }

    /// Register a custom element name (builder).
    pub fn with_custom_element(mut self, name: impl Into<String>) -> Self {
        self.custom_elements.push(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        let config = DomConfig::default();
        assert!(config.strict_attributes);
        assert!(config.custom_elements.is_empty());
    }

    #[test]
    fn builder_chain() {
        let config = DomConfig::new()
            .with_strict_attributes(false)
            .with_custom_element("user-card")
            .with_custom_element("app-shell");
        assert!(!config.strict_attributes);
        assert_eq!(config.custom_elements, vec!["user-card", "app-shell"]);
    }
}
