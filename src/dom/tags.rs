//! Tag and attribute rules: known HTML elements, custom element names,
//! attribute name/value validation.

use crate::error::MountError;

/// HTML elements the in-memory DOM can create without registration.
const HTML_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt",
    "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins",
    "kbd", "label", "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "picture", "pre",
    "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "search", "section", "select",
    "slot", "small", "source", "span", "strong", "style", "sub", "summary", "sup", "table",
    "tbody", "td", "template", "textarea", "tfoot", "th", "thead", "time", "title", "tr",
    "track", "u", "ul", "var", "video", "wbr",
];

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Hyphenated names that are not valid custom element names.
const RESERVED_CUSTOM_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Attributes whose value is a URL.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction", "poster"];

/// Whether `tag` (already lowercase) is a built-in HTML element.
pub fn is_html_element(tag: &str) -> bool {
    HTML_ELEMENTS.contains(&tag)
}

/// Whether `tag` (already lowercase) is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Check that `name` is usable as a custom element name.
///
/// It must start with a lowercase ASCII letter, contain a hyphen, contain no
/// uppercase ASCII, and not be one of the reserved SVG/MathML names.
pub fn validate_custom_element_name(name: &str) -> Result<(), MountError> {
    let valid = name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c == '-' || c == '.' || c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
        && !RESERVED_CUSTOM_NAMES.contains(&name);
    if valid {
        Ok(())
    } else {
        Err(MountError::InvalidElementName {
            name: name.to_owned(),
        })
    }
}

/// Validate an attribute name. Names are case-sensitive and kept as given.
pub fn validate_attribute_name(name: &str) -> Result<(), MountError> {
    if name.is_empty() {
        return Err(MountError::invalid_attribute(name, "attribute name is empty"));
    }
    if let Some(bad) = name.chars().find(|&c| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
    }) {
        return Err(MountError::invalid_attribute(
            name,
            format!("attribute name contains forbidden character {bad:?}"),
        ));
    }
    Ok(())
}

/// Apply strict-mode value checks for an attribute.
pub fn check_strict_value(name: &str, value: &str) -> Result<(), MountError> {
    if let Some(bad) = value
        .chars()
        .find(|&c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return Err(MountError::invalid_attribute(
            name,
            format!("value contains control character {bad:?}"),
        ));
    }
    let is_url = URL_ATTRIBUTES
        .iter()
        .any(|url| url.eq_ignore_ascii_case(name));
    if is_url && has_javascript_scheme(value) {
        return Err(MountError::invalid_attribute(
            name,
            "javascript: URLs are not allowed",
        ));
    }
    Ok(())
}

/// URL parsers strip leading whitespace and ignore embedded tabs/newlines,
/// so `" java\tscript:"` must be caught too.
fn has_javascript_scheme(value: &str) -> bool {
    let scheme: String = value
        .trim_start()
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .take("javascript:".len())
        .collect();
    scheme.eq_ignore_ascii_case("javascript:")
}
