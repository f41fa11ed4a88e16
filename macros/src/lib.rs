//! Proc macros for tagmount: `element!` literal syntax for element descriptors.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `tagmount`.

use proc_macro::TokenStream;

mod element_macro;

/// JSX-like element literal.
///
/// Expands to a `tagmount::ElementDescriptor` builder chain.
///
/// # Syntax
///
/// - `<tag attr="value" />` — element without content
/// - `<tag attr="value">"text"</tag>` — element with text content
/// - `<tag attr={expr}>{expr}</tag>` — values and content from expressions;
///   a content expression goes through `Into<Content>`, so `Content::raw(..)`
///   works for trusted markup
///
/// Tag and attribute names may contain hyphens (`<user-card data-id="7" />`).
/// Nested elements are not supported: content is a single flat payload.
///
/// # Example
///
/// ```ignore
/// let link = element!(<a href="https://example.com" target="_blank">"Click here"</a>);
/// ```
#[proc_macro]
pub fn element(input: TokenStream) -> TokenStream {
    element_macro::element_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
