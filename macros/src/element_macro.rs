//! element! macro: parse a JSX-like element literal and generate an
//! `ElementDescriptor` builder chain.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Expr, Ident, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// An attribute or content value: a string literal or a `{expr}` block.
#[derive(Clone)]
pub(crate) enum Value {
    Literal(LitStr),
    Expr(Box<Expr>),
}

impl Value {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(syn::token::Brace) {
            let inner;
            braced!(inner in input);
            Ok(Value::Expr(Box::new(inner.parse()?)))
        } else {
            Ok(Value::Literal(input.parse()?))
        }
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Literal(lit) => write!(f, "Literal({:?})", lit.value()),
            Value::Expr(expr) => write!(f, "Expr({})", quote!(#expr)),
        }
    }
}

/// A parsed attribute: `name="value"` or `name={expr}`.
#[derive(Debug, Clone)]
pub(crate) struct Attribute {
    pub name: String,
    pub value: Value,
}

/// A parsed element: `<tag attrs... />` or `<tag attrs...> content </tag>`.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub tag: String,
    pub attrs: Vec<Attribute>,
    pub content: Option<Value>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a possibly hyphenated name such as `a`, `type`, `user-card`, `x-1`.
fn parse_name(input: ParseStream) -> Result<(String, Span)> {
    let first = Ident::parse_any(input)?;
    let span = first.span();
    let mut name = first.unraw().to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        name.push('-');
        if input.peek(LitInt) {
            name.push_str(&input.parse::<LitInt>()?.to_string());
        } else {
            name.push_str(&Ident::parse_any(input)?.unraw().to_string());
        }
    }
    Ok((name, span))
}

impl Parse for Element {
    fn parse(input: ParseStream) -> Result<Self> {
        input.parse::<Token![<]>()?;
        let (tag, tag_span) = parse_name(input)?;

        let mut attrs = Vec::new();
        loop {
            if input.peek(Token![/]) {
                input.parse::<Token![/]>()?;
                input.parse::<Token![>]>()?;
                return Ok(Element {
                    tag,
                    attrs,
                    content: None,
                });
            }
            if input.peek(Token![>]) {
                input.parse::<Token![>]>()?;
                break;
            }
            let (name, name_span) = parse_name(input)?;
            if attrs.iter().any(|a: &Attribute| a.name == name) {
                return Err(Error::new(name_span, format!("duplicate attribute `{name}`")));
            }
            input.parse::<Token![=]>()?;
            let value = Value::parse(input)?;
            attrs.push(Attribute { name, value });
        }

        let content = if input.peek(LitStr) || input.peek(syn::token::Brace) {
            Some(Value::parse(input)?)
        } else {
            None
        };

        if input.peek(Token![<]) && !input.peek2(Token![/]) {
            return Err(input.error(
                "nested elements are not supported; content is a single string or `{expr}`",
            ));
        }

        input.parse::<Token![<]>()?;
        input.parse::<Token![/]>()?;
        let (closing, closing_span) = parse_name(input)?;
        if closing != tag {
            let mut err = Error::new(
                closing_span,
                format!("mismatched closing tag: expected `</{tag}>`, found `</{closing}>`"),
            );
            err.combine(Error::new(tag_span, "opening tag here"));
            return Err(err);
        }
        input.parse::<Token![>]>()?;

        Ok(Element {
            tag,
            attrs,
            content,
        })
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn generate_element(elem: &Element) -> TokenStream {
    let tag = &elem.tag;

    let attr_calls = elem.attrs.iter().map(|attr| {
        let name = &attr.name;
        match &attr.value {
            Value::Literal(lit) => quote! { .attr(#name, #lit) },
            Value::Expr(expr) => quote! { .attr(#name, #expr) },
        }
    });

    let content_call = match &elem.content {
        Some(Value::Literal(lit)) => quote! { .text(#lit) },
        Some(Value::Expr(expr)) => quote! { .content(#expr) },
        None => quote! {},
    };

    quote! {
        ::tagmount::ElementDescriptor::new(#tag) #(#attr_calls)* #content_call
    }
}

/// Entry point: generate code for the element! macro.
pub(crate) fn element_impl(input: TokenStream) -> Result<TokenStream> {
    if input.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "element! macro requires an element",
        ));
    }
    let elem: Element = syn::parse2(input)?;
    Ok(generate_element(&elem))
}

// ===========================================================================
// Tests
// ===========================================================================
