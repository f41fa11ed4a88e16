//! Simple CSS selectors for locating nodes: `tag`, `*`, `#id`, `.class`,
//! `[attr]`, `[attr=value]`, descendant and child combinators, selector lists.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse_selector_list, SelectorError};

use crate::dom::{Dom, NodeData, NodeId};

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorComponent {
    /// Type selector (e.g. `a`), stored lowercase.
    Type(String),
    /// Universal selector: `*`.
    Universal,
    /// Class selector: `.classname`.
    Class(String),
    /// ID selector: `#id`.
    Id(String),
    /// Attribute presence `[name]` or equality `[name=value]`.
    Attribute { name: String, value: Option<String> },
}

impl SelectorComponent {
    fn matches(&self, data: &NodeData) -> bool {
        match self {
            Self::Type(tag) => data.tag == *tag,
            Self::Universal => true,
            Self::Class(class) => data.has_class(class),
            Self::Id(id) => data.id() == Some(id.as_str()),
            Self::Attribute { name, value } => match (data.attribute(name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            },
        }
    }
}

/// A combinator between compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant combinator (whitespace): `A B`.
    Descendant,
    /// Child combinator: `A > B`.
    Child,
}

/// A sequence of simple selectors with no combinator between them, e.g. `a.nav[target]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub components: Vec<SelectorComponent>,
}

impl CompoundSelector {
    fn matches(&self, data: &NodeData) -> bool {
        self.components.iter().all(|c| c.matches(data))
    }
}

/// A complex selector: the subject compound plus the combinator chain leading to it.
///
/// `head` is the leftmost compound; each entry of `tail` pairs a combinator
/// with the compound to its right. The last compound is the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub head: CompoundSelector,
    pub tail: Vec<(Combinator, CompoundSelector)>,
}

impl Selector {
    /// Whether `node` in `dom` matches this selector.
    pub fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        let mut compounds: Vec<&CompoundSelector> = vec![&self.head];
        let mut combinators = Vec::with_capacity(self.tail.len());
        for (combinator, compound) in &self.tail {
            combinators.push(*combinator);
            compounds.push(compound);
        }
        match_from(dom, node, &compounds, &combinators)
    }
}

/// Right-to-left match: `compounds.last()` against `node`, then walk up for
/// the remaining compounds. Descendant steps backtrack over every ancestor.
fn match_from(
    dom: &Dom,
    node: NodeId,
    compounds: &[&CompoundSelector],
    combinators: &[Combinator],
) -> bool {
    let Some((subject, rest)) = compounds.split_last() else {
        return true;
    };
    let Some(data) = dom.get(node) else {
        return false;
    };
    if !subject.matches(data) {
        return false;
    }
    let Some((combinator, rest_combinators)) = combinators.split_last() else {
        return true;
    };
    match combinator {
        Combinator::Child => dom
            .parent(node)
            .is_some_and(|parent| match_from(dom, parent, rest, rest_combinators)),
        Combinator::Descendant => dom
            .ancestors(node)
            .into_iter()
            .any(|ancestor| match_from(dom, ancestor, rest, rest_combinators)),
    }
}

/// A comma-separated selector list; matches if any member matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<Selector>,
}

impl SelectorList {
    /// Parse a selector list.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        parse_selector_list(input)
    }

    /// Whether `node` matches any selector in the list.
    pub fn matches(&self, dom: &Dom, node: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(dom, node))
    }
}
