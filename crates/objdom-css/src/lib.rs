//! objdom CSS - selector engine
//!
//! Selector parsing and structural matching for the objdom wrapper layer:
//! compound selectors, comma-separated lists, attribute matchers, and
//! tree-structural pseudo-classes, evaluated directly against the
//! objdom-dom tree. Combinators and pseudo-elements are rejected at parse
//! time; there is nothing here for them to select against.

mod matcher;
mod parser;

pub use parser::{
    AttributeMatcher, AttributeSelector, CompoundSelector, NthExpression, PseudoClass,
    SelectorComponent, SelectorList,
};

/// Parse a selector list
pub fn parse_selector(input: &str) -> Result<SelectorList, SelectorError> {
    SelectorList::parse(input)
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported combinator '{combinator}'")]
    UnsupportedCombinator { combinator: char },

    #[error("pseudo-elements are not supported: '::{name}'")]
    UnsupportedPseudoElement { name: String },

    #[error("invalid selector: '{selector}'")]
    Invalid { selector: String },
}
