//! Selector parsing
//!
//! A selector list is a comma-separated sequence of compound selectors;
//! a compound selector is a sequence of simple selectors with no
//! combinators between them (`div.item#main[href]:first-child`).

use crate::SelectorError;

/// A parsed, comma-separated selector list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList {
    pub(crate) compounds: Vec<CompoundSelector>,
}

/// A compound selector: simple selectors that must all hold on one element
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundSelector {
    pub(crate) components: Vec<SelectorComponent>,
}

/// A component of a compound selector
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Universal selector *
    Universal,
    /// Type selector (tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr], [attr=value], etc.
    Attribute(AttributeSelector),
    /// Pseudo-class :first-child, :nth-child(), etc.
    PseudoClass(PseudoClass),
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMatcher {
    /// [attr=value] - exact match
    Exact(String),
    /// [attr~=value] - whitespace-separated list contains
    Includes(String),
    /// [attr|=value] - exact or prefix with hyphen
    DashMatch(String),
    /// [attr^=value] - starts with
    Prefix(String),
    /// [attr$=value] - ends with
    Suffix(String),
    /// [attr*=value] - contains substring
    Substring(String),
}

impl AttributeSelector {
    /// Check if an attribute value matches
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (&self.matcher, value) {
            (None, Some(_)) => true, // [attr] - just check existence
            (_, None) => false,
            (Some(matcher), Some(val)) => {
                let val = if self.case_insensitive {
                    val.to_lowercase()
                } else {
                    val.to_string()
                };

                match matcher {
                    AttributeMatcher::Exact(expected) => {
                        let expected = if self.case_insensitive {
                            expected.to_lowercase()
                        } else {
                            expected.clone()
                        };
                        val == expected
                    }
                    AttributeMatcher::Includes(expected) => val.split_whitespace().any(|w| {
                        if self.case_insensitive {
                            w.to_lowercase() == expected.to_lowercase()
                        } else {
                            w == expected
                        }
                    }),
                    AttributeMatcher::DashMatch(expected) => {
                        val == *expected || val.starts_with(&format!("{}-", expected))
                    }
                    AttributeMatcher::Prefix(expected) => val.starts_with(expected.as_str()),
                    AttributeMatcher::Suffix(expected) => val.ends_with(expected.as_str()),
                    AttributeMatcher::Substring(expected) => val.contains(expected.as_str()),
                }
            }
        }
    }
}

/// Tree-structural pseudo-classes
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    FirstChild,
    LastChild,
    OnlyChild,
    NthChild(NthExpression),
    Empty,
    Root,
    Not(Box<SelectorComponent>),
}

/// An+B expression for :nth-child()
#[derive(Debug, Clone, PartialEq)]
pub struct NthExpression {
    /// Coefficient (A in An+B)
    pub a: i32,
    /// Offset (B in An+B)
    pub b: i32,
}

impl NthExpression {
    /// Create "odd" expression (2n+1)
    pub fn odd() -> Self {
        Self { a: 2, b: 1 }
    }

    /// Create "even" expression (2n)
    pub fn even() -> Self {
        Self { a: 2, b: 0 }
    }

    /// Create a simple index (0n+b)
    pub fn index(n: i32) -> Self {
        Self { a: 0, b: n }
    }

    /// Create An+B expression
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Parse from string like "2n+1", "odd", "even", "3"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "odd" => return Some(Self::odd()),
            "even" => return Some(Self::even()),
            _ => {}
        }

        if let Ok(n) = s.parse::<i32>() {
            return Some(Self::index(n));
        }

        let s = s.replace(' ', "");

        if let Some(n_pos) = s.find('n') {
            let a_str = &s[..n_pos];
            let a = if a_str.is_empty() || a_str == "+" {
                1
            } else if a_str == "-" {
                -1
            } else {
                a_str.parse().ok()?
            };

            let rest = &s[n_pos + 1..];
            let b = if rest.is_empty() { 0 } else { rest.parse().ok()? };

            return Some(Self::new(a, b));
        }

        None
    }

    /// Check if index n (1-based) matches this expression
    pub fn matches(&self, n: i32) -> bool {
        if self.a == 0 {
            return n == self.b;
        }

        let diff = n - self.b;
        if self.a > 0 {
            diff >= 0 && diff % self.a == 0
        } else {
            diff <= 0 && diff % self.a == 0
        }
    }
}

impl SelectorList {
    /// Parse a comma-separated selector list
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        tracing::debug!("Parsing selector: {}", input);

        let mut compounds = Vec::new();
        for part in split_top_level_commas(input) {
            let part = part.trim();
            if part.is_empty() {
                return Err(SelectorError::Empty);
            }
            compounds.push(CompoundSelector::parse(part)?);
        }

        if compounds.is_empty() {
            return Err(SelectorError::Empty);
        }

        Ok(Self { compounds })
    }
}

impl CompoundSelector {
    /// Parse one compound selector (no combinators)
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut components = Vec::new();
        for chunk in split_compound(input)? {
            components.push(parse_component(chunk)?);
        }
        if components.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { components })
    }
}

fn invalid(selector: &str) -> SelectorError {
    SelectorError::Invalid {
        selector: selector.to_string(),
    }
}

/// Split on commas outside brackets and parens
fn split_top_level_commas(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Split a compound selector into simple-selector chunks.
///
/// Whitespace and `>` / `+` / `~` between chunks are combinators, which
/// this engine does not evaluate; they fail the parse rather than match
/// nothing silently.
fn split_compound(input: &str) -> Result<Vec<&str>, SelectorError> {
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut bracket = 0i32;
    let mut paren = 0i32;

    for (i, c) in input.char_indices() {
        if bracket > 0 {
            match c {
                '[' => bracket += 1,
                ']' => bracket -= 1,
                _ => {}
            }
            continue;
        }
        if paren > 0 {
            match c {
                '(' => paren += 1,
                ')' => paren -= 1,
                _ => {}
            }
            continue;
        }

        match c {
            '(' => paren += 1,
            '[' => {
                if i > start {
                    chunks.push(&input[start..i]);
                    start = i;
                }
                bracket += 1;
            }
            ']' | ')' => return Err(invalid(input)),
            '>' | '+' | '~' => {
                return Err(SelectorError::UnsupportedCombinator { combinator: c });
            }
            c if c.is_whitespace() => {
                return Err(SelectorError::UnsupportedCombinator { combinator: ' ' });
            }
            '#' | '.' => {
                if i > start {
                    chunks.push(&input[start..i]);
                    start = i;
                }
            }
            ':' => {
                // keep "::" together so pseudo-elements are reported as such
                let second_colon = i == start + 1 && input[start..].starts_with(':');
                if i > start && !second_colon {
                    chunks.push(&input[start..i]);
                    start = i;
                }
            }
            _ => {}
        }
    }

    if bracket != 0 || paren != 0 {
        return Err(invalid(input));
    }
    if start < input.len() {
        chunks.push(&input[start..]);
    }
    Ok(chunks)
}

/// Parse a simple selector chunk
fn parse_component(chunk: &str) -> Result<SelectorComponent, SelectorError> {
    if chunk == "*" {
        return Ok(SelectorComponent::Universal);
    }

    if let Some(id) = chunk.strip_prefix('#') {
        if !id.is_empty() && is_valid_ident(id) {
            return Ok(SelectorComponent::Id(id.to_string()));
        }
        return Err(invalid(chunk));
    }

    if let Some(class) = chunk.strip_prefix('.') {
        if !class.is_empty() && is_valid_ident(class) {
            return Ok(SelectorComponent::Class(class.to_string()));
        }
        return Err(invalid(chunk));
    }

    if let Some(inner) = chunk.strip_prefix('[') {
        let inner = inner.strip_suffix(']').ok_or_else(|| invalid(chunk))?;
        return parse_attribute_selector(inner);
    }

    if let Some(name) = chunk.strip_prefix("::") {
        return Err(SelectorError::UnsupportedPseudoElement {
            name: name.to_string(),
        });
    }

    if let Some(pseudo) = chunk.strip_prefix(':') {
        return parse_pseudo_class(pseudo).map(SelectorComponent::PseudoClass);
    }

    if is_valid_ident(chunk) {
        return Ok(SelectorComponent::Type(chunk.to_lowercase()));
    }

    Err(invalid(chunk))
}

/// Check if string is a valid CSS identifier
fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Parse an attribute selector content (without brackets)
fn parse_attribute_selector(content: &str) -> Result<SelectorComponent, SelectorError> {
    let content = content.trim();

    // Case-insensitive flag
    let (content, case_insensitive) = match content
        .strip_suffix(" i")
        .or_else(|| content.strip_suffix(" I"))
    {
        Some(rest) => (rest.trim_end(), true),
        None => (content, false),
    };

    for (op, matcher_fn) in [
        ("~=", AttributeMatcher::Includes as fn(String) -> AttributeMatcher),
        ("|=", AttributeMatcher::DashMatch as fn(String) -> AttributeMatcher),
        ("^=", AttributeMatcher::Prefix as fn(String) -> AttributeMatcher),
        ("$=", AttributeMatcher::Suffix as fn(String) -> AttributeMatcher),
        ("*=", AttributeMatcher::Substring as fn(String) -> AttributeMatcher),
        ("=", AttributeMatcher::Exact as fn(String) -> AttributeMatcher),
    ] {
        if let Some(pos) = content.find(op) {
            let name = content[..pos].trim().to_string();
            let value = content[pos + op.len()..]
                .trim()
                .trim_matches('"')
                .trim_matches('\'')
                .to_string();

            if !is_valid_ident(&name) {
                return Err(invalid(content));
            }
            return Ok(SelectorComponent::Attribute(AttributeSelector {
                name,
                matcher: Some(matcher_fn(value)),
                case_insensitive,
            }));
        }
    }

    // Just attribute presence [attr]
    if !is_valid_ident(content) {
        return Err(invalid(content));
    }
    Ok(SelectorComponent::Attribute(AttributeSelector {
        name: content.to_string(),
        matcher: None,
        case_insensitive,
    }))
}

/// Parse a pseudo-class name (leading ':' already stripped)
fn parse_pseudo_class(input: &str) -> Result<PseudoClass, SelectorError> {
    if let Some(paren_pos) = input.find('(') {
        let name = &input[..paren_pos];
        let arg = input[paren_pos + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid(input))?;

        return match name {
            "nth-child" => NthExpression::parse(arg)
                .map(PseudoClass::NthChild)
                .ok_or_else(|| invalid(input)),
            "not" => parse_component(arg.trim()).map(|c| PseudoClass::Not(Box::new(c))),
            _ => Err(invalid(input)),
        };
    }

    match input {
        "first-child" => Ok(PseudoClass::FirstChild),
        "last-child" => Ok(PseudoClass::LastChild),
        "only-child" => Ok(PseudoClass::OnlyChild),
        "empty" => Ok(PseudoClass::Empty),
        "root" => Ok(PseudoClass::Root),
        _ => Err(invalid(input)),
    }
}
