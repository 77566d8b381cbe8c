//! Minimal CSS selector matching for the display tree.
//!
//! Supports what the flavor markup needs: descendant combinators (spaces)
//! between compound steps made of an optional tag, `#id`, any number of
//! `.class`es and `[attr]` / `[attr=value]` / `[attr="value"]` filters.
//!
//! ```
//! use flavor_catalog::page::Selector;
//!
//! let selector: Selector = "#footer select[name=\"flavor\"]".parse().unwrap();
//! assert_eq!(selector.len(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::PageError;
use crate::page::Node;

/// One compound step, e.g. `span.price` or `input[name="amount"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != node.tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| node.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|(name, expected)| match (node.attr(name), expected) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(_), None) => true,
            (None, _) => false,
        })
    }
}

/// A parsed selector: compound steps joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    steps: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, PageError> {
        let steps = split_steps(source)?
            .into_iter()
            .map(|step| parse_compound(source, step))
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(invalid(source, "empty selector"));
        }

        Ok(Self {
            source: source.to_string(),
            steps,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of compound steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Does `chain` match? `chain[0]` is the candidate node, the rest are
    /// its ancestors innermost first (already bounded by the query scope).
    pub(crate) fn matches_chain(&self, chain: &[&Node]) -> bool {
        let Some((last, rest)) = self.steps.split_last() else {
            return false;
        };
        let Some((candidate, ancestors)) = chain.split_first() else {
            return false;
        };
        if !last.matches(candidate) {
            return false;
        }

        // Right to left, nearest matching ancestor for each step
        let mut ancestors = ancestors.iter();
        rest.iter()
            .rev()
            .all(|step| ancestors.any(|node| step.matches(node)))
    }
}

impl FromStr for Selector {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ============================================================================
// Parsing
// ============================================================================

fn invalid(source: &str, reason: &'static str) -> PageError {
    PageError::InvalidSelector {
        selector: source.to_string(),
        reason,
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Split on whitespace outside `[...]`.
fn split_steps(source: &str) -> Result<Vec<&str>, PageError> {
    let mut steps = Vec::new();
    let mut start = None;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in source.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') if depth > 0 => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid(source, "unbalanced ']'"))?;
            }
            (None, c) if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    steps.push(&source[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }

    if depth != 0 || quote.is_some() {
        return Err(invalid(source, "unterminated attribute filter"));
    }
    if let Some(s) = start {
        steps.push(&source[s..]);
    }
    Ok(steps)
}

fn take_ident(rest: &str) -> (&str, &str) {
    let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
    rest.split_at(end)
}

fn parse_compound(source: &str, step: &str) -> Result<Compound, PageError> {
    let mut compound = Compound::default();

    let (tag, mut rest) = take_ident(step);
    if !tag.is_empty() {
        compound.tag = Some(tag.to_ascii_lowercase());
    } else if let Some(after) = step.strip_prefix('*') {
        rest = after;
    }

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '.' | '#' => {
                let (ident, after) = take_ident(rest);
                if ident.is_empty() {
                    return Err(invalid(source, "missing name after '.' or '#'"));
                }
                if c == '.' {
                    compound.classes.push(ident.to_string());
                } else {
                    compound.id = Some(ident.to_string());
                }
                rest = after;
            }
            '[' => {
                let close = rest
                    .find(']')
                    .ok_or_else(|| invalid(source, "unterminated attribute filter"))?;
                compound.attrs.push(parse_attr(source, &rest[..close])?);
                rest = &rest[close + 1..];
            }
            _ => return Err(invalid(source, "unexpected character")),
        }
    }

    Ok(compound)
}

fn parse_attr(source: &str, body: &str) -> Result<(String, Option<String>), PageError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(invalid(source, "bad attribute name"));
    }

    let value = value.map(|v| {
        v.strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| v.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(v)
            .to_string()
    });
    Ok((name.to_string(), value))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let selector = Selector::parse(".meta  .numLeft").unwrap();
        assert_eq!(selector.len(), 2);
        assert_eq!(selector.as_str(), ".meta  .numLeft");

        let selector = Selector::parse("#footer input[name=\"amount\"]").unwrap();
        assert_eq!(selector.len(), 2);
    }

    #[test]
    fn test_parse_attr_with_space_in_value() {
        let selector = Selector::parse("option[label=\"Rocky Road\"]").unwrap();
        assert_eq!(selector.len(), 1);
        let node = Node::new("option").with_attr("label", "Rocky Road");
        assert!(selector.matches_chain(&[&node]));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "   ", ".", "#", "div[name", "div]", "a > b", "[=x]"] {
            assert!(Selector::parse(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_compound_matching() {
        let price = Node::new("span").with_class("price").with_class("big");
        assert!(Selector::parse("span.price").unwrap().matches_chain(&[&price]));
        assert!(Selector::parse(".big.price").unwrap().matches_chain(&[&price]));
        assert!(Selector::parse("*.price").unwrap().matches_chain(&[&price]));
        assert!(!Selector::parse("p.price").unwrap().matches_chain(&[&price]));
        assert!(!Selector::parse(".price.small").unwrap().matches_chain(&[&price]));
    }

    #[test]
    fn test_descendant_matching() {
        let footer = Node::new("div").with_id("footer");
        let form = Node::new("form");
        let select = Node::new("select").with_attr("name", "flavor");

        let selector = Selector::parse("#footer select[name='flavor']").unwrap();
        assert!(selector.matches_chain(&[&select, &form, &footer]));

        // Ancestor outside the chain does not count
        assert!(!selector.matches_chain(&[&select, &form]));

        let presence = Selector::parse("select[name]").unwrap();
        assert!(presence.matches_chain(&[&select]));
        assert!(!presence.matches_chain(&[&form]));
    }
}
