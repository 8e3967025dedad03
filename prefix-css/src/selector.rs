//! CSS Selectors - selector list splitting and nesting resolution

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::parser::collapse_whitespace;

/// Marker for the enclosing rule's selector in nested source.
pub const PARENT_REFERENCE: char = '&';

/// A list of selectors (comma-separated in CSS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectorList {
    pub selectors: Vec<String>,
}

impl SelectorList {
    /// Create a new empty selector list.
    pub fn new() -> Self {
        SelectorList {
            selectors: Vec::new(),
        }
    }

    /// Create a selector list with one selector.
    pub fn single(selector: &str) -> Self {
        SelectorList {
            selectors: alloc::vec![selector.to_string()],
        }
    }

    /// Parse a comma-separated selector list.
    pub fn parse(input: &str) -> Self {
        SelectorList {
            selectors: split_selector_list(input),
        }
    }

    /// Add a selector to the list.
    pub fn push(&mut self, selector: String) {
        self.selectors.push(selector);
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Get the number of selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(selector)?;
        }
        Ok(())
    }
}

/// Split a selector list on top-level commas.
///
/// Commas inside parentheses, brackets or quoted strings do not split.
/// Empty entries are dropped and whitespace runs collapse to one space.
pub fn split_selector_list(input: &str) -> Vec<String> {
    let mut selectors = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in input.chars() {
        if let Some(q) = quote {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth <= 0 => {
                push_selector(&mut selectors, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_selector(&mut selectors, &current);

    selectors
}

fn push_selector(selectors: &mut Vec<String>, raw: &str) {
    let selector = collapse_whitespace(raw);
    if !selector.is_empty() {
        selectors.push(selector);
    }
}

/// Resolve a nested selector list against its parent rule's selectors.
///
/// Each `&` is replaced with the parent selector; a selector without `&`
/// becomes a descendant of the parent. Child selectors form the outer loop,
/// so `a,b { &:hover, &:focus {} }` yields `a:hover,b:hover,a:focus,b:focus`.
pub fn resolve_nested(parents: &SelectorList, child: &str) -> SelectorList {
    let children = split_selector_list(child);
    let mut resolved = SelectorList::new();

    if parents.is_empty() {
        for selector in children {
            let stripped = collapse_whitespace(&selector.replace(PARENT_REFERENCE, ""));
            if !stripped.is_empty() {
                resolved.push(stripped);
            }
        }
        return resolved;
    }

    for selector in &children {
        for parent in parents.iter() {
            if selector.contains(PARENT_REFERENCE) {
                resolved.push(selector.replace(PARENT_REFERENCE, parent));
            } else {
                resolved.push(format!("{} {}", parent, selector));
            }
        }
    }

    resolved
}

/// Check whether `selector` uses the pseudo-class or pseudo-element `pseudo`.
///
/// `pseudo` includes its leading colons (`::placeholder`, `:read-only`).
/// The match must end at an identifier boundary, so `:read-only` does not
/// match `:read-onlyish`.
pub fn contains_pseudo(selector: &str, pseudo: &str) -> bool {
    if pseudo.is_empty() {
        return false;
    }

    let mut rest = selector;
    while let Some(at) = rest.find(pseudo) {
        let end = at + pseudo.len();
        let boundary = rest[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_ident_char(c));
        // "::placeholder" must not be read as ":placeholder" with a stray colon.
        let standalone = pseudo.starts_with("::") || !rest[..at].ends_with(':');
        if boundary && standalone {
            return true;
        }
        rest = &rest[end..];
    }

    false
}

/// Replace every standalone use of `pseudo` in `selector` with `replacement`.
///
/// Uses the same boundary rules as [`contains_pseudo`].
pub fn replace_pseudo(selector: &str, pseudo: &str, replacement: &str) -> String {
    if pseudo.is_empty() {
        return selector.to_string();
    }

    let mut out = String::with_capacity(selector.len() + replacement.len());
    let mut rest = selector;
    while let Some(at) = rest.find(pseudo) {
        let end = at + pseudo.len();
        let boundary = rest[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_ident_char(c));
        let standalone = pseudo.starts_with("::") || !rest[..at].ends_with(':');

        out.push_str(&rest[..at]);
        if boundary && standalone {
            out.push_str(replacement);
        } else {
            out.push_str(pseudo);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// Check whether a selector is already vendor specific.
pub fn is_vendor_prefixed(selector: &str) -> bool {
    selector.contains(":-webkit-") || selector.contains(":-moz-") || selector.contains(":-ms-")
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
