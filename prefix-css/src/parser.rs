//! CSS Parser - nested CSS-in-JS source to a flat stylesheet tree
//!
//! Nested rules are flattened into their container (the root or an
//! enclosing at-rule) with fully resolved selectors. A parent rule is
//! created before any of its nested rules, so output order follows the
//! order in which blocks open.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::node::{NodeId, NodeKind, StyleSheet, ROOT};
use crate::selector::{resolve_nested, SelectorList};

/// CSS parse error.
///
/// The parser never aborts on these; they are recorded on the stylesheet
/// and the offending statement is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unexpected end of input
    UnexpectedEof,
    /// Unexpected token
    UnexpectedToken(String),
    /// Declaration without a property or value
    InvalidDeclaration(String),
    /// Selector that resolves to nothing
    InvalidSelector(String),
    /// At-rule without a name
    InvalidAtRule(String),
    /// Unclosed block
    UnclosedBlock,
    /// Unclosed string
    UnclosedString,
    /// Block opened deeper than [`MAX_NESTING_DEPTH`]
    NestingTooDeep,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseError::UnexpectedToken(t) => write!(f, "Unexpected token: {}", t),
            ParseError::InvalidDeclaration(d) => write!(f, "Invalid declaration: {}", d),
            ParseError::InvalidSelector(s) => write!(f, "Invalid selector: {}", s),
            ParseError::InvalidAtRule(a) => write!(f, "Invalid at-rule: {}", a),
            ParseError::UnclosedBlock => write!(f, "Unclosed block"),
            ParseError::UnclosedString => write!(f, "Unclosed string"),
            ParseError::NestingTooDeep => {
                write!(f, "Blocks nested deeper than {}", MAX_NESTING_DEPTH)
            }
        }
    }
}

/// Deepest block nesting the parser descends into.
///
/// Blocks opened below this depth are skipped whole.
pub const MAX_NESTING_DEPTH: usize = 256;

/// At-rules whose block holds declarations directly.
const DECLARATION_AT_RULES: &[&str] = &[
    "font-face",
    "page",
    "counter-style",
    "property",
    "font-palette-values",
    "viewport",
];

/// Where the statements of the block being parsed end up.
struct Scope<'s> {
    /// Node that receives flattened rules and at-rules.
    container: NodeId,
    /// Selectors nested rules resolve against.
    selectors: &'s SelectorList,
    /// Node that receives declarations, if any.
    rule: Option<NodeId>,
    /// Inside `@keyframes`: frame selectors are taken verbatim.
    frames: bool,
}

/// CSS-in-JS parser.
pub struct CssParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    errors: Vec<ParseError>,
}

impl<'a> CssParser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str) -> Self {
        CssParser {
            input,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Compile source with no scoping selector.
    ///
    /// Top-level declarations attach to the root.
    pub fn compile(mut self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        let selectors = SelectorList::new();
        let scope = Scope {
            container: ROOT,
            selectors: &selectors,
            rule: None,
            frames: false,
        };
        self.parse_top_level(&mut sheet, &scope);
        self.finish(sheet)
    }

    /// Compile source as the body of a rule for `selector`.
    pub fn compile_scoped(mut self, selector: &str) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        let selectors = SelectorList::parse(selector);
        let rule = if selectors.is_empty() {
            None
        } else {
            Some(sheet.append(ROOT, NodeKind::rule(selectors.clone())))
        };
        let scope = Scope {
            container: ROOT,
            selectors: &selectors,
            rule,
            frames: false,
        };
        self.parse_top_level(&mut sheet, &scope);
        self.finish(sheet)
    }

    fn finish(self, mut sheet: StyleSheet) -> StyleSheet {
        for error in self.errors {
            sheet.push_error(error);
        }
        sheet
    }

    fn parse_top_level(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>) {
        loop {
            self.parse_block(sheet, scope);
            if self.peek_char() == Some('}') {
                self.consume_char();
                self.error(ParseError::UnexpectedToken("}".into()));
            } else {
                break;
            }
        }
    }

    /// Parse statements until the closing `}` (left unconsumed) or EOF.
    fn parse_block(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>) {
        loop {
            self.skip_whitespace_and_comments();

            match self.peek_char() {
                None | Some('}') => return,
                Some(';') => {
                    self.consume_char();
                }
                Some('@') => self.parse_at_rule(sheet, scope),
                Some(_) => self.parse_statement(sheet, scope),
            }
        }
    }

    /// Parse the body of a block whose `{` was just consumed.
    fn parse_nested(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>) {
        self.depth += 1;
        self.parse_block(sheet, scope);
        self.depth -= 1;
    }

    /// Check that one more block fits, skipping it otherwise.
    fn can_nest(&mut self) -> bool {
        if self.depth < MAX_NESTING_DEPTH {
            return true;
        }
        self.error(ParseError::NestingTooDeep);
        self.skip_block();
        false
    }

    /// Parse a declaration or a nested rule.
    fn parse_statement(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>) {
        let (text, terminator) = self.consume_statement();

        if terminator == Some('{') {
            if !self.can_nest() {
                return;
            }
            let selectors = if scope.frames {
                SelectorList::parse(&text)
            } else {
                resolve_nested(scope.selectors, &text)
            };

            if selectors.is_empty() {
                self.error(ParseError::InvalidSelector(text.trim().to_string()));
                self.skip_block();
                return;
            }

            let rule = sheet.append(scope.container, NodeKind::rule(selectors.clone()));
            let inner = Scope {
                container: scope.container,
                selectors: &selectors,
                rule: Some(rule),
                frames: false,
            };
            self.parse_nested(sheet, &inner);
            self.close_block();
            return;
        }

        self.parse_declaration(sheet, scope, &text);
    }

    fn parse_declaration(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let Some((property, value)) = text.split_once(':') else {
            self.error(ParseError::InvalidDeclaration(text.to_string()));
            return;
        };

        let property = property.trim();
        let value = collapse_whitespace(value);
        if property.is_empty() || value.is_empty() {
            self.error(ParseError::InvalidDeclaration(text.to_string()));
            return;
        }

        let target = scope.rule.unwrap_or(scope.container);
        sheet.append(target, NodeKind::declaration(property, &value));
    }

    /// Parse an at-rule.
    fn parse_at_rule(&mut self, sheet: &mut StyleSheet, scope: &Scope<'_>) {
        self.consume_char(); // '@'
        let name = self.parse_ident();
        let (prelude, terminator) = self.consume_statement();
        let prelude = collapse_whitespace(&prelude);

        if name.is_empty() {
            self.error(ParseError::InvalidAtRule(prelude));
            if terminator == Some('{') {
                self.skip_block();
            }
            return;
        }

        if terminator != Some('{') {
            sheet.append(scope.container, NodeKind::at_rule(&name, &prelude, false));
            return;
        }

        if !self.can_nest() {
            return;
        }

        let at = sheet.append(scope.container, NodeKind::at_rule(&name, &prelude, true));
        let empty = SelectorList::new();

        if is_keyframes(&name) {
            let frames = Scope {
                container: at,
                selectors: &empty,
                rule: None,
                frames: true,
            };
            self.parse_nested(sheet, &frames);
        } else if DECLARATION_AT_RULES.contains(&name.as_str()) {
            let body = Scope {
                container: at,
                selectors: &empty,
                rule: Some(at),
                frames: false,
            };
            self.parse_nested(sheet, &body);
        } else {
            // Conditional group: re-open the enclosing rule inside it.
            let rule = if scope.selectors.is_empty() {
                None
            } else {
                Some(sheet.append(at, NodeKind::rule(scope.selectors.clone())))
            };
            let group = Scope {
                container: at,
                selectors: scope.selectors,
                rule,
                frames: false,
            };
            self.parse_nested(sheet, &group);
        }

        self.close_block();
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn error(&mut self, error: ParseError) {
        log::warn!("[prefix-css] {} (at byte {})", error, self.pos);
        self.errors.push(error);
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn close_block(&mut self) {
        if self.peek_char() == Some('}') {
            self.consume_char();
        } else {
            self.error(ParseError::UnclosedBlock);
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.consume_char();
            } else {
                break;
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.input[self.pos..].starts_with("/*") {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        self.pos += 2;
        match self.input[self.pos..].find("*/") {
            Some(end) => self.pos += end + 2,
            None => self.pos = self.input.len(),
        }
    }

    /// Skip a block whose `{` was already consumed.
    fn skip_block(&mut self) {
        let mut depth = 1;
        while let Some(c) = self.peek_char() {
            match c {
                '"' | '\'' => {
                    self.consume_quoted();
                    continue;
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.consume_char();
                        return;
                    }
                }
                _ => {}
            }
            self.consume_char();
        }
        self.error(ParseError::UnclosedBlock);
    }

    fn parse_ident(&mut self) -> String {
        let mut result = String::new();
        while let Some(c) = self.peek_char() {
            if is_ident_char(c) {
                result.push(c);
                self.consume_char();
            } else {
                break;
            }
        }
        result
    }

    /// Consume a quoted string verbatim, quotes and escapes included.
    fn consume_quoted(&mut self) -> String {
        let mut result = String::new();
        let Some(quote) = self.consume_char() else {
            return result;
        };
        result.push(quote);

        while let Some(c) = self.consume_char() {
            result.push(c);
            if c == '\\' {
                if let Some(escaped) = self.consume_char() {
                    result.push(escaped);
                }
            } else if c == quote {
                return result;
            }
        }

        self.error(ParseError::UnclosedString);
        result
    }

    /// Consume text up to a top-level `;`, `{` or `}`.
    ///
    /// `;` and `{` are consumed; `}` is left for the enclosing block.
    /// Comments are dropped, strings are kept verbatim.
    fn consume_statement(&mut self) -> (String, Option<char>) {
        let mut result = String::new();
        let mut depth = 0i32;

        while let Some(c) = self.peek_char() {
            match c {
                '"' | '\'' => {
                    let quoted = self.consume_quoted();
                    result.push_str(&quoted);
                    continue;
                }
                '/' if self.input[self.pos..].starts_with("/*") => {
                    self.skip_comment();
                    continue;
                }
                '(' | '[' => depth += 1,
                ')' | ']' => depth -= 1,
                ';' | '{' if depth <= 0 => {
                    self.consume_char();
                    return (result, Some(c));
                }
                '}' if depth <= 0 => return (result, Some(c)),
                _ => {}
            }
            result.push(c);
            self.consume_char();
        }

        if !result.trim().is_empty() && self.is_eof() && depth > 0 {
            self.error(ParseError::UnexpectedEof);
        }
        (result, None)
    }
}

/// Check if an at-rule name opens a keyframes block (prefixed or not).
pub fn is_keyframes(name: &str) -> bool {
    name == "keyframes" || (name.starts_with('-') && name.ends_with("-keyframes"))
}

/// Trim and collapse whitespace runs outside quoted strings to one space.
pub fn collapse_whitespace(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut pending_space = false;

    for c in input.trim().chars() {
        if let Some(q) = quote {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        result.push(c);
    }

    result
}

/// Check if a character can be part of an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
