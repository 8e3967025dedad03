//! Prefix CSS - stylesheet AST and CSS-in-JS parsing
//!
//! This crate turns nested CSS-in-JS source into a flat, arena-backed
//! stylesheet tree and renders it back to CSS text. It is designed to work
//! in no_std environments.
//!
//! # Modules
//!
//! - `node`: the stylesheet arena (`StyleSheet`, `StyleNode`, `Fragment`)
//! - `parser`: lenient nested-rule compiler
//! - `selector`: selector list splitting and `&` resolution
//! - `serializer`: plain stringification

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod node;
pub mod parser;
pub mod selector;
pub mod serializer;


pub use node::{Fragment, NodeId, NodeKind, StyleNode, StyleSheet};
pub use parser::{CssParser, ParseError};
pub use selector::SelectorList;
pub use serializer::to_css;

/// Compile CSS-in-JS source scoped under `selector`.
pub fn compile(selector: &str, source: &str) -> StyleSheet {
    CssParser::new(source).compile_scoped(selector)
}

/// Compile CSS-in-JS source with no scoping selector.
pub fn compile_global(source: &str) -> StyleSheet {
    CssParser::new(source).compile()
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        compile, compile_global, to_css, CssParser, Fragment, NodeId, NodeKind, ParseError,
        SelectorList, StyleNode, StyleSheet,
    };
}
