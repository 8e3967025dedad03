//! Prefix Engine - CSS-in-JS style engine with selective prefix suppression
//!
//! Styles are compiled by `prefix-css`, then serialized through a chain of
//! plugins. The last plugin is the default auto-prefixer. A rule walker
//! registered ahead of it can keep chosen nodes away from the prefixer,
//! which is how legacy vendor prefixes are suppressed.
//!
//! ```text
//!   source ──► prefix_css::compile ──► StyleSheet
//!                                          │
//!        ┌─────────────── Serializer ──────┘
//!        │  per node, in document order:
//!        │    LabelStripper ─► RuleWalker<C> ─► DefaultPrefixer
//!        │                        │
//!        │                  C::classify ─► mutator::apply
//!        ▼
//!      CSS text ──► StyleEngine cache / sheet
//! ```
//!
//! # Modules
//!
//! - `rules`: static prefix rule tables
//! - `classify`: the decision interface
//! - `walker`, `mutator`: the suppression plugin
//! - `plugin`: plugin contract and per-node context
//! - `prefixer`: the default auto-prefixer
//! - `serialize`: host serializer
//! - `engine`: style cache and compilation entry points

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod hash;
pub mod label;
pub mod mutator;
pub mod plugin;
pub mod prefixer;
pub mod rules;
pub mod serialize;
pub mod vendor;
pub mod walker;


pub use classify::{Action, PrefixClassifier};
pub use config::EngineConfig;
pub use engine::{serialize_styles, EngineBuilder, Keyframes, SerializedStyles, StyleEngine};
pub use error::{EngineError, Result};
pub use plugin::{StylePlugin, TransformContext, Visit};
pub use prefixer::DefaultPrefixer;
pub use rules::{Matcher, PrefixRule, RuleTable, LEGACY_PREFIX_RULES};
pub use serialize::Serializer;
pub use vendor::Vendors;
pub use walker::RuleWalker;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Action, EngineBuilder, EngineConfig, EngineError, PrefixClassifier, RuleTable,
        RuleWalker, StyleEngine, StylePlugin, TransformContext, Vendors, Visit,
    };
}
