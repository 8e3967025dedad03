//! `label:` declarations
//!
//! Labels name a style for debugging. They become part of the cache name
//! and never reach the output.

use alloc::string::String;
use alloc::vec::Vec;

use crate::plugin::{StylePlugin, TransformContext, Visit};

/// Property that carries a label.
pub const LABEL_PROPERTY: &str = "label";

/// Collect the labels declared in raw style source, in order.
///
/// A label is `label:` followed by a value that runs up to whitespace, `;`
/// or `{`, and must be followed by `;` or the end of the source.
pub fn extract_labels(styles: &str) -> Vec<String> {
    let mut labels = Vec::new();
    let mut rest = styles;

    while let Some(at) = rest.find("label:") {
        let after = rest[at + "label:".len()..].trim_start();
        let end = after
            .find(|c: char| c.is_whitespace() || c == ';' || c == '{')
            .unwrap_or(after.len());
        let (label, tail) = after.split_at(end);
        let tail = tail.trim_start();

        if !label.is_empty() && (tail.is_empty() || tail.starts_with(';')) {
            labels.push(String::from(label));
        }
        rest = tail;
    }

    labels
}

/// Drops label declarations from the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelStripper;

impl StylePlugin for LabelStripper {
    fn name(&self) -> &'static str {
        "label-stripper"
    }

    fn visit(&self, ctx: &mut TransformContext<'_>) -> Visit {
        if ctx.node().property() == Some(LABEL_PROPERTY) {
            ctx.remove();
            return Visit::Handled;
        }
        Visit::Continue
    }
}
