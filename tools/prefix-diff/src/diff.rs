//! Default versus patched engine comparison

use std::collections::HashMap;
use std::fmt;

use prefix_css::{NodeId, NodeKind, StyleSheet};
use prefix_engine::{EngineConfig, StyleEngine};
use serde::Serialize;

use crate::error::PrefixDiffError;

/// Output of both engines for one source, and what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub default_css: String,
    pub patched_css: String,
    /// Entries only the default engine emits.
    pub suppressed: Vec<String>,
    /// Entries only the patched engine emits.
    pub added: Vec<String>,
}

impl DiffReport {
    pub fn is_identical(&self) -> bool {
        self.suppressed.is_empty() && self.added.is_empty()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identical() {
            return writeln!(f, "no differences");
        }
        for entry in &self.suppressed {
            writeln!(f, "- {entry}")?;
        }
        for entry in &self.added {
            writeln!(f, "+ {entry}")?;
        }
        writeln!(
            f,
            "{} suppressed, {} added",
            self.suppressed.len(),
            self.added.len()
        )
    }
}

/// Build both engines from one config.
pub fn engines(config: &EngineConfig) -> Result<(StyleEngine, StyleEngine), PrefixDiffError> {
    Ok((
        StyleEngine::new(config.clone())?,
        StyleEngine::with_legacy_suppression(config.clone())?,
    ))
}

/// Compile `source` with `engine`, scoped when a selector is given.
pub fn compile_with(engine: &StyleEngine, selector: Option<&str>, source: &str) -> String {
    match selector {
        Some(selector) => engine.compile(selector, source),
        None => engine.compile_global(source),
    }
}

/// Compile `source` through both engines and compare.
pub fn diff_source(
    config: &EngineConfig,
    selector: Option<&str>,
    source: &str,
) -> Result<DiffReport, PrefixDiffError> {
    let (default, patched) = engines(config)?;
    let default_css = compile_with(&default, selector, source);
    let patched_css = compile_with(&patched, selector, source);
    Ok(diff_css(default_css, patched_css))
}

/// Compare two compiled stylesheets entry by entry.
pub fn diff_css(default_css: String, patched_css: String) -> DiffReport {
    let default_entries = flatten(&default_css);
    let patched_entries = flatten(&patched_css);

    DiffReport {
        suppressed: difference(&default_entries, &patched_entries),
        added: difference(&patched_entries, &default_entries),
        default_css,
        patched_css,
    }
}

/// One entry per declaration, prefixed with the path of rules and
/// at-rules enclosing it: `@media print > .a { color:red }`.
pub fn flatten(css: &str) -> Vec<String> {
    let sheet = prefix_css::compile_global(css);
    let mut entries = Vec::new();
    for (id, node) in sheet.walk() {
        if let NodeKind::Declaration { property, value } = &node.kind {
            let path = context(&sheet, id);
            if path.is_empty() {
                entries.push(format!("{property}:{value}"));
            } else {
                entries.push(format!("{path} {{ {property}:{value} }}"));
            }
        }
    }
    entries
}

fn context(sheet: &StyleSheet, id: NodeId) -> String {
    let mut parts = Vec::new();
    let mut current = sheet[id].parent;
    while let Some(parent) = current {
        match &sheet[parent].kind {
            NodeKind::Rule { selectors } => parts.push(selectors.to_string()),
            NodeKind::AtRule { name, prelude, .. } if prelude.is_empty() => {
                parts.push(format!("@{name}"))
            }
            NodeKind::AtRule { name, prelude, .. } => parts.push(format!("@{name} {prelude}")),
            _ => {}
        }
        current = sheet[parent].parent;
    }
    parts.reverse();
    parts.join(" > ")
}

/// Entries of `left` not matched by an entry of `right`, counting repeats.
fn difference(left: &[String], right: &[String]) -> Vec<String> {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for entry in right {
        *available.entry(entry.as_str()).or_insert(0) += 1;
    }

    left.iter()
        .filter(|entry| match available.get_mut(entry.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
