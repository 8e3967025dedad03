//! Stylesheet stringification
//!
//! Output is minified the way CSS-in-JS engines emit it: `prop:value;`,
//! `a,b{...}`, `@media (x){...}`. Blocks with an empty body are dropped.

use alloc::string::String;

use crate::node::{NodeId, NodeKind, StyleSheet, ROOT};

/// Render a stylesheet without running any plugins.
pub fn to_css(sheet: &StyleSheet) -> String {
    let mut out = String::new();
    write_children(sheet, ROOT, &mut out);
    out
}

fn write_children(sheet: &StyleSheet, id: NodeId, out: &mut String) {
    for &child in sheet.children(id) {
        let Some(node) = sheet.get(child) else {
            continue;
        };
        if node.removed {
            continue;
        }

        let mut body = String::new();
        write_children(sheet, child, &mut body);
        write_node(out, &node.kind, &body);
    }
}

/// Write one node given its already rendered children.
pub fn write_node(out: &mut String, kind: &NodeKind, body: &str) {
    match kind {
        NodeKind::Root => out.push_str(body),
        NodeKind::Declaration { property, value } => {
            out.push_str(property);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        NodeKind::Rule { selectors } => {
            if body.is_empty() || selectors.is_empty() {
                return;
            }
            for (i, selector) in selectors.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(selector);
            }
            out.push('{');
            out.push_str(body);
            out.push('}');
        }
        NodeKind::AtRule {
            name,
            prelude,
            has_block,
        } => {
            if *has_block && body.is_empty() {
                return;
            }
            out.push('@');
            out.push_str(name);
            if !prelude.is_empty() {
                out.push(' ');
                out.push_str(prelude);
            }
            if *has_block {
                out.push('{');
                out.push_str(body);
                out.push('}');
            } else {
                out.push(';');
            }
        }
    }
}
