//! Host serializer - runs the plugin chain and renders CSS
//!
//! Nodes are visited depth-first in document order. Each node goes through
//! the plugin chain once, then its queued siblings are spliced into the
//! tree and rendered around it. Spliced nodes go through the same chain.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use prefix_css::serializer::write_node;
use prefix_css::{Fragment, NodeId, StyleSheet};

use crate::plugin::{StylePlugin, TransformContext, Visit};
use crate::vendor::Vendors;

/// How deep spliced fragments may themselves splice more fragments.
const MAX_SPLICE_DEPTH: usize = 8;

/// Renders a stylesheet through a plugin chain.
pub struct Serializer<'p> {
    plugins: &'p [Box<dyn StylePlugin>],
    vendors: Vendors,
}

impl<'p> Serializer<'p> {
    pub fn new(plugins: &'p [Box<dyn StylePlugin>], vendors: Vendors) -> Self {
        Serializer { plugins, vendors }
    }

    /// Run the chain over every node of `sheet` and render the result.
    ///
    /// The sheet is left holding the transformed tree.
    pub fn serialize(&self, sheet: &mut StyleSheet) -> String {
        let mut out = String::new();
        let root = sheet.root();
        for child in sheet.children(root).to_vec() {
            self.serialize_node(sheet, child, 0, &mut out);
        }
        out
    }

    fn serialize_node(&self, sheet: &mut StyleSheet, id: NodeId, depth: usize, out: &mut String) {
        if sheet.get(id).map_or(true, |n| n.removed) {
            return;
        }

        let (before, after) = self.run_plugins(sheet, id);
        self.splice(sheet, id, before, false, depth, out);

        if !sheet[id].removed {
            let mut body = String::new();
            for child in sheet.children(id).to_vec() {
                self.serialize_node(sheet, child, depth, &mut body);
            }
            write_node(out, &sheet[id].kind, &body);
        }

        self.splice(sheet, id, after, true, depth, out);
    }

    fn run_plugins(&self, sheet: &mut StyleSheet, id: NodeId) -> (Vec<Fragment>, Vec<Fragment>) {
        let mut ctx = TransformContext::new(sheet, id, self.vendors);
        for plugin in self.plugins {
            if plugin.visit(&mut ctx) == Visit::Handled {
                log::trace!("[prefix-engine] {} handled node {}", plugin.name(), id);
                break;
            }
        }
        ctx.into_insertions()
    }

    /// Insert `fragments` next to `anchor` and render them in order.
    fn splice(
        &self,
        sheet: &mut StyleSheet,
        anchor: NodeId,
        fragments: Vec<Fragment>,
        after: bool,
        depth: usize,
        out: &mut String,
    ) {
        if fragments.is_empty() {
            return;
        }
        if depth >= MAX_SPLICE_DEPTH {
            log::warn!(
                "[prefix-engine] dropping {} spliced nodes next to node {}: nesting too deep",
                fragments.len(),
                anchor
            );
            return;
        }
        let Some(parent) = sheet[anchor].parent else {
            return;
        };

        let mut next = sheet.index_in_parent(anchor).map_or(0, |i| i + 1);
        for fragment in fragments {
            let index = if after {
                next
            } else {
                sheet.index_in_parent(anchor).unwrap_or(0)
            };
            let before_len = sheet.children(parent).len();
            let id = sheet.insert_at(parent, index, fragment);
            self.serialize_node(sheet, id, depth + 1, out);
            // Anything the fragment spliced in itself sits next to it.
            next = index + (sheet.children(parent).len() - before_len);
        }
    }
}
