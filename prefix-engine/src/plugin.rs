//! Plugin contract between the host serializer and node transforms
//!
//! The serializer calls each registered plugin once per node, in
//! registration order, handing it a [`TransformContext`] for that node.
//! A plugin returning [`Visit::Handled`] ends the chain for the node, so
//! later plugins (the default prefixer included) never see it.

use alloc::vec::Vec;

use prefix_css::{Fragment, NodeId, NodeKind, SelectorList, StyleNode, StyleSheet};

use crate::vendor::Vendors;

/// Outcome of one plugin visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Let the next plugin process the node.
    Continue,
    /// Processing is complete for this node.
    Handled,
}

/// A node transform registered with the serializer.
pub trait StylePlugin: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Process the current node.
    ///
    /// Must not block, and must not recurse into children: the serializer
    /// visits them itself.
    fn visit(&self, ctx: &mut TransformContext<'_>) -> Visit;
}

/// Per-node transform state.
///
/// Created for one node visit and consumed by the serializer right after
/// the plugin chain runs.
pub struct TransformContext<'a> {
    sheet: &'a mut StyleSheet,
    id: NodeId,
    vendors: Vendors,
    before: Vec<Fragment>,
    after: Vec<Fragment>,
}

impl<'a> TransformContext<'a> {
    pub fn new(sheet: &'a mut StyleSheet, id: NodeId, vendors: Vendors) -> Self {
        TransformContext {
            sheet,
            id,
            vendors,
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// ID of the node being visited.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node being visited.
    pub fn node(&self) -> &StyleNode {
        &self.sheet[self.id]
    }

    pub fn kind(&self) -> &NodeKind {
        &self.sheet[self.id].kind
    }

    /// Vendors the engine is configured to emit.
    pub fn vendors(&self) -> Vendors {
        self.vendors
    }

    /// Check whether an identical subtree already sits next to this node,
    /// either in the tree or queued for insertion.
    pub fn has_sibling(&self, fragment: &Fragment) -> bool {
        if self.before.contains(fragment) || self.after.contains(fragment) {
            return true;
        }

        self.sheet.sibling_ids(self.id).any(|sibling| {
            let node = &self.sheet[sibling];
            if node.removed || node.kind != fragment.kind {
                return false;
            }
            if fragment.children.is_empty() && node.children.is_empty() {
                return true;
            }
            self.sheet.fragment(sibling).as_ref() == Some(fragment)
        })
    }

    /// Deep copy of the current node.
    pub fn fragment(&self) -> Fragment {
        self.sheet
            .fragment(self.id)
            .unwrap_or_else(|| Fragment::new(self.kind().clone()))
    }

    /// Splice `fragment` in as the sibling right before this node.
    pub fn insert_before(&mut self, fragment: Fragment) {
        self.before.push(fragment);
    }

    /// Splice `fragment` in after this node (and after earlier `insert_after`s).
    pub fn insert_after(&mut self, fragment: Fragment) {
        self.after.push(fragment);
    }

    /// Replace a declaration's value. Returns false for other node kinds.
    pub fn set_value(&mut self, new_value: &str) -> bool {
        match self.sheet.get_mut(self.id).map(|n| &mut n.kind) {
            Some(NodeKind::Declaration { value, .. }) => {
                value.clear();
                value.push_str(new_value);
                true
            }
            _ => false,
        }
    }

    /// Replace a rule's selectors. Returns false for other node kinds.
    pub fn set_selectors(&mut self, new_selectors: SelectorList) -> bool {
        match self.sheet.get_mut(self.id).map(|n| &mut n.kind) {
            Some(NodeKind::Rule { selectors }) => {
                *selectors = new_selectors;
                true
            }
            _ => false,
        }
    }

    /// Drop the current node from the output.
    pub fn remove(&mut self) {
        if let Some(node) = self.sheet.get_mut(self.id) {
            node.removed = true;
        }
    }

    /// Fragments queued before and after the node.
    pub fn into_insertions(self) -> (Vec<Fragment>, Vec<Fragment>) {
        (self.before, self.after)
    }
}
