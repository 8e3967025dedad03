//! Stylesheet tree - arena-backed CSS AST

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;

use crate::parser::ParseError;
use crate::selector::SelectorList;

/// Node ID - index into the owning stylesheet's arena.
pub type NodeId = usize;

/// The root node always lives at index 0.
pub const ROOT: NodeId = 0;

/// Node payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Stylesheet root
    Root,
    /// Style rule: selectors + declaration children
    Rule { selectors: SelectorList },
    /// `property: value`
    Declaration { property: String, value: String },
    /// `@name prelude { ... }` or `@name prelude;`
    AtRule {
        name: String,
        prelude: String,
        has_block: bool,
    },
}

impl NodeKind {
    pub fn rule(selectors: SelectorList) -> Self {
        NodeKind::Rule { selectors }
    }

    pub fn declaration(property: &str, value: &str) -> Self {
        NodeKind::Declaration {
            property: String::from(property),
            value: String::from(value),
        }
    }

    pub fn at_rule(name: &str, prelude: &str, has_block: bool) -> Self {
        NodeKind::AtRule {
            name: String::from(name),
            prelude: String::from(prelude),
            has_block,
        }
    }

    /// Check if this is a `@keyframes` block (unprefixed).
    pub fn is_keyframes(&self) -> bool {
        matches!(self, NodeKind::AtRule { name, .. } if name == "keyframes")
    }
}

/// A node in the stylesheet tree.
#[derive(Debug, Clone)]
pub struct StyleNode {
    /// Node payload.
    pub kind: NodeKind,
    /// Parent node ID (back-reference only).
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Removed nodes stay in the arena but emit nothing.
    pub removed: bool,
}

impl StyleNode {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        StyleNode {
            kind,
            parent,
            children: Vec::new(),
            removed: false,
        }
    }

    pub fn is_rule(&self) -> bool {
        matches!(self.kind, NodeKind::Rule { .. })
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, NodeKind::Declaration { .. })
    }

    /// Property name for declarations.
    pub fn property(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Declaration { property, .. } => Some(property),
            _ => None,
        }
    }
}

/// An owned subtree, detached from any arena.
///
/// Plugins build fragments to splice siblings next to the node they visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: NodeKind,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn new(kind: NodeKind) -> Self {
        Fragment {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Fragment>) -> Self {
        Fragment { kind, children }
    }

    pub fn declaration(property: &str, value: &str) -> Self {
        Fragment::new(NodeKind::declaration(property, value))
    }
}

/// A parsed stylesheet.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// All nodes; index 0 is the root.
    nodes: Vec<StyleNode>,
    /// Problems the parser recovered from.
    errors: Vec<ParseError>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSheet {
    /// Create an empty stylesheet holding only the root.
    pub fn new() -> Self {
        StyleSheet {
            nodes: alloc::vec![StyleNode::new(NodeKind::Root, None)],
            errors: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&StyleNode> {
        self.nodes.get(id)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut StyleNode> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the stylesheet has no nodes besides the root.
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    /// Children of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// IDs of the other children of `id`'s parent, in document order.
    pub fn sibling_ids(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let parent = self.nodes.get(id).and_then(|n| n.parent);
        let ids: &[NodeId] = match parent {
            Some(p) => self.children(p),
            None => &[],
        };
        ids.iter().copied().filter(move |&sibling| sibling != id)
    }

    /// Other children of `id`'s parent, in document order.
    pub fn siblings(&self, id: NodeId) -> impl Iterator<Item = &StyleNode> + '_ {
        self.sibling_ids(id)
            .filter_map(move |sibling| self.nodes.get(sibling))
    }

    /// Position of `id` within its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.nodes.get(id)?.parent?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(StyleNode::new(kind, Some(parent)));
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Adopt `fragment` as the child of `parent` at position `index`.
    ///
    /// Returns the ID of the fragment's top node.
    pub fn insert_at(&mut self, parent: NodeId, index: usize, fragment: Fragment) -> NodeId {
        let id = self.adopt(parent, fragment);
        if let Some(p) = self.nodes.get_mut(parent) {
            let index = index.min(p.children.len());
            p.children.insert(index, id);
        }
        id
    }

    /// Add `fragment` to the arena under `parent` without linking it into
    /// the parent's child list.
    fn adopt(&mut self, parent: NodeId, fragment: Fragment) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(StyleNode::new(fragment.kind, Some(parent)));
        for child in fragment.children {
            let child_id = self.adopt(id, child);
            self.nodes[id].children.push(child_id);
        }
        id
    }

    /// Deep copy of the subtree rooted at `id`.
    pub fn fragment(&self, id: NodeId) -> Option<Fragment> {
        let node = self.nodes.get(id)?;
        let children = node
            .children
            .iter()
            .filter(|&&c| !self.nodes[c].removed)
            .filter_map(|&c| self.fragment(c))
            .collect();
        Some(Fragment::with_children(node.kind.clone(), children))
    }

    /// Record a recovered parse problem.
    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Problems the parser recovered from.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Iterate nodes in document order (pre-order), root excluded.
    pub fn walk(&self) -> impl Iterator<Item = (NodeId, &StyleNode)> + '_ {
        let mut stack: Vec<NodeId> = self.children(ROOT).iter().rev().copied().collect();
        core::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id];
            stack.extend(node.children.iter().rev().copied());
            Some((id, node))
        })
    }
}

impl Index<NodeId> for StyleSheet {
    type Output = StyleNode;

    fn index(&self, id: NodeId) -> &StyleNode {
        &self.nodes[id]
    }
}
