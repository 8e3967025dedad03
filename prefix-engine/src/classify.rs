//! Prefix decision engine

use alloc::boxed::Box;
use alloc::sync::Arc;
use serde::Serialize;

use prefix_css::StyleNode;

/// What to do about default vendor prefixing for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action<'a> {
    /// Emit the node as written; no vendor variants.
    Suppress,
    /// Emit the node with this value (selector text for rules); no variants.
    Rewrite(&'a str),
    /// Defer to the default prefixer.
    LeaveDefault,
}

/// Classifies nodes for the rule walker.
///
/// Implementations must be pure: the decision may depend only on the node
/// passed in, never on its parent, siblings, or earlier calls. Nodes the
/// classifier does not understand get [`Action::LeaveDefault`].
pub trait PrefixClassifier: Send + Sync {
    fn classify<'t>(&'t self, node: &StyleNode) -> Action<'t>;
}

impl<C: PrefixClassifier + ?Sized> PrefixClassifier for &C {
    fn classify<'t>(&'t self, node: &StyleNode) -> Action<'t> {
        (**self).classify(node)
    }
}

impl<C: PrefixClassifier + ?Sized> PrefixClassifier for Box<C> {
    fn classify<'t>(&'t self, node: &StyleNode) -> Action<'t> {
        (**self).classify(node)
    }
}

impl<C: PrefixClassifier + ?Sized> PrefixClassifier for Arc<C> {
    fn classify<'t>(&'t self, node: &StyleNode) -> Action<'t> {
        (**self).classify(node)
    }
}
