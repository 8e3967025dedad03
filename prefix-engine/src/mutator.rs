//! Output mutator - applies a prefix decision to the visited node

use prefix_css::SelectorList;

use crate::classify::Action;
use crate::plugin::{TransformContext, Visit};

/// Apply `action` to the node in `ctx`.
///
/// `Visit::Handled` stops the plugin chain, which is how suppression keeps
/// the default prefixer away from the node. A rewrite that does not apply
/// to the node kind falls back to the default behaviour.
pub fn apply(action: Action<'_>, ctx: &mut TransformContext<'_>) -> Visit {
    match action {
        Action::Suppress => {
            log::trace!("[prefix-engine] suppress prefixes for node {}", ctx.id());
            Visit::Handled
        }
        Action::Rewrite(replacement) => {
            let applied = if ctx.node().is_rule() {
                ctx.set_selectors(SelectorList::parse(replacement))
            } else {
                ctx.set_value(replacement)
            };

            if applied {
                log::trace!(
                    "[prefix-engine] rewrite node {} to {:?}",
                    ctx.id(),
                    replacement
                );
                Visit::Handled
            } else {
                Visit::Continue
            }
        }
        Action::LeaveDefault => Visit::Continue,
    }
}
