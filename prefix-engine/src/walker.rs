//! Rule walker - the prefix decision plugin

use crate::classify::PrefixClassifier;
use crate::mutator;
use crate::plugin::{StylePlugin, TransformContext, Visit};

/// Plugin that classifies each node and applies the decision.
///
/// Registered ahead of the default prefixer so a suppressed node never
/// reaches it.
#[derive(Debug, Clone)]
pub struct RuleWalker<C> {
    classifier: C,
}

impl<C: PrefixClassifier> RuleWalker<C> {
    pub fn new(classifier: C) -> Self {
        RuleWalker { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}

impl<C: PrefixClassifier> StylePlugin for RuleWalker<C> {
    fn name(&self) -> &'static str {
        "rule-walker"
    }

    fn visit(&self, ctx: &mut TransformContext<'_>) -> Visit {
        let action = self.classifier.classify(ctx.node());
        mutator::apply(action, ctx)
    }
}
