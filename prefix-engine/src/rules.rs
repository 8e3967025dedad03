//! Static prefix rule tables
//!
//! A [`RuleTable`] maps node content to an [`Action`]. Matching is exact
//! (property and at-rule names, ASCII case-insensitive) or a fixed
//! substring (selectors and values); there is no pattern language.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::Serialize;
use spin::Lazy;

use prefix_css::selector::contains_pseudo;
use prefix_css::{NodeKind, StyleNode};

use crate::classify::{Action, PrefixClassifier};

/// What a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Matcher {
    /// Declaration property name.
    Property(&'static str),
    /// Pseudo-class or pseudo-element used by any selector of a rule.
    Selector(&'static str),
    /// Fixed substring of a declaration value.
    Value(&'static str),
    /// At-rule name, without the `@`.
    AtRule(&'static str),
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixRule {
    pub matcher: Matcher,
    pub action: Action<'static>,
}

impl PrefixRule {
    pub const fn suppress(matcher: Matcher) -> Self {
        PrefixRule {
            matcher,
            action: Action::Suppress,
        }
    }
}

/// Prefixes the supported target environments no longer need.
///
/// Animations and keyframes have been unprefixed everywhere for years, as
/// have `::placeholder` and the `:read-only`/`:read-write` pseudo-classes.
pub const LEGACY_RULES: &[PrefixRule] = &[
    PrefixRule::suppress(Matcher::Property("animation")),
    PrefixRule::suppress(Matcher::Property("animation-name")),
    PrefixRule::suppress(Matcher::Property("animation-duration")),
    PrefixRule::suppress(Matcher::Property("animation-timing-function")),
    PrefixRule::suppress(Matcher::Property("animation-delay")),
    PrefixRule::suppress(Matcher::Property("animation-iteration-count")),
    PrefixRule::suppress(Matcher::Property("animation-direction")),
    PrefixRule::suppress(Matcher::Property("animation-fill-mode")),
    PrefixRule::suppress(Matcher::Property("animation-play-state")),
    PrefixRule::suppress(Matcher::AtRule("keyframes")),
    PrefixRule::suppress(Matcher::Selector("::placeholder")),
    PrefixRule::suppress(Matcher::Selector(":read-only")),
    PrefixRule::suppress(Matcher::Selector(":read-write")),
];

/// The legacy suppression table, built on first use and never mutated.
pub static LEGACY_PREFIX_RULES: Lazy<RuleTable> = Lazy::new(|| RuleTable::new(LEGACY_RULES));

/// An immutable prefix rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<PrefixRule>,
    properties: HashMap<&'static str, Action<'static>>,
    at_rules: HashMap<&'static str, Action<'static>>,
    selectors: Vec<(&'static str, Action<'static>)>,
    values: Vec<(&'static str, Action<'static>)>,
}

impl RuleTable {
    /// Build a table. For duplicate exact matchers the first entry wins.
    pub fn new(rules: &[PrefixRule]) -> Self {
        let mut table = RuleTable {
            rules: rules.to_vec(),
            ..RuleTable::default()
        };

        for rule in rules {
            match rule.matcher {
                Matcher::Property(name) => {
                    table.properties.entry(name).or_insert(rule.action);
                }
                Matcher::AtRule(name) => {
                    table.at_rules.entry(name).or_insert(rule.action);
                }
                Matcher::Selector(fragment) => table.selectors.push((fragment, rule.action)),
                Matcher::Value(fragment) => table.values.push((fragment, rule.action)),
            }
        }

        log::debug!(
            "[prefix-engine] rule table: {} properties, {} at-rules, {} selectors, {} values",
            table.properties.len(),
            table.at_rules.len(),
            table.selectors.len(),
            table.values.len()
        );
        table
    }

    /// The shared legacy suppression table.
    pub fn legacy() -> &'static RuleTable {
        &LEGACY_PREFIX_RULES
    }

    /// Entries in declaration order.
    pub fn rules(&self) -> &[PrefixRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn classify_declaration(&self, property: &str, value: &str) -> Action<'static> {
        let property = ascii_lowercase(property);
        if let Some(action) = self.properties.get(property.as_ref()) {
            return *action;
        }

        self.values
            .iter()
            .find(|(fragment, _)| value.contains(fragment))
            .map_or(Action::LeaveDefault, |(_, action)| *action)
    }
}

impl PrefixClassifier for RuleTable {
    fn classify<'t>(&'t self, node: &StyleNode) -> Action<'t> {
        if node.removed {
            return Action::LeaveDefault;
        }

        match &node.kind {
            NodeKind::Declaration { property, value } if !property.is_empty() => {
                self.classify_declaration(property, value)
            }
            NodeKind::Rule { selectors } if !selectors.is_empty() => self
                .selectors
                .iter()
                .find(|(pseudo, _)| selectors.iter().any(|s| contains_pseudo(s, pseudo)))
                .map_or(Action::LeaveDefault, |(_, action)| *action),
            NodeKind::AtRule { name, .. } => {
                let name = ascii_lowercase(name);
                self.at_rules
                    .get(name.as_ref())
                    .copied()
                    .unwrap_or(Action::LeaveDefault)
            }
            _ => Action::LeaveDefault,
        }
    }
}

fn ascii_lowercase(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(text.to_ascii_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
