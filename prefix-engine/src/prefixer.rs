//! Default auto-prefixer
//!
//! The host's own vendor prefixing, run as the last plugin in the chain.
//! Variants are inserted as siblings before the node they were derived
//! from, in `-webkit-`, `-moz-`, `-ms-` order. A variant that already sits
//! next to the node is not inserted again, so running the pipeline over
//! its own output changes nothing.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use prefix_css::selector::{contains_pseudo, is_vendor_prefixed, replace_pseudo};
use prefix_css::{Fragment, NodeKind, SelectorList};

use crate::plugin::{StylePlugin, TransformContext, Visit};
use crate::vendor::{is_prefixed, Vendors};

/// Pseudo selectors with vendor-specific spellings.
const PSEUDO_VARIANTS: &[(&str, &[(Vendors, &str)])] = &[
    (
        "::placeholder",
        &[
            (Vendors::WEBKIT, "::-webkit-input-placeholder"),
            (Vendors::MOZ, "::-moz-placeholder"),
            (Vendors::MS, ":-ms-input-placeholder"),
        ],
    ),
    (":read-only", &[(Vendors::MOZ, ":-moz-read-only")]),
    (":read-write", &[(Vendors::MOZ, ":-moz-read-write")]),
];

/// Logical properties only old WebKit spells differently.
const LOGICAL_PROPERTIES: &[(&str, &str)] = &[
    ("margin-inline-start", "-webkit-margin-start"),
    ("margin-inline-end", "-webkit-margin-end"),
    ("padding-inline-start", "-webkit-padding-start"),
    ("padding-inline-end", "-webkit-padding-end"),
];

const SIZING_PROPERTIES: &[&str] = &[
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "inline-size",
    "block-size",
    "min-inline-size",
    "min-block-size",
    "max-inline-size",
    "max-block-size",
];

const SIZING_KEYWORDS: &[&str] = &["fit-content", "max-content", "min-content"];

const CURSOR_KEYWORDS: &[&str] = &["grab", "grabbing", "zoom-in", "zoom-out"];

/// Vendors that get a prefixed copy of `property`.
fn property_vendors(property: &str) -> Vendors {
    match property {
        "appearance" | "user-select" | "hyphens" | "text-size-adjust" => Vendors::all(),
        "tab-size" => Vendors::MOZ,
        "backface-visibility" | "clip-path" | "filter" | "backdrop-filter" | "columns"
        | "box-decoration-break" | "text-decoration" | "background-clip" | "transition"
        | "transform" | "print-color-adjust" => Vendors::WEBKIT,
        p if p == "animation" || p.starts_with("animation-") => Vendors::WEBKIT,
        p if p.starts_with("mask") || p.starts_with("column-") => Vendors::WEBKIT,
        _ => Vendors::empty(),
    }
}

/// Prefixed alternatives for `value` under `property`.
fn value_variants(property: &str, value: &str) -> Vec<(Vendors, String)> {
    let webkit = |v: &str| (Vendors::WEBKIT, format!("-webkit-{}", v));

    match property {
        "display" => match value {
            "flex" => alloc::vec![
                (Vendors::WEBKIT, "-webkit-box".to_owned()),
                webkit("flex"),
                (Vendors::MS, "-ms-flexbox".to_owned()),
            ],
            "inline-flex" => alloc::vec![
                (Vendors::WEBKIT, "-webkit-inline-box".to_owned()),
                webkit("inline-flex"),
                (Vendors::MS, "-ms-inline-flexbox".to_owned()),
            ],
            _ => Vec::new(),
        },
        "position" if value == "sticky" => alloc::vec![webkit(value)],
        "cursor" if CURSOR_KEYWORDS.contains(&value) => alloc::vec![webkit(value)],
        p if SIZING_PROPERTIES.contains(&p) && SIZING_KEYWORDS.contains(&value) => alloc::vec![
            webkit(value),
            (Vendors::MOZ, format!("-moz-{}", value)),
        ],
        _ => Vec::new(),
    }
}

/// Vendor variants of a declaration, in emission order.
pub fn declaration_variants(property: &str, value: &str, vendors: Vendors) -> Vec<Fragment> {
    let mut variants = Vec::new();
    if property.starts_with("--") || is_prefixed(property) || is_prefixed(value) {
        return variants;
    }

    let property = property.to_ascii_lowercase();

    if let Some((_, webkit)) = LOGICAL_PROPERTIES.iter().find(|(p, _)| *p == property) {
        if vendors.contains(Vendors::WEBKIT) {
            variants.push(Fragment::declaration(webkit, value));
        }
        return variants;
    }

    let prefixed = property_vendors(&property) & vendors;
    for vendor in Vendors::ORDER {
        if prefixed.contains(vendor) {
            let name = format!("{}{}", vendor.prefix(), property);
            variants.push(Fragment::declaration(&name, value));
        }
    }

    for (vendor, alternative) in value_variants(&property, value) {
        if vendors.contains(vendor) {
            variants.push(Fragment::declaration(&property, &alternative));
        }
    }

    variants
}

/// Vendor variants of a rule's selector list. Each variant keeps only the
/// selectors that use the pseudo being spelled differently.
pub fn selector_variants(selectors: &SelectorList, vendors: Vendors) -> Vec<SelectorList> {
    let mut variants = Vec::new();
    if selectors.iter().any(is_vendor_prefixed) {
        return variants;
    }

    for (pseudo, spellings) in PSEUDO_VARIANTS {
        for (vendor, spelling) in spellings.iter() {
            if !vendors.contains(*vendor) {
                continue;
            }
            let mut list = SelectorList::new();
            for selector in selectors.iter().filter(|s| contains_pseudo(s, pseudo)) {
                list.push(replace_pseudo(selector, pseudo, spelling));
            }
            if !list.is_empty() {
                variants.push(list);
            }
        }
    }

    variants
}

/// The host's default prefixing plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrefixer;

impl DefaultPrefixer {
    fn variants(ctx: &TransformContext<'_>) -> Vec<Fragment> {
        let vendors = ctx.vendors();
        match ctx.kind() {
            NodeKind::Declaration { property, value } => {
                declaration_variants(property, value, vendors)
            }
            NodeKind::Rule { selectors } => {
                let lists = selector_variants(selectors, vendors);
                if lists.is_empty() {
                    return Vec::new();
                }
                let children = ctx.fragment().children;
                lists
                    .into_iter()
                    .map(|list| Fragment::with_children(NodeKind::rule(list), children.clone()))
                    .collect()
            }
            NodeKind::AtRule {
                name,
                prelude,
                has_block: true,
            } if name == "keyframes" && vendors.contains(Vendors::WEBKIT) => {
                let copy = NodeKind::at_rule("-webkit-keyframes", prelude, true);
                alloc::vec![Fragment::with_children(copy, ctx.fragment().children)]
            }
            _ => Vec::new(),
        }
    }
}

impl StylePlugin for DefaultPrefixer {
    fn name(&self) -> &'static str {
        "default-prefixer"
    }

    fn visit(&self, ctx: &mut TransformContext<'_>) -> Visit {
        for variant in Self::variants(ctx) {
            if ctx.has_sibling(&variant) {
                continue;
            }
            log::trace!("[prefix-engine] prefix node {}: {:?}", ctx.id(), variant.kind);
            ctx.insert_before(variant);
        }
        Visit::Continue
    }
}
