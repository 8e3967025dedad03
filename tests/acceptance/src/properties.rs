//! Idempotence, determinism and the `no-animation-prefixes` scenario

use std::sync::Arc;
use std::thread;

use prefix_css::{compile, compile_global};
use prefix_engine::{Action, EngineConfig, PrefixClassifier, RuleTable, StyleEngine};

use crate::assertions::*;
use crate::fixtures::{StyleFixtures, NO_ANIMATION_PREFIXES, TEST_KEYFRAMES};
use crate::harness::EnginePair;

#[test]
fn test_no_animation_prefixes() {
    let engine = StyleEngine::with_legacy_suppression(EngineConfig::default()).unwrap();
    engine.insert_global(TEST_KEYFRAMES);
    let class = engine.insert(&engine.css(NO_ANIMATION_PREFIXES));
    assert!(class.ends_with("-no-animation-prefixes"));

    let css = engine.sheet();
    let checks = [
        assert_count(&css, "animation:", 1),
        assert_absent(&css, "-webkit-animation:"),
        assert_count(&css, "@keyframes testAnim{", 1),
        assert_absent(&css, "@-webkit-keyframes"),
        assert_absent(&css, "label"),
    ];
    for check in checks {
        assert!(check.is_ok(), "{:?}", check);
    }
}

#[test]
fn test_second_pass_changes_nothing() {
    let engines = EnginePair::new(EngineConfig::default()).unwrap();
    for fixture in StyleFixtures::all() {
        let once = engines.compile(&fixture);
        let twice = engines.recompile(&once);
        assert_eq!(once.patched, twice.patched, "patched {}", fixture.name);
        assert_eq!(once.default, twice.default, "default {}", fixture.name);

        let thrice = engines.recompile(&twice);
        assert_eq!(twice, thrice, "{}", fixture.name);
    }
}

#[test]
fn test_patched_output_through_default_engine_regains_prefixes() {
    // Suppression happens at emit time only; it is not a property of the CSS.
    let engines = EnginePair::new(EngineConfig::default()).unwrap();
    let patched = engines.compile(&StyleFixtures::keyframes()).patched;
    let reprefixed = engines.default.compile_global(&patched);
    assert!(reprefixed.contains("@-webkit-keyframes testAnim{"));
}

#[test]
fn test_same_node_same_action() {
    let table = RuleTable::legacy();
    for fixture in StyleFixtures::all() {
        let sheet = if fixture.is_global() {
            compile_global(fixture.source)
        } else {
            compile(fixture.selector, fixture.source)
        };
        for (_, node) in sheet.walk() {
            let first = table.classify(node);
            for _ in 0..10 {
                assert_eq!(table.classify(node), first);
            }
        }
    }
}

#[test]
fn test_concurrent_compilation_is_deterministic() {
    let engine = Arc::new(StyleEngine::with_legacy_suppression(EngineConfig::default()).unwrap());
    let fixture = StyleFixtures::component();
    let expected = engine.compile(fixture.selector, fixture.source);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..25)
                    .map(|_| engine.compile(fixture.selector, fixture.source))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for css in handle.join().unwrap() {
            assert_eq!(css, expected);
        }
    }
}

#[test]
fn test_classifier_sees_only_the_node() {
    // A rule decision does not leak to its children.
    let sheet = compile(".a", "&::placeholder{color:red}");
    let actions: Vec<Action<'static>> = sheet
        .walk()
        .map(|(_, node)| RuleTable::legacy().classify(node))
        .collect();
    assert_eq!(
        actions,
        [Action::LeaveDefault, Action::Suppress, Action::LeaveDefault]
    );
}
