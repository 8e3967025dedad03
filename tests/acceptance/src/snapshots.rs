//! Literal output snapshots
//!
//! Cached payloads are compared byte for byte, so any drift in hashing,
//! parsing or serialization shows up here.

use hashbrown::HashMap;

use prefix_engine::{EngineConfig, StyleEngine};

use crate::fixtures::{NO_ANIMATION_PREFIXES, TEST_KEYFRAMES};

const CLASS: &str = "css-1sy4r9d-no-animation-prefixes";

fn expected() -> HashMap<&'static str, &'static str> {
    let mut snapshots = HashMap::new();
    snapshots.insert(
        "patched",
        "@keyframes testAnim{from{opacity:0;}to{opacity:1;}}\
         .css-1sy4r9d-no-animation-prefixes{animation:testAnim;animation-name:test;animation-delay:1s;}",
    );
    snapshots.insert(
        "default",
        "@-webkit-keyframes testAnim{from{opacity:0;}to{opacity:1;}}\
         @keyframes testAnim{from{opacity:0;}to{opacity:1;}}\
         .css-1sy4r9d-no-animation-prefixes{-webkit-animation:testAnim;animation:testAnim;\
         -webkit-animation-name:test;animation-name:test;\
         -webkit-animation-delay:1s;animation-delay:1s;}",
    );
    snapshots
}

fn render(engine: &StyleEngine) -> String {
    engine.insert_global(TEST_KEYFRAMES);
    let class = engine.insert(&engine.css(NO_ANIMATION_PREFIXES));
    assert_eq!(class, CLASS);
    engine.sheet()
}

#[test]
fn test_snapshots() {
    let snapshots = expected();
    let patched = StyleEngine::with_legacy_suppression(EngineConfig::default()).unwrap();
    let default = StyleEngine::new(EngineConfig::default()).unwrap();

    assert_eq!(render(&patched), snapshots["patched"]);
    assert_eq!(render(&default), snapshots["default"]);
}

#[test]
fn test_snapshot_is_stable_across_instances() {
    let a = StyleEngine::with_legacy_suppression(EngineConfig::default()).unwrap();
    let b = StyleEngine::with_legacy_suppression(EngineConfig::default()).unwrap();
    assert_eq!(render(&a), render(&b));
    assert_eq!(a.registered(CLASS), b.registered(CLASS));
}
