//! Default versus patched engine
//!
//! Every legacy variant must be present in the default engine's output and
//! absent from the patched engine's output for the same source.

use crate::assertions::*;
use crate::fixtures::{StyleFixtures, NEGATIVE_CONTROL};
use crate::harness::{EnginePair, RunnerConfig, ScenarioRunner};
use crate::{EngineOutput, Scenario, TestStatus};
use prefix_engine::EngineConfig;

fn runner() -> ScenarioRunner {
    ScenarioRunner::new(
        EnginePair::new(EngineConfig::default()).unwrap(),
        RunnerConfig::default(),
    )
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "animation-family",
            "animation declarations lose their -webkit- copies",
            StyleFixtures::animation_family(),
            |out: &EngineOutput| {
                assert_count(&out.default, "-webkit-animation", 9)?;
                assert_no_legacy_prefixes(&out.patched)?;
                assert_count(&out.patched, "animation", 9)
            },
        )
        .with_tag("animation"),
        Scenario::new(
            "keyframes",
            "@keyframes is not duplicated as @-webkit-keyframes",
            StyleFixtures::keyframes(),
            |out: &EngineOutput| {
                assert_contains(&out.default, "@-webkit-keyframes testAnim{")?;
                assert_absent(&out.patched, "-webkit-keyframes")?;
                assert_count(&out.patched, "@keyframes testAnim{", 1)
            },
        )
        .with_tag("animation"),
        Scenario::new(
            "placeholder",
            "::placeholder keeps only the standard spelling",
            StyleFixtures::placeholder(),
            |out: &EngineOutput| {
                assert_contains(&out.default, ".field::-moz-placeholder{color:red;}")?;
                assert_contains(&out.default, ".field::-webkit-input-placeholder{color:red;}")?;
                assert_contains(&out.default, ".field:-ms-input-placeholder{color:red;}")?;
                assert_no_legacy_prefixes(&out.patched)?;
                assert_eq(
                    out.patched.as_str(),
                    ".field::placeholder{color:red;}.field input::placeholder{opacity:0.5;}",
                )
            },
        )
        .with_tag("selector"),
        Scenario::new(
            "read-only",
            ":read-only has no -moz- copy",
            StyleFixtures::read_only(),
            |out: &EngineOutput| {
                assert_contains(&out.default, "input:-moz-read-only{background:#eee;}")?;
                assert_eq(out.patched.as_str(), "input:read-only{background:#eee;}")
            },
        )
        .with_tag("selector"),
        Scenario::new(
            "read-write",
            ":read-write has no -moz- copy",
            StyleFixtures::read_write(),
            |out: &EngineOutput| {
                assert_contains(&out.default, "textarea:-moz-read-write{border-color:blue;}")?;
                assert_eq(out.patched.as_str(), "textarea:read-write{border-color:blue;}")
            },
        )
        .with_tag("selector"),
        Scenario::new(
            "component",
            "suppression leaves unrelated prefixes alone",
            StyleFixtures::component(),
            |out: &EngineOutput| {
                assert_no_legacy_prefixes(&out.patched)?;
                for kept in [
                    "display:-webkit-box;",
                    "-ms-user-select:none;",
                    "-webkit-transition:opacity 0.2s;",
                    "cursor:-webkit-grab;",
                    "width:-moz-fit-content;",
                ] {
                    assert_contains(&out.default, kept)?;
                    assert_contains(&out.patched, kept)?;
                }
                assert_absent(&out.patched, "label")
            },
        ),
    ]
}

#[test]
fn test_differential_scenarios() {
    let report = runner().run(&scenarios());
    assert!(report.all_passed(), "{:#?}", report.failures());
    assert_eq!(report.count(TestStatus::Passed), 6);
}

#[test]
fn test_tag_filter() {
    let runner = ScenarioRunner::new(
        EnginePair::new(EngineConfig::default()).unwrap(),
        RunnerConfig {
            tag_filter: Some("selector".into()),
            fail_fast: false,
        },
    );
    let report = runner.run(&scenarios());
    assert_eq!(report.count(TestStatus::Passed), 3);
    assert_eq!(report.count(TestStatus::Skipped), 3);
}

#[test]
fn test_negative_control() {
    // Suppression is opt-in: the default engine still emits the variants.
    let engines = EnginePair::new(EngineConfig::default()).unwrap();
    let class = engines.default.insert(&engines.default.css(NEGATIVE_CONTROL));
    let css = engines.default.sheet();
    assert_eq!(class, "css-1h5a7xg");
    assert!(css.contains("-webkit-animation:something;"), "{}", css);
    assert!(css.contains("::-moz-placeholder{color:red;}"), "{}", css);

    engines.patched.insert(&engines.patched.css(NEGATIVE_CONTROL));
    let patched = engines.patched.sheet();
    assert!(assert_no_legacy_prefixes(&patched).is_ok(), "{}", patched);
    assert!(patched.contains("animation:something;"));
    assert!(patched.contains("::placeholder{color:red;}"));
}

#[test]
fn test_failing_check_is_reported() {
    let broken = vec![Scenario::new(
        "expects-prefix-in-patched",
        "",
        StyleFixtures::keyframes(),
        |out: &EngineOutput| assert_contains(&out.patched, "@-webkit-keyframes"),
    )];
    let report = runner().run(&broken);
    assert!(!report.all_passed());
    assert_eq!(report.failures().len(), 1);
}
