//! Scenario runner
//!
//! Holds one default and one patched engine and runs scenarios over them.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;

use prefix_engine::{EngineConfig, Result, StyleEngine};

use crate::fixtures::StyleFixture;
use crate::{EngineOutput, Scenario, ScenarioResult, TestStatus};

/// The host default engine next to the patched one, built from one config.
pub struct EnginePair {
    pub default: StyleEngine,
    pub patched: StyleEngine,
}

impl EnginePair {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            default: StyleEngine::new(config.clone())?,
            patched: StyleEngine::with_legacy_suppression(config)?,
        })
    }

    /// Compile a fixture through both engines, bypassing the cache.
    pub fn compile(&self, fixture: &StyleFixture) -> EngineOutput {
        EngineOutput {
            default: compile_with(&self.default, fixture),
            patched: compile_with(&self.patched, fixture),
        }
    }

    /// Feed each engine's output back through the same engine.
    pub fn recompile(&self, output: &EngineOutput) -> EngineOutput {
        EngineOutput {
            default: self.default.compile_global(&output.default),
            patched: self.patched.compile_global(&output.patched),
        }
    }
}

fn compile_with(engine: &StyleEngine, fixture: &StyleFixture) -> String {
    if fixture.is_global() {
        engine.compile_global(fixture.source)
    } else {
        engine.compile(fixture.selector, fixture.source)
    }
}

/// Runner configuration
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Only run scenarios carrying this tag
    pub tag_filter: Option<String>,
    /// Stop on first failure
    pub fail_fast: bool,
}

/// Summary of a run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<ScenarioResult>,
    pub counts: HashMap<TestStatus, usize>,
}

impl RunReport {
    pub fn count(&self, status: TestStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn all_passed(&self) -> bool {
        self.count(TestStatus::Failed) == 0
    }

    /// Failure messages, one per failed scenario.
    pub fn failures(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|r| {
                r.error
                    .as_ref()
                    .map(|e| alloc::format!("{}: {}", r.name, e))
            })
            .collect()
    }
}

/// Runs scenarios over an engine pair
pub struct ScenarioRunner {
    engines: EnginePair,
    config: RunnerConfig,
}

impl ScenarioRunner {
    pub fn new(engines: EnginePair, config: RunnerConfig) -> Self {
        Self { engines, config }
    }

    pub fn engines(&self) -> &EnginePair {
        &self.engines
    }

    pub fn run(&self, scenarios: &[Scenario]) -> RunReport {
        let mut report = RunReport::default();

        for scenario in scenarios {
            let result = match &self.config.tag_filter {
                Some(tag) if !scenario.has_tag(tag) => ScenarioResult::skipped(scenario.name),
                _ => self.run_one(scenario),
            };

            *report.counts.entry(result.status).or_insert(0) += 1;
            let failed = result.status == TestStatus::Failed;
            report.results.push(result);
            if failed && self.config.fail_fast {
                break;
            }
        }

        report
    }

    fn run_one(&self, scenario: &Scenario) -> ScenarioResult {
        let output = self.engines.compile(&scenario.fixture);
        match (scenario.check)(&output) {
            Ok(()) => ScenarioResult::passed(scenario.name, output),
            Err(error) => ScenarioResult::failed(scenario.name, error, output),
        }
    }
}
