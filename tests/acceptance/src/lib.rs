//! Prefix Engine Acceptance Tests
//!
//! Scenario framework for checking the patched engine against the host's
//! default engine. A scenario compiles one fixture through both engines
//! and runs a check over the pair of outputs.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod assertions;
pub mod fixtures;
pub mod harness;

#[cfg(test)]
mod differential;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod snapshots;

use alloc::string::String;
use alloc::vec::Vec;

use assertions::AssertResult;
use fixtures::StyleFixture;

/// Scenario result status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestStatus {
    /// All checks passed
    Passed,
    /// A check failed
    Failed,
    /// Filtered out by tag
    Skipped,
}

/// CSS produced for one fixture by both engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    /// Host default engine, no suppression
    pub default: String,
    /// Engine with the legacy suppression walker registered
    pub patched: String,
}

/// A single acceptance scenario
#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub fixture: StyleFixture,
    pub tags: Vec<&'static str>,
    pub check: fn(&EngineOutput) -> AssertResult,
}

impl Scenario {
    pub fn new(
        name: &'static str,
        description: &'static str,
        fixture: StyleFixture,
        check: fn(&EngineOutput) -> AssertResult,
    ) -> Self {
        Self {
            name,
            description,
            fixture,
            tags: Vec::new(),
            check,
        }
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Outcome of one scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub status: TestStatus,
    pub error: Option<String>,
    pub output: Option<EngineOutput>,
}

impl ScenarioResult {
    pub fn passed(name: &'static str, output: EngineOutput) -> Self {
        Self {
            name,
            status: TestStatus::Passed,
            error: None,
            output: Some(output),
        }
    }

    pub fn failed(name: &'static str, error: String, output: EngineOutput) -> Self {
        Self {
            name,
            status: TestStatus::Failed,
            error: Some(error),
            output: Some(output),
        }
    }

    pub fn skipped(name: &'static str) -> Self {
        Self {
            name,
            status: TestStatus::Skipped,
            error: None,
            output: None,
        }
    }
}
