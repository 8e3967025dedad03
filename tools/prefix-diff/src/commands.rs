//! Subcommand handlers

use std::fmt;
use std::path::Path;

use prefix_engine::{Action, EngineError, Matcher, PrefixRule, RuleTable, StyleEngine};
use serde::Serialize;

use crate::cli::{CompileArgs, DiffArgs, SourceArgs};
use crate::config::load_config;
use crate::diff::{compile_with, diff_source, DiffReport};
use crate::error::PrefixDiffError;

/// Result of `compile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    /// `default` or `patched`.
    pub engine: &'static str,
    /// Plugin chain, in order.
    pub plugins: Vec<&'static str>,
    pub css: String,
}

impl fmt::Display for CompileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.css)
    }
}

/// Result of `rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesReport {
    pub rules: Vec<PrefixRule>,
}

impl fmt::Display for RulesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            let (kind, target) = match rule.matcher {
                Matcher::Property(name) => ("property", name),
                Matcher::Selector(fragment) => ("selector", fragment),
                Matcher::Value(fragment) => ("value", fragment),
                Matcher::AtRule(name) => ("at-rule", name),
            };
            let action = match rule.action {
                Action::Suppress => "suppress".to_string(),
                Action::Rewrite(value) => format!("rewrite -> {value}"),
                Action::LeaveDefault => "default".to_string(),
            };
            writeln!(f, "{kind:<10} {target:<28} {action}")?;
        }
        Ok(())
    }
}

/// Read a source file, rejecting files with nothing in them.
pub fn read_source(path: &Path) -> Result<String, PrefixDiffError> {
    let source = std::fs::read_to_string(path)?;
    if source.trim().is_empty() {
        return Err(PrefixDiffError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(source)
}

pub fn compile(args: &CompileArgs) -> Result<CompileReport, PrefixDiffError> {
    let SourceArgs {
        file,
        selector,
        config,
    } = &args.source;
    let config = load_config(config.as_deref())?;
    let source = read_source(file)?;

    let (engine, name) = if args.patched {
        (StyleEngine::with_legacy_suppression(config)?, "patched")
    } else {
        (StyleEngine::new(config)?, "default")
    };

    let css = if args.strict {
        let strict = match selector {
            Some(selector) => engine.compile_strict(selector, &source),
            None => engine.compile_global_strict(&source),
        };
        strict.map_err(|e| match e {
            EngineError::Parse(error) => PrefixDiffError::ParseFailed {
                path: file.clone(),
                message: error.to_string(),
            },
            other => other.into(),
        })?
    } else {
        compile_with(&engine, selector.as_deref(), &source)
    };
    log::info!("compiled {} with the {} engine", file.display(), name);

    Ok(CompileReport {
        engine: name,
        plugins: engine.plugin_names(),
        css,
    })
}

pub fn diff(args: &DiffArgs) -> Result<DiffReport, PrefixDiffError> {
    let config = load_config(args.source.config.as_deref())?;
    let source = read_source(&args.source.file)?;
    diff_source(&config, args.source.selector.as_deref(), &source)
}

pub fn rules() -> RulesReport {
    RulesReport {
        rules: RuleTable::legacy().rules().to_vec(),
    }
}
