use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Compare vendor prefixes emitted by the default and the legacy-suppressing
/// style engines.
#[derive(Parser, Debug)]
#[command(name = "prefix-diff", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for all subcommands.
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    /// Log engine activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a CSS-in-JS file and print the CSS.
    Compile(CompileArgs),

    /// Compile a file through both engines and list what differs.
    Diff(DiffArgs),

    /// List the legacy prefix suppression rules.
    Rules,
}

/// Source and engine options shared by all compiling subcommands.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSS-in-JS source file.
    pub file: PathBuf,

    /// Scope the source under this selector; compiled unscoped if omitted.
    #[arg(long)]
    pub selector: Option<String>,

    /// TOML engine config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Use the engine that suppresses legacy prefixes.
    #[arg(long)]
    pub patched: bool,

    /// Fail on source the parser has to recover from.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
