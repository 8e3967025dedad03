//! prefix-diff: compare the default and legacy-suppressing style engines.

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod output;
