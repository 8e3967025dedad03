use std::process::ExitCode;

use clap::Parser;

use prefix_diff::cli::{Cli, Command};
use prefix_diff::error::PrefixDiffError;
use prefix_diff::{commands, output};

fn run(cli: &Cli) -> Result<(), PrefixDiffError> {
    match &cli.command {
        Command::Compile(args) => output::emit(cli.output, &commands::compile(args)?)?,
        Command::Diff(args) => output::emit(cli.output, &commands::diff(args)?)?,
        Command::Rules => output::emit(cli.output, &commands::rules())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::emit_error(cli.output, e.exit_code_num(), &e.to_string());
            e.exit_code()
        }
    }
}
