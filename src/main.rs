//! Binary entrypoint for the `pesel-gen` CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_batch, run_check, run_generate};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let result = match &cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Batch(args) => run_batch(args),
        Command::Check(args) => run_check(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
