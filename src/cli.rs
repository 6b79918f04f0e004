//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pesel_gen::output::DEFAULT_BATCH_DIR;

/// Top-level CLI parser for `pesel-gen`.
#[derive(Debug, Parser)]
#[command(
    name = "pesel-gen",
    version,
    about = "Generate every structurally valid PESEL number for a range of birth years"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write identifiers for a year range to stdout or a file.
    Generate(GenerateArgs),
    /// Write one file per year and sex into a directory.
    Batch(BatchArgs),
    /// Decode identifiers and verify their check digits.
    Check(CheckArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// First birth year (1800-2299).
    #[arg(value_name = "START_YEAR")]
    pub start_year: u16,

    /// Last birth year, inclusive. Defaults to START_YEAR.
    #[arg(value_name = "END_YEAR")]
    pub end_year: Option<u16>,

    /// Only generate identifiers for one sex: male, female or any.
    #[arg(long, short = 's', value_name = "SEX")]
    pub sex: Option<String>,

    /// Output file path. Writes to stdout when omitted.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking.
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Stop after this many identifiers.
    #[arg(long, short = 'n', value_name = "COUNT")]
    pub limit: Option<u64>,

    /// Do not draw a progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// First birth year.
    #[arg(value_name = "START_YEAR", default_value_t = 1950)]
    pub start_year: u16,

    /// Last birth year, inclusive.
    #[arg(value_name = "END_YEAR", default_value_t = 2030)]
    pub end_year: u16,

    /// Directory receiving `{year}_{sex}.txt` files.
    #[arg(long = "output-dir", short = 'd', value_name = "DIR", default_value = DEFAULT_BATCH_DIR)]
    pub output_dir: PathBuf,

    /// Do not draw progress bars.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Identifiers to decode.
    #[arg(value_name = "IDENTIFIER", required = true)]
    pub identifiers: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
