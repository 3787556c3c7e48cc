use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fastq-stats",
    version,
    about = "Read count, length, quality and base composition statistics for FASTQ"
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one FASTQ file (plain or .gz)
    Run(RunArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    pub reads: PathBuf,

    /// Write summary.txt, stats.json and a zip bundle under this directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long)]
    pub sample_name: Option<String>,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    #[arg(long, value_enum, default_value_t = PhredOffsetArg::P33)]
    pub phred_offset: PhredOffsetArg,

    #[arg(long, default_value_t = false)]
    pub no_zip: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PhredOffsetArg {
    #[value(name = "33")]
    P33,
    #[value(name = "64")]
    P64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}
