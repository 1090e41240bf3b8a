use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bngx",
    about = "Export spatial reaction network models to BioNetGen language",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a model description as a BNGL file
    #[command(visible_alias = "e")]
    Export(ExportArgs),

    /// Report active/total species and reactant classes of a model
    #[command(visible_alias = "s")]
    Stats(StatsArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Model description in TOML (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rate convention of the exported rate constants.
#[derive(Args)]
#[command(next_help_heading = "Rate Conversion")]
pub struct RateOptions {
    /// Express rates per molecule count for NFSim
    #[arg(long, requires = "volume", requires = "area")]
    pub nfsim: bool,

    /// Reference compartment volume in µm³ (with --nfsim)
    #[arg(long, value_name = "UM3", requires = "nfsim")]
    pub volume: Option<f64>,

    /// Reference compartment surface area in µm² (with --nfsim)
    #[arg(long, value_name = "UM2", requires = "nfsim")]
    pub area: Option<f64>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output BNGL file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Fail instead of warning when some rules cannot be exported
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub rates: RateOptions,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub io: IoOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
