use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[macro_use]
mod log_macros;

mod cmd_check;
mod cmd_run;

#[derive(Parser)]
#[command(name = "logxform", about = "Remap synthetic metric samples into dashboard log records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform an input JSONL file (default when no subcommand is given)
    Run(RunArgs),
    /// Check that a transformed JSONL file is well formed
    Check {
        /// Path to the transformed JSONL file
        file: PathBuf,

        /// Output format: "text" or "json"
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Args, Default)]
pub(crate) struct RunArgs {
    /// Path to logxform.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input JSONL file (overrides paths.input)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output JSONL file (overrides paths.output)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum number of input lines to inspect (overrides transform.limit)
    #[arg(long)]
    limit: Option<usize>,

    /// Seed for fallback values (overrides transform.seed)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => cmd_run::run(args),
        Commands::Check { file, format } => cmd_check::run(file, format),
    }
}
