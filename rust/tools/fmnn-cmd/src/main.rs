use anyhow::Result;
use clap::{Parser, Subcommand};
use fmnn::StrategyKind;

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "fmnn-cmd")]
#[command(about = "Command-line utility computing the first missing non-negative integer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the first missing non-negative integer of a JSON array
    Solve {
        /// Strategy to run: naive, sort, linear-linear or linear-const.
        /// When omitted, all strategies run and must agree.
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// JSON file holding the input array (defaults to stdin)
        file: Option<String>,
    },

    /// Generate a random heterogeneous JSON array
    Generate {
        /// Number of elements
        #[arg(short, long)]
        len: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Test whether a value belongs to range(start, stop, step)
    #[command(allow_negative_numbers = true)]
    InRange {
        /// The value, as a JSON literal (`3`, `3.0`, `"3"`)
        value: String,

        /// Range start, or the exclusive upper bound when `stop` is omitted
        start: i64,

        /// Exclusive range end
        stop: Option<i64>,

        /// Range step (must not be zero)
        #[arg(long, default_value_t = 1)]
        step: i64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { strategy, file } => commands::solve::run(strategy, file),
        Commands::Generate { len, seed, output } => commands::generate::run(len, seed, output),
        Commands::InRange {
            value,
            start,
            stop,
            step,
        } => commands::in_range::run(&value, start, stop, step),
    }
}
