//! CLI frontend for the Role&Roll dice-pool engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::roll::RollArgs;

#[derive(Parser)]
#[command(
    name = "rr",
    about = "Role&Roll — dice pools with rerolls, bonus and penalty tokens",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool
    Roll {
        /// Tray tokens: a die count, `a<1-4>` advantage dice, `n<1-4>` negative dice
        tokens: Vec<String>,

        /// Read die configs from a JSON array instead of tray tokens
        #[arg(short, long, conflicts_with = "tokens")]
        file: Option<PathBuf>,

        /// Extra successes added to the dice total
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        bonus: i64,

        /// Penalties subtracted from the dice total
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        penalty: i64,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Roll these values in order (repeating) instead of random dice
        #[arg(long, value_delimiter = ',', conflicts_with = "seed")]
        script: Vec<u8>,

        /// Ask before rolling each batch of rerolls
        #[arg(short, long)]
        confirm: bool,

        /// Stop chasing rerolls after this many rounds
        #[arg(long, default_value_t = rr_engine::config::MAX_ROUNDS)]
        max_rounds: usize,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Show every die as it lands
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the face layout of one or more dice
    Faces {
        /// Tray tokens, e.g. `a2 n3` (default: a normal die)
        tokens: Vec<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            tokens,
            file,
            bonus,
            penalty,
            seed,
            script,
            confirm,
            max_rounds,
            json,
            verbose,
        } => commands::roll::run(&RollArgs {
            tokens,
            file,
            bonus,
            penalty,
            seed,
            script,
            confirm,
            max_rounds,
            json,
            verbose,
        }),
        Commands::Faces { tokens } => commands::faces::run(&tokens),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
