//! Reversi-Cube command line.
//!
//! ## Usage
//!
//! - `reversi-cube` - Run the text protocol on stdin/stdout (cube board)
//! - `reversi-cube --variant plane protocol` - Same, on the 8x8 board
//! - `reversi-cube demo --seed 3` - Play and print one random game
//! - `reversi-cube perft --depth 4` - Count move-tree leaves
//!
//! Logs go to stderr. Set `RUST_LOG` to override the filter.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use reversi_cube::geometry::{Cube, Geometry, Plane};
use reversi_cube::playout::{random_game, run_perft};
use reversi_cube::protocol::Session;

/// Reversi-Cube: Reversi on an 8x8 plane or a 4x4x4 cube
#[derive(Parser)]
#[command(name = "reversi-cube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board shape
    #[arg(long, value_enum, global = true, default_value_t = Variant::Cube)]
    variant: Variant,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// 8x8 board, 8 directions
    Plane,
    /// 4x4x4 board, 26 directions
    Cube,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the line-oriented text protocol on stdin/stdout
    Protocol,
    /// Play one random game and print it
    Demo {
        /// Seed for the move picker
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Count move-tree leaves from the starting position
    Perft {
        /// Plies to search
        #[arg(long, default_value_t = 4)]
        depth: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Protocol);
    match cli.variant {
        Variant::Plane => dispatch::<Plane>(command),
        Variant::Cube => dispatch::<Cube>(command),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch<G: Geometry>(command: Commands) -> Result<()> {
    match command {
        Commands::Protocol => {
            let stdin = io::stdin();
            Session::<G>::new()
                .run(stdin.lock(), io::stdout())
                .context("text protocol session failed")?;
        }
        Commands::Demo { seed } => run_demo::<G>(seed),
        Commands::Perft { depth } => {
            for d in 1..=depth {
                println!("perft({d}) = {}", run_perft::<G>(d));
            }
        }
    }
    Ok(())
}

fn run_demo<G: Geometry>(seed: u64) {
    println!("Reversi-Cube: random {} game (seed {seed})\n", G::NAME);

    let mut rng = fastrand::Rng::with_seed(seed);
    let record = random_game::<G>(&mut rng);

    let played: Vec<String> = record
        .moves
        .iter()
        .filter_map(|&index| G::coord_of(index).map(|c| c.to_string()))
        .collect();
    println!("Moves ({}): {}", played.len(), played.join(" "));
    println!("Passes: {}", record.passes);
    println!("{}", record.final_state.board());

    let score = record.final_state.score();
    println!(
        "Result: {} (black {} white {} empty {})",
        record.final_state.message(),
        score.black,
        score.white,
        score.empty
    );
}
