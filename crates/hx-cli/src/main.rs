//! Terminal front end for Hexagon: Dr. Eaton vs. Ton Drump.

mod commands;
mod terminal;

use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hexagon",
    about = "Dr. Eaton vs. Ton Drump, a text adventure in the Hexagon",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log generation and encounter rolls to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default when no subcommand is given)
    Play(PlayArgs),

    /// Generate a world and print where everything was placed
    Map {
        /// RNG seed for a reproducible world
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct PlayArgs {
    /// RNG seed for reproducible worlds and rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Length of dramatic pauses in milliseconds (default: 1500)
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the introduction
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or_else(|| Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => commands::play::run(
            args.seed,
            args.pace_ms,
            args.no_color,
            args.skip_intro,
        ),
        Commands::Map { seed, json } => commands::map::run(seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
