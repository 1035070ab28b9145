//! `tourdiff` command line tool.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tourdiff::console;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tourdiff",
    version,
    about = "Split the difference between two tours into disjoint k-opt moves"
)]
struct Cli {
    /// Log islands and junction splits (-vv also logs blocked branches)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decompose the difference between two TSPLIB tours
    Diff {
        /// Tour whose exclusive edges are removed
        first: PathBuf,
        /// Tour whose exclusive edges are added
        second: PathBuf,
        /// Write the moves as JSON here instead of printing them
        output: Option<PathBuf>,
        /// Decomposition config file (TOML or YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Keep islands whole instead of splitting them at junctions
        #[arg(long)]
        no_split: bool,
        /// Split islands in parallel
        #[arg(long)]
        parallel: bool,
        /// Verify that the moves partition the difference
        #[arg(long)]
        full_assert: bool,
    },

    /// Print the length of a tour
    Length {
        /// TSPLIB instance with NODE_COORD_SECTION
        instance: PathBuf,
        /// TSPLIB tour
        tour: PathBuf,
    },

    /// Print the gain and size of each move in a move file
    Report {
        /// TSPLIB instance with NODE_COORD_SECTION
        instance: PathBuf,
        /// JSON move file written by `tourdiff diff`
        moves: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        let level = match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        console::init_with_level(level);
    }

    let result = match cli.command {
        Command::Diff {
            first,
            second,
            output,
            config,
            no_split,
            parallel,
            full_assert,
        } => commands::DiffArgs {
            first,
            second,
            output,
            config,
            no_split,
            parallel,
            full_assert,
        }
        .run(),
        Command::Length { instance, tour } => commands::length(&instance, &tour),
        Command::Report { instance, moves } => commands::report(&instance, &moves),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
