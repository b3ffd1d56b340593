//! Plays out a checkers position file and writes the board trace.
//!
//! ```text
//! solve_game --input puzzle.txt --output solution.txt
//! ```
//!
//! The trace file holds the initial board followed by one snapshot per
//! ply, blank-line separated. Set `RUST_LOG=debug` for per-ply logging.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use checkers_solver::core::piece::Side;
use checkers_solver::game::{play_out, GameLimits};
use checkers_solver::search::alphabeta::SearchConfig;
use checkers_solver::trace::{read_board_file, write_report, write_trace};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstSide {
    Red,
    Black,
}

impl From<FirstSide> for Side {
    fn from(value: FirstSide) -> Self {
        match value {
            FirstSide::Red => Side::Red,
            FirstSide::Black => Side::Black,
        }
    }
}

/// Forced-line solver for 8x8 checkers positions.
#[derive(Parser, Debug)]
#[command(name = "solve_game", version)]
struct Args {
    /// Input board file: 8 lines of 8 symbols from {., r, R, b, B}.
    #[arg(short, long)]
    input: PathBuf,

    /// Output trace file (initial board plus one snapshot per ply).
    #[arg(short, long)]
    output: PathBuf,

    /// Side to move first.
    #[arg(long, value_enum, default_value = "red")]
    first: FirstSide,

    /// Search depth in plies.
    #[arg(long, default_value_t = 7)]
    depth: u32,

    /// Maximum plies to play before giving up.
    #[arg(long, default_value_t = 500)]
    max_plies: u32,

    /// Disable the repeated-position stop condition.
    #[arg(long)]
    no_repetition_check: bool,

    /// Write a JSON summary of the playout here.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.depth >= 1, "--depth must be at least 1");

    let board = read_board_file(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let config = SearchConfig {
        depth_limit: args.depth,
    };
    let limits = GameLimits {
        max_plies: args.max_plies,
        repetition_check: !args.no_repetition_check,
    };

    let playout = play_out(board, args.first.into(), &config, &limits);
    write_trace(&args.output, &playout.trace)
        .with_context(|| format!("writing {}", args.output.display()))?;
    if let Some(summary) = &args.summary {
        write_report(summary, &playout.report)
            .with_context(|| format!("writing {}", summary.display()))?;
    }

    let report = &playout.report;
    println!(
        "{} plies, outcome {:?}, {} nodes searched",
        report.plies, report.outcome, report.search.nodes
    );
    Ok(())
}
