//! Plays a position forward with the search engine until it resolves.
//!
//! The search itself always runs to its configured depth; [`GameLimits`]
//! bounds the number of turns the driver takes, so a playout terminates
//! even on positions the search alone would shuffle forever.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::board::Board;
use crate::core::piece::Side;
use crate::search::alphabeta::{choose_move, SearchConfig, SearchStats};

/// Guards on the playout loop.
#[derive(Debug, Clone, Copy)]
pub struct GameLimits {
    /// Hard cap on plies played before the driver gives up.
    pub max_plies: u32,
    /// Stop when a (board, side-to-move) pair repeats.
    pub repetition_check: bool,
}

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            max_plies: 500,
            repetition_check: true,
        }
    }
}

/// How a playout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Black is out of pieces.
    RedWins,
    /// Red is out of pieces.
    BlackWins,
    /// `side` still has pieces but no legal move; scored as a loss for it.
    NoMoves { side: Side },
    /// A position repeated with the same side to move.
    Repetition,
    /// The ply budget ran out first.
    PlyLimit,
}

/// Summary of one playout, shaped for the JSON report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameReport {
    pub plies: u32,
    pub outcome: Outcome,
    pub search: SearchStats,
}

/// A finished playout: every board from the start position onward, plus
/// the report.
#[derive(Debug, Clone)]
pub struct Playout {
    /// `trace[0]` is the start position; each further entry is one ply.
    pub trace: Vec<Board>,
    pub report: GameReport,
}

/// Runs the game from `start` with `first` to move until a stop condition
/// fires. The side to move alternates after every applied board; a
/// multi-jump chain consumes exactly one turn.
pub fn play_out(start: Board, first: Side, config: &SearchConfig, limits: &GameLimits) -> Playout {
    let mut trace = vec![start.clone()];
    let mut board = start;
    let mut side = first;
    let mut totals = SearchStats::default();
    let mut seen: FxHashSet<(Board, Side)> = FxHashSet::default();
    seen.insert((board.clone(), side));

    let outcome = loop {
        if board.count(Side::Red) == 0 {
            break Outcome::BlackWins;
        }
        if board.count(Side::Black) == 0 {
            break Outcome::RedWins;
        }
        let plies_played = (trace.len() - 1) as u32;
        if plies_played >= limits.max_plies {
            warn!(max_plies = limits.max_plies, "ply budget exhausted");
            break Outcome::PlyLimit;
        }

        let result = choose_move(&board, side, config);
        totals.merge(&result.stats);
        let Some(next) = result.best else {
            info!(%side, "side to move has no legal move");
            break Outcome::NoMoves { side };
        };
        debug!(ply = plies_played + 1, %side, value = result.value, "applied ply");

        board = next;
        side = side.opponent();
        trace.push(board.clone());
        if limits.repetition_check && !seen.insert((board.clone(), side)) {
            break Outcome::Repetition;
        }
    };

    let plies = (trace.len() - 1) as u32;
    info!(?outcome, plies, nodes = totals.nodes, "playout finished");
    Playout {
        trace,
        report: GameReport {
            plies,
            outcome,
            search: totals,
        },
    }
}
