//! Depth-limited minimax with alpha-beta pruning.
//!
//! Red runs the maximizing layers, black the minimizing ones. Each layer is
//! a pure function of (board, alpha, beta, ply); the only state threaded
//! through the recursion is the stats counter. Alpha and beta are passed by
//! value, so the window narrows monotonically down a branch and never
//! widens.

use serde::Serialize;
use tracing::debug;

use crate::core::board::Board;
use crate::core::piece::Side;
use crate::error::SolverError;
use crate::eval::evaluate;
use crate::rules::movegen::generate_moves;

/// Sentinel bounds for the alpha-beta window, far outside any heuristic
/// score.
const VALUE_INF: f64 = 10_000.0;

/// Search parameters, passed explicitly into every entry point.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies searched below the root before the evaluator is consulted.
    /// Must be at least 1.
    pub depth_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth_limit: 7 }
    }
}

/// Counters accumulated over one root search.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes: u64,
    /// Branches abandoned by an alpha or beta cutoff.
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Backed-up value at the root.
    pub value: f64,
    /// Board after the chosen ply; `None` exactly when the root position
    /// had no successors for the side to move.
    pub best: Option<Board>,
    pub stats: SearchStats,
}

/// Picks the best ply for `side` from `board`.
///
/// Ties are broken by the generator's first-encountered order. A root with
/// no successors (terminal position, or a side blocked with pieces on the
/// board) reports the position's own score and no best move.
pub fn choose_move(board: &Board, side: Side, config: &SearchConfig) -> SearchResult {
    debug_assert!(config.depth_limit >= 1);
    let mut stats = SearchStats::default();
    let (value, best) = match side {
        Side::Red => max_value(board, -VALUE_INF, VALUE_INF, 0, config, &mut stats),
        Side::Black => min_value(board, -VALUE_INF, VALUE_INF, 0, config, &mut stats),
    };
    debug!(
        %side,
        value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "root search finished"
    );
    SearchResult { value, best, stats }
}

/// Like [`choose_move`], but for callers that require a move: an absent
/// best move becomes [`SolverError::NoLegalMove`].
pub fn best_move(board: &Board, side: Side, config: &SearchConfig) -> Result<Board, SolverError> {
    choose_move(board, side, config)
        .best
        .ok_or(SolverError::NoLegalMove { side })
}

fn max_value(
    board: &Board,
    mut alpha: f64,
    beta: f64,
    ply: u32,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> (f64, Option<Board>) {
    stats.nodes += 1;
    if board.is_terminal() || ply >= config.depth_limit {
        return (evaluate(board, Side::Red), None);
    }
    let successors = generate_moves(board, Side::Red);
    if successors.is_empty() {
        return (evaluate(board, Side::Red), None);
    }

    let mut value = -VALUE_INF;
    let mut best = None;
    for successor in successors {
        let (reply, _) = min_value(&successor, alpha, beta, ply + 1, config, stats);
        if reply > value {
            value = reply;
            best = Some(successor);
        }
        if value >= beta {
            stats.cutoffs += 1;
            return (value, best);
        }
        alpha = alpha.max(value);
    }
    (value, best)
}

fn min_value(
    board: &Board,
    alpha: f64,
    mut beta: f64,
    ply: u32,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> (f64, Option<Board>) {
    stats.nodes += 1;
    if board.is_terminal() || ply >= config.depth_limit {
        return (evaluate(board, Side::Black), None);
    }
    let successors = generate_moves(board, Side::Black);
    if successors.is_empty() {
        return (evaluate(board, Side::Black), None);
    }

    let mut value = VALUE_INF;
    let mut best = None;
    for successor in successors {
        let (reply, _) = max_value(&successor, alpha, beta, ply + 1, config, stats);
        if reply < value {
            value = reply;
            best = Some(successor);
        }
        if value <= alpha {
            stats.cutoffs += 1;
            return (value, best);
        }
        beta = beta.min(value);
    }
    (value, best)
}
