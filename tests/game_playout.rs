use checkers_solver::core::board::Board;
use checkers_solver::core::coord::Coord;
use checkers_solver::core::piece::{Piece, Rank, Side};
use checkers_solver::game::{play_out, GameLimits, Outcome};
use checkers_solver::search::alphabeta::SearchConfig;

fn board(rows: [&str; 8]) -> Board {
    Board::parse(&rows.join("\n")).unwrap()
}

#[test]
fn one_capture_endgame_ends_in_a_red_win() {
    let start = board([
        "........",
        "........",
        "........",
        "..b.....",
        "...r....",
        "........",
        "........",
        "........",
    ]);
    let config = SearchConfig { depth_limit: 3 };
    let playout = play_out(start.clone(), Side::Red, &config, &GameLimits::default());

    assert_eq!(playout.report.outcome, Outcome::RedWins);
    assert_eq!(playout.report.plies, 1);
    assert_eq!(playout.trace.len(), 2);
    assert_eq!(playout.trace[0], start);
    assert_eq!(playout.trace[1].count(Side::Black), 0);
    assert_eq!(
        playout.trace[1].piece_at(Coord::new(2, 1)),
        Some(Piece::new(Side::Red, Rank::Man))
    );
}

#[test]
fn blocked_side_loses_by_no_moves() {
    let start = board([
        "........",
        "........",
        "........",
        "........",
        "...b....",
        "b.b.....",
        ".r......",
        "r.......",
    ]);
    let playout = play_out(
        start,
        Side::Red,
        &SearchConfig::default(),
        &GameLimits::default(),
    );
    assert_eq!(playout.report.outcome, Outcome::NoMoves { side: Side::Red });
    assert_eq!(playout.report.plies, 0);
    assert_eq!(playout.trace.len(), 1);
}

#[test]
fn ply_budget_stops_an_unresolved_game() {
    let start = board([
        ".......B",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "R.......",
    ]);
    let config = SearchConfig { depth_limit: 2 };
    let limits = GameLimits {
        max_plies: 2,
        repetition_check: false,
    };
    let playout = play_out(start, Side::Red, &config, &limits);
    assert_eq!(playout.report.outcome, Outcome::PlyLimit);
    assert_eq!(playout.report.plies, 2);
    assert_eq!(playout.trace.len(), 3);
}

#[test]
fn playout_from_the_opening_terminates_and_reports() {
    let start = Board::standard_start();
    let config = SearchConfig { depth_limit: 2 };
    let limits = GameLimits {
        max_plies: 2000,
        repetition_check: true,
    };
    let playout = play_out(start.clone(), Side::Red, &config, &limits);

    assert_eq!(playout.trace[0], start);
    assert_eq!(playout.trace.len() as u32, playout.report.plies + 1);
    assert!(playout.report.plies <= 2000);
    assert!(playout.report.search.nodes > 0);
    // Piece counts never increase along the trace.
    for pair in playout.trace.windows(2) {
        assert!(pair[1].count(Side::Red) <= pair[0].count(Side::Red));
        assert!(pair[1].count(Side::Black) <= pair[0].count(Side::Black));
    }
}

#[test]
fn terminal_start_plays_no_moves() {
    let start = board([
        "........",
        "........",
        "....b...",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let playout = play_out(
        start,
        Side::Red,
        &SearchConfig::default(),
        &GameLimits::default(),
    );
    assert_eq!(playout.report.outcome, Outcome::BlackWins);
    assert_eq!(playout.report.plies, 0);
}
