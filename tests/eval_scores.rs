use checkers_solver::core::board::Board;
use checkers_solver::core::piece::Side;
use checkers_solver::eval::{evaluate, TERMINAL_SCORE};

fn board(rows: [&str; 8]) -> Board {
    Board::parse(&rows.join("\n")).unwrap()
}

fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "score {actual} != expected {expected}"
    );
}

#[test]
fn zero_black_pieces_is_plus_ten() {
    let start = board([
        "........",
        "........",
        "..r.R...",
        "........",
        "........",
        "....r...",
        "........",
        "........",
    ]);
    assert!(start.is_terminal());
    assert_score(evaluate(&start, Side::Red), TERMINAL_SCORE);
    assert_score(evaluate(&start, Side::Black), TERMINAL_SCORE);
}

#[test]
fn zero_red_pieces_is_minus_ten() {
    let start = board([
        "........",
        "....B...",
        "........",
        "........",
        "..b.....",
        "........",
        "........",
        "........",
    ]);
    assert!(start.is_terminal());
    assert_score(evaluate(&start, Side::Red), -TERMINAL_SCORE);
    assert_score(evaluate(&start, Side::Black), -TERMINAL_SCORE);
}

#[test]
fn heuristic_sum_with_red_to_move() {
    // Red man (4,3): material 1.0, center 0.5, one jump chain 1.0,
    // advancement 3 rows = 1.5, adjacent opponent 0.3  => 4.3.
    // Black man (3,2): material -1.0, center -0.5, advancement 3 rows
    // = -1.5, adjacent opponent -0.3                   => -3.3.
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
    assert_score(evaluate(&start, Side::Red), 1.0);
}

#[test]
fn chain_jump_bonus_follows_side_to_move() {
    // Same position as above with black to move: red loses its chain-jump
    // credit, black gains one (jumping (4,3) toward (5,4)).
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
    assert_score(evaluate(&start, Side::Black), -1.0);
}

#[test]
fn adjacency_credits_both_sides_of_a_pair() {
    // Red man (7,0): material 1.0, edge 0.2, one jump chain 1.0,
    // adjacency 0.3                                    => 2.5.
    // Black man (6,1): material -1.0, advance -1.0, advancement 6 rows
    // = -3.0, adjacency -0.3                           => -5.3.
    let start = board([
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        ".b......",
        "r.......",
    ]);
    assert_score(evaluate(&start, Side::Red), -2.8);
}

#[test]
fn pressing_bonus_requires_own_side_ahead() {
    // Red is up 2 to 1, so each red man earns 0.2 per advanced row on top
    // of the 0.5; black, behind on material, earns none.
    // Red men (6,1), (6,5): 1.0 + 0.5 + 0.2 each      => 3.4.
    // Black man (1,2): -1.0 - 0.5                     => -1.5.
    let start = board([
        "........",
        "..b.....",
        "........",
        "........",
        "........",
        "........",
        ".r...r..",
        "........",
    ]);
    assert_score(evaluate(&start, Side::Black), 1.9);
}

#[test]
fn kings_score_material_without_advance_bonus() {
    // Red king (5,0): material 3.0, edge 0.2, advancement 2 rows = 1.0
    //                                                  => 4.2.
    // Black man (1,2): -1.0 - 0.5                     => -1.5.
    let start = board([
        "........",
        "..b.....",
        "........",
        "........",
        "........",
        "R.......",
        "........",
        "........",
    ]);
    assert_score(evaluate(&start, Side::Black), 2.7);
}
