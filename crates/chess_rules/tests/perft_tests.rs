use std::time::Instant;

use rayon::prelude::*;

use chess_rules::{GameState, perft};

/// Start-position node counts. Castling, en passant and promotion first occur
/// at depth 5, so these hold for a generator that omits them.
const STARTPOS_COUNTS: &[(u8, u64)] = &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)];

#[test]
fn perft_from_start_position() {
    STARTPOS_COUNTS.par_iter().for_each(|&(depth, expected)| {
        let start = Instant::now();
        let mut game = GameState::new();
        let got = perft(&mut game, depth);
        assert!(
            got == expected,
            "Perft mismatch at depth {}: expected {}, got {}",
            depth,
            expected,
            got
        );
        println!(
            "depth {} done: {} nodes, elapsed {:.3?}",
            depth,
            got,
            start.elapsed()
        );
    });
}

#[test]
fn perft_leaves_game_unchanged() {
    let mut game = GameState::new();
    let board = game.board().clone();
    assert_eq!(perft(&mut game, 3), 8_902);
    assert_eq!(game.board(), &board);
    assert!(game.history().is_empty());
    assert_eq!(perft(&mut game, 0), 1);
}
