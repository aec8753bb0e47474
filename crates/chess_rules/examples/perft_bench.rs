//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth]
//!
//! Default depth is 4. Reports nodes per second for each layout.

use chess_rules::{Board, Color, GameState, perft};
use std::env;
use std::time::{Duration, Instant};

/// Layouts covering an opening and a crowded middlegame.
const TEST_LAYOUTS: &[(&str, [&str; 8])] = &[
    (
        "Starting position",
        [
            "bR bN bB bQ bK bB bN bR",
            "bP bP bP bP bP bP bP bP",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "wP wP wP wP wP wP wP wP",
            "wR wN wB wQ wK wB wN wR",
        ],
    ),
    (
        "Open middlegame",
        [
            "bR -- -- bQ -- bR bK --",
            "-- bP bP -- -- bP bP bP",
            "bP -- bN bP -- bN -- --",
            "-- -- bB -- bP -- wB --",
            "-- -- wB -- wP -- bB --",
            "wP -- wN wP -- wN -- --",
            "-- wP wP -- wQ wP wP wP",
            "wR -- -- -- -- wR wK --",
        ],
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, rows) in TEST_LAYOUTS {
        let board = Board::from_codes(rows).expect("benchmark layout is valid");
        let mut game = GameState::from_board(board, Color::White).expect("layout is a legal position");

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&mut game, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
