//! Chess rules engine.
//!
//! Tracks board state, enumerates legal moves for the side to move, applies
//! and reverses moves, and detects check. Castling, en passant and promotion
//! are not modelled, and the engine never declares a game over: a side with
//! no legal moves simply gets an empty list.
//!
//! ```
//! use chess_rules::{GameState, Square};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.valid_moves().len(), 20);
//!
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! let mv = game.find_valid_move(from, to).unwrap();
//! game.apply_move(mv).unwrap();
//! assert_eq!(game.history().len(), 1);
//! ```

pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::RulesError;
pub use game::*;
pub use movegen::legal_moves_into;
pub use moves::*;
pub use perft::perft;
pub use types::*;
