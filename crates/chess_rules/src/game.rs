//! Game state: the board plus everything needed to step it forward and back.

use tracing::{debug, warn};

use crate::{board::Board, error::RulesError, moves::Move, types::*};

/// Owns the board, whose turn it is, where both kings stand, and the moves
/// played so far.
///
/// Every mutation goes through [`GameState::make_move`] or
/// [`GameState::undo_move`], which keep `king_locations` in step with the
/// board.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) king_locations: [Square; 2],
    pub(crate) history: Vec<Move>,
    /// Legal moves for the current state, dropped on every apply/undo.
    pub(crate) valid_cache: Option<Vec<Move>>,
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            side_to_move: Color::White,
            king_locations: [Square { row: 7, col: 4 }, Square { row: 0, col: 4 }],
            history: Vec::with_capacity(128),
            valid_cache: None,
        }
    }

    /// Starts a game from an arbitrary layout. Fails unless each color has
    /// exactly one King and the side that just moved is not left in check.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, RulesError> {
        let mut king_locations = [Square { row: 0, col: 0 }; 2];
        for color in [Color::White, Color::Black] {
            match board.kings(color).as_slice() {
                [sq] => king_locations[color.idx()] = *sq,
                found => {
                    return Err(RulesError::InvalidLayout(format!(
                        "{color} must have exactly one king, found {}",
                        found.len()
                    )));
                }
            }
        }
        let waiting = side_to_move.other();
        if board.is_square_attacked(king_locations[waiting.idx()], side_to_move) {
            return Err(RulesError::InvalidLayout(format!(
                "{waiting} is in check with {side_to_move} to move"
            )));
        }
        Ok(GameState {
            board,
            side_to_move,
            king_locations,
            history: Vec::with_capacity(128),
            valid_cache: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.idx()]
    }

    /// Moves applied since the initial position, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Applies `mv` without any legality check.
    ///
    /// Only pass moves drawn from [`GameState::valid_moves`]; anything else
    /// may leave the board in a state the rules do not allow.
    pub fn make_move(&mut self, mv: Move) {
        self.board.set_piece(mv.from, None);
        self.board.set_piece(mv.to, Some(mv.piece_moved));
        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mv.piece_moved.color.idx()] = mv.to;
        }
        self.history.push(mv);
        self.side_to_move = self.side_to_move.other();
        self.valid_cache = None;
    }

    /// Reverts the most recent move. Returns `None`, leaving everything as it
    /// was, when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.unmake_last()?;
        debug!(notation = %mv.notation(), ply = self.history.len(), "undid move");
        Some(mv)
    }

    pub(crate) fn unmake_last(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.board.set_piece(mv.from, Some(mv.piece_moved));
        self.board.set_piece(mv.to, mv.piece_captured);
        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mv.piece_moved.color.idx()] = mv.from;
        }
        self.side_to_move = self.side_to_move.other();
        self.valid_cache = None;
        Some(mv)
    }

    /// Checked application for callers holding a move from an earlier query.
    ///
    /// The move is matched against the current legal set by coordinates and
    /// the engine's own copy is applied, so piece snapshots from a stale
    /// board never reach the board. Returns the move actually applied.
    pub fn apply_move(&mut self, mv: Move) -> Result<Move, RulesError> {
        let found = self.valid_moves().iter().find(|m| **m == mv).copied();
        let Some(legal) = found else {
            warn!(notation = %mv.notation(), side = %self.side_to_move, "rejected illegal move");
            return Err(RulesError::IllegalMove {
                notation: mv.notation(),
            });
        };
        self.make_move(legal);
        debug!(
            notation = %legal.notation(),
            piece = %legal.piece_moved,
            captured = ?legal.piece_captured.map(Piece::code),
            ply = self.history.len(),
            "applied move"
        );
        Ok(legal)
    }

    /// Looks up the legal move from `from` to `to`, if there is one.
    pub fn find_valid_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.valid_moves()
            .iter()
            .find(|m| m.from == from && m.to == to)
            .copied()
    }

    /// Whether the side to move has its King attacked.
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.square_under_attack(self.king_location(color), color.other())
    }

    /// Whether any piece of `by` attacks `square`, whoever is to move.
    pub fn square_under_attack(&self, square: Square, by: Color) -> bool {
        self.board.is_square_attacked(square, by)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
