use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::{board::Board, types::*};

/// One ply: where a piece went and what it displaced.
///
/// The pieces are a snapshot of the board taken when the move was built, so
/// undoing the move can put both squares back exactly.
///
/// Equality and hashing look only at `id`, which is derived from the four
/// coordinates. Two moves between the same squares compare equal even if
/// they were built from boards holding different pieces.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub id: u16,
}

impl Move {
    /// Snapshots the pieces on `from` and `to`. Performs no legality check.
    ///
    /// Returns `None` when `from` is empty, since a move always records the
    /// piece it carries. Any other pair of squares is accepted.
    pub fn new(from: Square, to: Square, board: &Board) -> Option<Self> {
        let piece_moved = board.piece_at(from)?;
        Some(Self::with_pieces(from, to, piece_moved, board.piece_at(to)))
    }

    pub(crate) fn with_pieces(
        from: Square,
        to: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        let id = from.row as u16 * 1000
            + from.col as u16 * 100
            + to.row as u16 * 10
            + to.col as u16;
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            id,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Origin and destination square names, e.g. `"e2e4"`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
