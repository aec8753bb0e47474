use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Serialize, Serializer};

use crate::{error::RulesError, types::*};

/// 8x8 grid of pieces, stored with black's back rank in row 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial setup.
    pub fn starting() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.squares[0][col] = Some(Piece::new(Color::Black, kind));
            b.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    /// Builds a board from eight rows of eight whitespace-separated square
    /// codes, row 0 first:
    ///
    /// ```
    /// # use chess_rules::Board;
    /// let board = Board::from_codes(&[
    ///     "-- -- -- -- bK -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "-- -- -- -- -- -- -- --",
    ///     "wR -- -- -- wK -- -- --",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.code_at("a1".parse().unwrap()), "wR");
    /// ```
    pub fn from_codes(rows: &[&str]) -> Result<Self, RulesError> {
        if rows.len() != 8 {
            return Err(RulesError::InvalidLayout(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }
        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(RulesError::InvalidLayout(format!(
                    "row {row} has {} squares, expected 8",
                    codes.len()
                )));
            }
            for (col, code) in codes.into_iter().enumerate() {
                b.squares[row][col] = Piece::from_code(code)?;
            }
        }
        Ok(b)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self[sq]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self[sq] = pc;
    }

    /// Two-symbol code of the square's content, `"--"` when empty.
    pub fn code_at(&self, sq: Square) -> &'static str {
        self.piece_at(sq).map_or(EMPTY_CODE, Piece::code)
    }

    /// Occupied squares with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Every square holding a King of `color`.
    pub fn kings(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .collect()
    }

    fn code_rows(&self) -> [[&'static str; 8]; 8] {
        let mut out = [[EMPTY_CODE; 8]; 8];
        for sq in Square::all() {
            out[sq.row as usize][sq.col as usize] = self.code_at(sq);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.row as usize][sq.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.squares[sq.row as usize][sq.col as usize]
    }
}

/// Serializes as eight rows of square codes.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.code_rows().serialize(serializer)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, codes) in self.code_rows().iter().enumerate() {
            write!(f, "{} ", (b'8' - row as u8) as char)?;
            writeln!(f, "{}", codes.join(" "))?;
        }
        write!(f, "  a  b  c  d  e  f  g  h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
