use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::RulesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// First symbol of a piece code.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Second symbol of a piece code.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Code used for an empty square on a rendered board.
pub const EMPTY_CODE: &str = "--";

const PIECE_CODES: [[&str; 6]; 2] = [
    ["wP", "wR", "wN", "wB", "wQ", "wK"],
    ["bP", "bR", "bN", "bB", "bQ", "bK"],
];

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-symbol code, e.g. `"wN"` for a white knight.
    pub fn code(self) -> &'static str {
        let kind = match self.kind {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        };
        PIECE_CODES[self.color.idx()][kind]
    }

    /// Parses a square code. `"--"` is an empty square and yields `Ok(None)`.
    pub fn from_code(code: &str) -> Result<Option<Piece>, RulesError> {
        if code == EMPTY_CODE {
            return Ok(None);
        }
        let b = code.as_bytes();
        if b.len() != 2 {
            return Err(RulesError::InvalidPieceCode(code.to_string()));
        }
        let color = match b[0] {
            b'w' => Color::White,
            b'b' => Color::Black,
            _ => return Err(RulesError::InvalidPieceCode(code.to_string())),
        };
        let kind = match b[1] {
            b'P' => PieceKind::Pawn,
            b'R' => PieceKind::Rook,
            b'N' => PieceKind::Knight,
            b'B' => PieceKind::Bishop,
            b'Q' => PieceKind::Queen,
            b'K' => PieceKind::King,
            _ => return Err(RulesError::InvalidPieceCode(code.to_string())),
        };
        Ok(Some(Piece { color, kind }))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is white's
/// (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    pub(crate) row: u8,
    pub(crate) col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Steps by `(dr, dc)`, clipped to the 8x8 grid.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(self) -> char {
        (b'8' - self.row) as char
    }

    /// All 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(RulesError::InvalidSquare(s.to_string()));
        }
        Ok(Square {
            row: b'8' - b[1],
            col: b[0] - b'a',
        })
    }
}

// Direction sets shared by attack detection and move generation.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
