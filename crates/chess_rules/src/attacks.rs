//! Attack detection on the mailbox board.
//!
//! Works backwards from the target square: walk each ray or offset a piece
//! could attack along and look at what sits there. Nothing is precomputed.

use crate::{board::Board, types::*};

impl Board {
    /// Returns `true` if any piece of color `by` attacks `target`.
    ///
    /// Independent of whose turn it is. Pieces of either color block rays.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Sliding: the first occupied square on each ray decides it.
        let sliders: [(&[(i8, i8); 4], PieceKind); 2] = [
            (&ORTHOGONAL, PieceKind::Rook),
            (&DIAGONAL, PieceKind::Bishop),
        ];
        for (dirs, slider) in sliders {
            for &(dr, dc) in dirs {
                if let Some(pc) = self.first_piece_on_ray(target, dr, dc)
                    && pc.color == by
                    && (pc.kind == slider || pc.kind == PieceKind::Queen)
                {
                    return true;
                }
            }
        }

        if self.any_at_offsets(target, &KNIGHT_OFFSETS, Piece::new(by, PieceKind::Knight)) {
            return true;
        }

        // A white pawn attacks toward row 0, so it stands one row below the target.
        let pawn_row: i8 = match by {
            Color::White => 1,
            Color::Black => -1,
        };
        if self.any_at_offsets(
            target,
            &[(pawn_row, -1), (pawn_row, 1)],
            Piece::new(by, PieceKind::Pawn),
        ) {
            return true;
        }

        self.any_at_offsets(target, &KING_OFFSETS, Piece::new(by, PieceKind::King))
    }

    fn first_piece_on_ray(&self, from: Square, dr: i8, dc: i8) -> Option<Piece> {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if let Some(pc) = self.piece_at(sq) {
                return Some(pc);
            }
            cur = sq.offset(dr, dc);
        }
        None
    }

    fn any_at_offsets(&self, from: Square, offsets: &[(i8, i8)], wanted: Piece) -> bool {
        offsets.iter().any(|&(dr, dc)| {
            from.offset(dr, dc)
                .is_some_and(|sq| self.piece_at(sq) == Some(wanted))
        })
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
