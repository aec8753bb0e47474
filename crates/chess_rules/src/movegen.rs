use std::ops::Deref;

use tracing::trace;

use crate::{board::Board, game::GameState, moves::Move, types::*};

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Computed on first call and cached until the next apply or undo. The
    /// position is left exactly as it was found.
    pub fn valid_moves(&mut self) -> &[Move] {
        let moves = match self.valid_cache.take() {
            Some(moves) => moves,
            None => {
                let mut moves = Vec::with_capacity(64);
                legal_moves_into(self, &mut moves);
                moves
            }
        };
        self.valid_cache.insert(moves)
    }

    /// Moves that follow each piece's movement rules, before removing those
    /// that leave the mover's own King attacked.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        pseudo_moves(&self.board, self.side_to_move, &mut out);
        out
    }
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Bypasses the cache in [`GameState::valid_moves`].
pub fn legal_moves_into(state: &mut GameState, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(&state.board, state.side_to_move, out);

    let mover = state.side_to_move;
    out.retain(|&mv| {
        let trial = Trial::play(state, mv);
        let exposed = trial.is_king_attacked(mover);
        if exposed {
            trace!(notation = %mv.notation(), "discarded: leaves own king attacked");
        }
        !exposed
    });
}

/// A move played on trial. Dropping the guard takes it back, so every exit
/// path restores the position.
struct Trial<'a> {
    state: &'a mut GameState,
}

impl<'a> Trial<'a> {
    fn play(state: &'a mut GameState, mv: Move) -> Self {
        state.make_move(mv);
        Trial { state }
    }
}

impl Deref for Trial<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.state.unmake_last();
    }
}

fn pseudo_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces() {
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, pc, out),
            PieceKind::Rook => gen_slider(board, from, pc, &ORTHOGONAL, out),
            PieceKind::Bishop => gen_slider(board, from, pc, &DIAGONAL, out),
            PieceKind::Queen => {
                gen_slider(board, from, pc, &ORTHOGONAL, out);
                gen_slider(board, from, pc, &DIAGONAL, out);
            }
            PieceKind::Knight => gen_steps(board, from, pc, &KNIGHT_OFFSETS, out),
            PieceKind::King => gen_steps(board, from, pc, &KING_OFFSETS, out),
        }
    }
}

fn gen_pawn(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let (dir, start_row): (i8, u8) = match pc.color {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    // forward 1, then 2 from the start row; a pawn on the last row has neither
    if let Some(to) = from.offset(dir, 0)
        && board.piece_at(to).is_none()
    {
        out.push(Move::with_pieces(from, to, pc, None));
        if from.row == start_row
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::with_pieces(from, to2, pc, None));
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != pc.color
        {
            out.push(Move::with_pieces(from, to, pc, Some(target)));
        }
    }
}

fn gen_slider(board: &Board, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::with_pieces(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::with_pieces(from, to, pc, Some(target)));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Single-step movers: knights and kings.
fn gen_steps(board: &Board, from: Square, pc: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::with_pieces(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::with_pieces(from, to, pc, Some(target)));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
