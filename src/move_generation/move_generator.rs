//! Pseudo-legal generation entry point and the move-generator trait seam.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::generate_table_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::chess_move::Move;

/// What a pseudo-legal pass is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Every rule-shaped move, castling included.
    Moves,
    /// Only squares the pieces attack: pawns report both diagonals whether or
    /// not they are occupied, and pushes and castling are left out.
    Attacks,
}

/// All pseudo-legal moves for `color`, scanning the board row by row.
pub fn generate_pseudo_legal_moves(
    position: &Position,
    color: Color,
    mode: GenerationMode,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in position.pieces() {
        if piece.color == color {
            generate_piece_moves(position, from, piece, mode, &mut out);
        }
    }
    out
}

/// Pseudo-legal moves of the single `piece` standing on `from`.
pub fn generate_piece_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, mode, out),
        PieceKind::King => generate_king_moves(position, from, piece, mode, out),
        _ => generate_table_moves(position, from, piece, out),
    }
}

pub trait MoveGenerator: Send + Sync {
    /// Legal moves for the side to move. Implementations may mutate the
    /// position while probing but must leave it exactly as they found it.
    fn generate_legal_moves(&self, position: &mut Position) -> ChessResult<Vec<Move>>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _position: &mut Position) -> ChessResult<Vec<Move>> {
        Err(ChessError::NotImplemented)
    }
}
