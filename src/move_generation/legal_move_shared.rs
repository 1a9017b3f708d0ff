//! Table-driven step and slide generation shared by the non-pawn kinds.

use crate::game_state::{chess_types::*, position::Position};
use crate::moves::chess_move::{Move, MoveFlags};
use crate::moves::piece_tables::piece_rule;

/// Emits the moves described by `piece`'s behavior table from `from`.
///
/// Steppers try each offset once; sliders extend each direction until the
/// first occupied square, which is included only when it holds an enemy.
pub fn generate_table_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let rule = piece_rule(piece.kind);
    for &(d_row, d_col) in rule.offsets {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match position.piece_at(to) {
                None => out.push(Move::new(from, to, piece, None, MoveFlags::NONE)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::new(from, to, piece, Some(occupant), MoveFlags::NONE));
                    }
                    break;
                }
            }
            if !rule.slides {
                break;
            }
            current = to;
        }
    }
}
