//! Pawn move generation: pushes, double pushes, captures, en passant and
//! promotion flagging.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::chess_move::{Move, MoveFlags};

pub fn generate_pawn_moves(
    position: &Position,
    from: Square,
    pawn: Piece,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let color = pawn.color;
    let forward = color.forward();
    let promotes_on = |to: Square| MoveFlags {
        is_promotion: to.row() == color.promotion_row(),
        ..MoveFlags::NONE
    };

    if mode == GenerationMode::Moves {
        if let Some(one_step) = from.offset(forward, 0) {
            if position.piece_at(one_step).is_none() {
                out.push(Move::new(from, one_step, pawn, None, promotes_on(one_step)));

                if from.row() == color.pawn_start_row() {
                    if let Some(two_step) = one_step.offset(forward, 0) {
                        if position.piece_at(two_step).is_none() {
                            out.push(Move::new(from, two_step, pawn, None, MoveFlags::NONE));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match position.piece_at(to) {
            Some(occupant) if occupant.color != color => {
                out.push(Move::new(from, to, pawn, Some(occupant), promotes_on(to)));
            }
            Some(_) => {}
            None if mode == GenerationMode::Attacks => {
                out.push(Move::new(from, to, pawn, None, MoveFlags::NONE));
            }
            None => {
                if position.en_passant_target() != Some(to) {
                    continue;
                }
                let victim = Square::at(from.row(), to.col());
                if position.piece_at(victim) == Some(Piece::new(color.opposite(), PieceKind::Pawn))
                {
                    let flags = MoveFlags {
                        is_en_passant: true,
                        ..MoveFlags::NONE
                    };
                    out.push(Move::new(from, to, pawn, None, flags));
                }
            }
        }
    }
}
