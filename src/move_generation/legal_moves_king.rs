use crate::game_state::chess_rules::{
    KINGSIDE_KING_TO_COL, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_KING_TO_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::generate_table_moves;
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::chess_move::{Move, MoveFlags};

pub fn generate_king_moves(
    position: &Position,
    from: Square,
    king: Piece,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    generate_table_moves(position, from, king, out);

    // Castling never captures, so it plays no part in attack queries.
    if mode == GenerationMode::Moves {
        generate_castling_moves(position, from, king, out);
    }
}

fn generate_castling_moves(
    position: &Position,
    king_from: Square,
    king: Piece,
    out: &mut Vec<Move>,
) {
    let color = king.color;
    let row = color.home_row();
    if king_from != Square::at(row, KING_START_COL) {
        return;
    }

    let enemy = color.opposite();
    let sides = [
        (kingside_right(color), KINGSIDE_ROOK_COL, KINGSIDE_KING_TO_COL),
        (queenside_right(color), QUEENSIDE_ROOK_COL, QUEENSIDE_KING_TO_COL),
    ];

    // The origin is shared by both sides; it is only queried when needed.
    let mut origin_attacked: Option<bool> = None;

    for (right, rook_col, king_to_col) in sides {
        if !position.has_castling_right(right) {
            continue;
        }
        let rook = Some(Piece::new(color, PieceKind::Rook));
        if position.piece_at(Square::at(row, rook_col)) != rook {
            continue;
        }

        let (low, high) = if rook_col > KING_START_COL {
            (KING_START_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_START_COL)
        };
        if (low..high).any(|col| position.piece_at(Square::at(row, col)).is_some()) {
            continue;
        }

        let attacked =
            *origin_attacked.get_or_insert_with(|| is_square_attacked(position, king_from, enemy));
        if attacked {
            return;
        }

        // The square the king passes over; its destination is left to the
        // legality filter.
        let pass_col = (KING_START_COL + king_to_col) / 2;
        if is_square_attacked(position, Square::at(row, pass_col), enemy) {
            continue;
        }

        let flags = MoveFlags {
            is_castle: true,
            ..MoveFlags::NONE
        };
        out.push(Move::new(king_from, Square::at(row, king_to_col), king, None, flags));
    }
}
