use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `apply_move` / `undo_move`.
///
/// The move log and the castling-rights history share this one stack, so
/// they always grow and shrink together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
