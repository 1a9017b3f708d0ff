use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{MATE_SCORE, STALEMATE_SCORE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Positions visited, the root included.
    pub nodes: u64,
}

/// Score of a position with no legal moves, from the side to move's view.
/// Closer mates are worse for the mated side.
pub(crate) fn terminal_score(position: &Position, ply: u8) -> i32 {
    if position.is_in_check() {
        -(MATE_SCORE - i32::from(ply))
    } else {
        STALEMATE_SCORE
    }
}

/// `terminal_score` expressed from `Color::Light`'s view.
#[inline]
pub(crate) fn terminal_score_for_light(position: &Position, ply: u8) -> i32 {
    let mover: Color = position.side_to_move();
    mover.sign() * terminal_score(position, ply)
}
