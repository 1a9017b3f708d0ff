//! Game outcome classification.
//!
//! The outcome is a pure function of a position and its filtered legal move
//! list; it is recomputed after every legality pass and never cached on the
//! position.

use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    /// Side to move is attacked but has at least one legal reply.
    Check,
    Checkmate,
    Stalemate,
}

impl GameOutcome {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameOutcome::Checkmate | GameOutcome::Stalemate)
    }
}

pub fn evaluate_outcome(position: &Position, legal_moves: &[Move]) -> GameOutcome {
    let in_check = is_king_in_check(position, position.side_to_move());
    match (in_check, legal_moves.is_empty()) {
        (true, true) => GameOutcome::Checkmate,
        (false, true) => GameOutcome::Stalemate,
        (true, false) => GameOutcome::Check,
        (false, false) => GameOutcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stalemate_when_not_in_check_and_no_moves() {
        let mut position =
            Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        assert!(moves.is_empty());
        assert_eq!(evaluate_outcome(&position, &moves), GameOutcome::Stalemate);
    }

    #[test]
    fn check_with_escape_is_not_terminal() {
        let mut position =
            Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").expect("FEN should parse");
        let (moves, outcome) = position.legal_moves_with_outcome().expect("legal moves");
        assert!(!moves.is_empty());
        assert_eq!(outcome, GameOutcome::Ongoing);

        let mut checked =
            Position::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").expect("FEN should parse");
        let (moves, outcome) = checked.legal_moves_with_outcome().expect("legal moves");
        assert!(!moves.is_empty());
        assert_eq!(outcome, GameOutcome::Check);
        assert!(!outcome.is_terminal());
    }
}
