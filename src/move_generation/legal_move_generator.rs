//! Legality filter.
//!
//! Generates pseudo-legal moves for the side to move, simulates each one
//! through the mutator, rejects those that leave the mover's king attacked,
//! and undoes the simulation regardless of the result.

use crate::chess_errors::ChessResult;
use crate::game_state::outcome::{evaluate_outcome, GameOutcome};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{
    generate_pseudo_legal_moves, GenerationMode, MoveGenerator,
};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &mut Position) -> ChessResult<Vec<Move>> {
        let mover = position.side_to_move();
        let pseudo = generate_pseudo_legal_moves(position, mover, GenerationMode::Moves);

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            position.apply_pseudo_legal_move(&mv)?;
            let exposed = is_king_in_check(position, mover);
            position.undo_move();

            if !exposed {
                legal.push(mv);
            }
        }

        Ok(legal)
    }
}

impl Position {
    /// Fully filtered legal moves for the side to move.
    pub fn legal_moves(&mut self) -> ChessResult<Vec<Move>> {
        LegalMoveGenerator.generate_legal_moves(self)
    }

    /// Legal moves together with the outcome they imply.
    pub fn legal_moves_with_outcome(&mut self) -> ChessResult<(Vec<Move>, GameOutcome)> {
        let moves = self.legal_moves()?;
        let outcome = evaluate_outcome(self, &moves);
        Ok((moves, outcome))
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut position = Position::new_game();
        let before = position.clone();
        let moves = position.legal_moves().expect("legal moves");
        assert_eq!(moves.len(), 20);
        assert_eq!(position, before, "filtering must leave the position unchanged");
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut position =
            Position::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        assert!(moves.iter().all(|mv| mv.from().to_string() != "e2"));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let mut position =
            Position::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        let mut names: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["e1d1".to_owned(), "e1f1".to_owned()]);
    }

    #[test]
    fn only_check_evasions_are_legal() {
        let mut position =
            Position::from_fen("4k3/8/8/8/8/8/8/1q2K3 w - - 0 1").expect("FEN should parse");
        assert!(position.is_in_check());
        let moves = position.legal_moves().expect("legal moves");
        for mv in &moves {
            position.apply_move(mv).expect("apply");
            assert!(!is_king_in_check(&position, Color::Light), "{mv} leaves king in check");
            position.undo_move();
        }
        assert!(!moves.is_empty());
    }
}
