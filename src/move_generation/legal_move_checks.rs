use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, GenerationMode};

/// True when any of `attacker_color`'s pseudo-legal attacks lands on `square`.
pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    generate_pseudo_legal_moves(position, attacker_color, GenerationMode::Attacks)
        .iter()
        .any(|mv| mv.to() == square)
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = position.king_square(color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_attacks_diagonally_not_forward() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        // e2 pawn attacks d3 and f3 (row 5) but not e3.
        assert!(is_square_attacked(&position, Square::at(5, 3), Color::Light));
        assert!(is_square_attacked(&position, Square::at(5, 5), Color::Light));
        assert!(!is_square_attacked(&position, Square::at(5, 4), Color::Light));
    }

    #[test]
    fn sliding_attack_is_blocked() {
        // King kept away from the back rank so only the rook bears on c1/d1.
        let position =
            Position::from_fen("4k3/8/8/8/7K/8/8/R1n5 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&position, Square::at(7, 2), Color::Light));
        assert!(!is_square_attacked(&position, Square::at(7, 3), Color::Light));
    }

    #[test]
    fn king_in_check_detected() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position, Color::Dark));
        assert!(!is_king_in_check(&position, Color::Light));
    }
}
