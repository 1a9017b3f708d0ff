//! Coordinate move notation such as `e2e4` or `e7e8q`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Origin, destination and optional promotion piece of a coordinate move.
pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let invalid = || ChessError::InvalidAlgebraic(text.to_owned());
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop)) => Some(kind),
            Some(kind @ (PieceKind::Rook | PieceKind::Queen)) => Some(kind),
            _ => return Err(invalid()),
        },
    };

    Ok((from, to, promotion))
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    if mv.is_promotion() {
        format!("{mv}q")
    } else {
        mv.to_string()
    }
}

/// Finds the legal move of `position` written as `text`.
///
/// A promotion suffix is accepted only on promotion moves; which piece is
/// promoted to is left to the caller (see `Position::apply_move_promoting_to`).
pub fn find_legal_move(position: &mut Position, text: &str) -> ChessResult<Move> {
    let (from, to, promotion) = parse_long_algebraic(text)?;
    let legal_moves = position.legal_moves()?;
    legal_moves
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to && (promotion.is_none() || mv.is_promotion()))
        .ok_or_else(|| ChessError::InvalidAlgebraic(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let (from, to, promotion) = parse_long_algebraic("e2e4").expect("e2e4 should parse");
        assert_eq!((from.to_string(), to.to_string(), promotion), ("e2".into(), "e4".into(), None));

        let (_, _, promotion) = parse_long_algebraic("a7a8n").expect("a7a8n should parse");
        assert_eq!(promotion, Some(PieceKind::Knight));

        for bad in ["e2", "e2e9", "a7a8k", "e2e4qq", "é2e4"] {
            assert!(parse_long_algebraic(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn finds_only_legal_moves() {
        let mut position = Position::new_game();
        let mv = find_legal_move(&mut position, "g1f3").expect("knight move is legal");
        assert_eq!(mv.piece_moved(), Piece::new(Color::Light, PieceKind::Knight));
        assert_eq!(
            find_legal_move(&mut position, "e2e5"),
            Err(ChessError::InvalidAlgebraic("e2e5".to_owned()))
        );
        assert!(find_legal_move(&mut position, "e2e4q").is_err());
    }

    #[test]
    fn promotion_moves_print_with_queen_suffix() {
        let mut position =
            Position::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mv = find_legal_move(&mut position, "a7a8").expect("promotion is legal");
        assert!(mv.is_promotion());
        assert_eq!(move_to_long_algebraic(&mv), "a7a8q");
        assert_eq!(find_legal_move(&mut position, "a7a8q"), Ok(mv));
    }
}
