//! FEN-to-Position parser.
//!
//! Reads the board, side to move, castling and en-passant fields of a
//! Forsyth-Edwards Notation string. The clock fields are optional and only
//! checked for being numbers; the position model does not track them.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::position::Board;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid clock field: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;

    Position::from_parts(board, side_to_move, castling_rights, en_passant_target)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

/// The first FEN rank is rank 8, which is row 0.
fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board: Board = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(&format!("invalid castling character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    PieceKind::from_char(ch).map(|kind| Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square should parse")
    }

    #[test]
    fn parses_starting_position_like_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(parsed, Position::new_game());
    }

    #[test]
    fn reads_side_rights_and_en_passant() {
        let position =
            parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w Kq d6 0 3")
                .expect("FEN should parse");
        assert_eq!(position.side_to_move(), Color::Light);
        assert_eq!(position.castling_rights(), CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_QUEENSIDE);
        assert_eq!(position.en_passant_target(), Some(sq("d6")));
        assert_eq!(
            position.piece_at(sq("e5")),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
    }

    #[test]
    fn derives_king_squares() {
        let position = parse_fen("8/8/8/8/8/2k5/8/6K1 b - - 0 1").expect("FEN should parse");
        assert_eq!(position.king_square(Color::Light), Some(sq("g1")));
        assert_eq!(position.king_square(Color::Dark), Some(sq("c3")));
    }

    #[test]
    fn clocks_are_optional() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").is_ok());
    }

    #[test]
    fn rejects_malformed_fields() {
        let bad = [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - z9 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4kk2/8/8/8/8/8/8/4K3 w - - 0 1",
        ];
        for fen in bad {
            assert!(parse_fen(fen).is_err(), "{fen}");
        }
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
            Err(ChessError::InvalidFen(_))
        ));
    }
}
