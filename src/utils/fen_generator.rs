use crate::game_state::chess_types::*;

/// Writes `position` as FEN. The clock fields are always `0 1` because the
/// position model does not track them.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = position.side_to_move().to_char();
    let castling = generate_castling_field(position.castling_rights());
    let en_passant = position
        .en_passant_target()
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match position.piece_at(Square::at(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = piece.kind.to_char();
    match piece.color {
        Color::Light => ch,
        Color::Dark => ch.to_ascii_lowercase(),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (right, ch) in [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ] {
        if rights & right != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}
