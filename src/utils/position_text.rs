//! Piece-list save/restore format.
//!
//! The first non-blank line names the side to move (`w`/`b`, or
//! `White`/`Black`). Every following non-blank line places one piece as
//! `<color><piece-letter><square>`, e.g. `wKe1` or `bPe7`. Castling rights
//! are inferred from kings and rooks standing on their home squares and the
//! en-passant target starts unset.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_piece_list(text: &str) -> ChessResult<Position> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line_no, side_line) = lines.next().ok_or_else(|| ChessError::InvalidPositionText {
        line: 1,
        reason: "missing side-to-move line".to_owned(),
    })?;
    let side_to_move = parse_side(side_line).ok_or_else(|| ChessError::InvalidPositionText {
        line: line_no,
        reason: format!("unknown side to move '{side_line}'"),
    })?;

    let placements = lines
        .map(|(line_no, line)| {
            parse_placement(line).ok_or_else(|| ChessError::InvalidPositionText {
                line: line_no,
                reason: format!("expected <color><piece><square>, got '{line}'"),
            })
        })
        .collect::<ChessResult<Vec<_>>>()?;

    Position::from_placements(side_to_move, placements)
}

/// Writes every piece in board order, rank 8 first.
pub fn to_piece_list(position: &Position) -> String {
    let mut out = String::new();
    out.push(position.side_to_move().to_char());
    out.push('\n');
    for (square, piece) in position.pieces() {
        out.push(piece.color.to_char());
        out.push(piece.kind.to_char());
        out.push_str(&square.to_string());
        out.push('\n');
    }
    out
}

fn parse_side(line: &str) -> Option<Color> {
    match line.to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Color::Light),
        "b" | "black" => Some(Color::Dark),
        _ => None,
    }
}

fn parse_placement(line: &str) -> Option<(Square, Piece)> {
    let mut chars = line.chars();
    let color = match chars.next()? {
        'w' => Color::Light,
        'b' => Color::Dark,
        _ => return None,
    };
    let kind_char = chars.next()?;
    if !kind_char.is_ascii_uppercase() {
        return None;
    }
    let kind = PieceKind::from_char(kind_char)?;
    let square = algebraic_to_square(chars.as_str()).ok()?;
    Some((square, Piece::new(color, kind)))
}
