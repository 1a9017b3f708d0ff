//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting arrangement, the
//! columns involved in castling, and the standard starting FEN.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// King destination columns for each castling side.
pub const KINGSIDE_KING_TO_COL: u8 = 6;
pub const QUEENSIDE_KING_TO_COL: u8 = 2;

/// Rook destination columns for each castling side.
pub const KINGSIDE_ROOK_TO_COL: u8 = 5;
pub const QUEENSIDE_ROOK_TO_COL: u8 = 3;
