//! Canonical game state container.
//!
//! `Position` owns the 8x8 board, side to move, cached king squares, the
//! en-passant target, castling rights and the undo stack. Its fields are
//! changed only by the mutator in `move_generation::legal_move_apply`;
//! everything else reads through the accessors below.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    BACK_RANK, KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

pub type Board = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    // [color]
    pub(crate) king_squares: [Option<Square>; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
            king_squares: [None; 2],
            en_passant_target: None,
            castling_rights: 0,
            undo_stack: Vec::new(),
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial arrangement, Light to move, all castling rights held.
    pub fn new_game() -> Self {
        let mut position = Self::default();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in [Color::Light, Color::Dark] {
                position.board[color.home_row() as usize][col as usize] =
                    Some(Piece::new(color, *kind));
                position.board[color.pawn_start_row() as usize][col as usize] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        position.king_squares = [
            Some(Square::at(Color::Light.home_row(), KING_START_COL)),
            Some(Square::at(Color::Dark.home_row(), KING_START_COL)),
        ];
        position.castling_rights = CASTLE_ALL;
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Repopulates a fresh position from piece placements and a side to move.
    ///
    /// Castling rights are granted for every king/rook pair still on its home
    /// squares; the en-passant target starts unset.
    pub fn from_placements<I>(side_to_move: Color, placements: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board: Board = [[None; 8]; 8];
        for (square, piece) in placements {
            if board[square.row() as usize][square.col() as usize].is_some() {
                return Err(ChessError::InvalidPlacement(format!(
                    "square {square} is occupied twice"
                )));
            }
            board[square.row() as usize][square.col() as usize] = Some(piece);
        }

        let mut rights = 0;
        for color in [Color::Light, Color::Dark] {
            let row = color.home_row() as usize;
            let at_home = |col: u8, kind: PieceKind| {
                board[row][col as usize] == Some(Piece::new(color, kind))
            };
            if !at_home(KING_START_COL, PieceKind::King) {
                continue;
            }
            if at_home(KINGSIDE_ROOK_COL, PieceKind::Rook) {
                rights |= kingside_right(color);
            }
            if at_home(QUEENSIDE_ROOK_COL, PieceKind::Rook) {
                rights |= queenside_right(color);
            }
        }

        Self::from_parts(board, side_to_move, rights, None)
    }

    /// Builds a position from raw parts, deriving the cached king squares.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let mut king_squares = [None; 2];
        for square in Square::all() {
            let Some(piece) = board[square.row() as usize][square.col() as usize] else {
                continue;
            };
            if piece.kind != PieceKind::King {
                continue;
            }
            if king_squares[piece.color.index()].replace(square).is_some() {
                return Err(ChessError::InvalidPlacement(format!(
                    "more than one {} king",
                    piece.color
                )));
            }
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares,
            en_passant_target,
            castling_rights,
            undo_stack: Vec::new(),
        })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Applied moves, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = &Move> + '_ {
        self.undo_stack.iter().map(|undo| &undo.mv)
    }

    /// Castling rights held before each applied move, oldest first.
    pub fn castling_rights_history(&self) -> impl Iterator<Item = CastlingRights> + '_ {
        self.undo_stack.iter().map(|undo| undo.prev_castling_rights)
    }

    #[inline]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Occupied squares with their pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}
