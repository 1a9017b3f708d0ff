//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by position setup, the
//! mutator, move generation, search and the text codecs. Precondition
//! violations (bad coordinates, a move that does not belong to the current
//! position) surface here and propagate to the caller; benign no-ops such as
//! undoing with an empty log are reported through `tracing` instead.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("square ({row}, {col}) is outside the board")]
    SquareOutOfBounds { row: u8, col: u8 },

    #[error("no piece on square {0}")]
    NoPieceOnSquare(Square),

    #[error("piece on {square} does not belong to {color}, the side to move")]
    WrongSideToMove { square: Square, color: Color },

    /// The move's recorded pieces disagree with the board it is applied to.
    #[error("move {mv} does not match the current position: {reason}")]
    MoveDoesNotMatchPosition { mv: String, reason: String },

    /// The move is not among the legal moves of the position.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("move generation is not implemented")]
    NotImplemented,

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid position text on line {line}: {reason}")]
    InvalidPositionText { line: usize, reason: String },

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
