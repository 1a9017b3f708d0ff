//! Immutable record of one ply.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Special-move flags carried by a [`Move`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags {
        is_en_passant: false,
        is_castle: false,
        is_promotion: false,
    };
}

/// One ply, snapshotted from the board at construction.
///
/// `piece_captured` is the occupant of the destination when the move was
/// built, so it is `None` for en passant. Equality and hashing consider
/// only the squares and flags.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    flags: MoveFlags,
}

impl Move {
    #[inline]
    pub(crate) const fn new(
        from: Square,
        to: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
        flags: MoveFlags,
    ) -> Self {
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            flags,
        }
    }

    /// Builds a move from a UI-supplied `(row, col)` pair, inferring the
    /// special-move flags from the position.
    pub fn from_coordinates(
        from: (u8, u8),
        to: (u8, u8),
        position: &Position,
    ) -> ChessResult<Self> {
        let from = Square::new(from.0, from.1)?;
        let to = Square::new(to.0, to.1)?;
        let piece_moved = position
            .piece_at(from)
            .ok_or(ChessError::NoPieceOnSquare(from))?;
        let piece_captured = position.piece_at(to);

        let col_delta = from.col().abs_diff(to.col());
        let flags = match piece_moved.kind {
            PieceKind::Pawn => MoveFlags {
                is_en_passant: col_delta == 1
                    && piece_captured.is_none()
                    && position.en_passant_target() == Some(to),
                is_castle: false,
                is_promotion: to.row() == piece_moved.color.promotion_row(),
            },
            PieceKind::King => MoveFlags {
                is_castle: from.row() == to.row() && col_delta == 2,
                ..MoveFlags::NONE
            },
            _ => MoveFlags::NONE,
        };

        Ok(Self::new(from, to, piece_moved, piece_captured, flags))
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub const fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.flags.is_en_passant
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.flags.is_castle
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.flags.is_promotion
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some() || self.flags.is_en_passant
    }

    /// Pawn advance of two rows, which opens an en-passant window.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.flags == other.flags
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.flags.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
