//! Per-kind behavior tables.
//!
//! A closed set of six piece kinds is described by data instead of dispatch:
//! each kind has an offset set, a slide-vs-step flag and a material value.

use crate::game_state::chess_types::PieceKind;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Clockwise from "up the board".
pub const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Movement behavior of one piece kind.
#[derive(Debug, Clone, Copy)]
pub struct PieceRule {
    pub offsets: &'static [(i8, i8)],
    /// Repeat each offset until blocked instead of stepping once.
    pub slides: bool,
    pub value: i32,
}

const PAWN_RULE: PieceRule = PieceRule {
    offsets: &[],
    slides: false,
    value: 1,
};
const KNIGHT_RULE: PieceRule = PieceRule {
    offsets: &KNIGHT_OFFSETS,
    slides: false,
    value: 3,
};
const BISHOP_RULE: PieceRule = PieceRule {
    offsets: &DIAGONAL_DIRECTIONS,
    slides: true,
    value: 3,
};
const ROOK_RULE: PieceRule = PieceRule {
    offsets: &ORTHOGONAL_DIRECTIONS,
    slides: true,
    value: 5,
};
const QUEEN_RULE: PieceRule = PieceRule {
    offsets: &KING_DIRECTIONS,
    slides: true,
    value: 9,
};
const KING_RULE: PieceRule = PieceRule {
    offsets: &KING_DIRECTIONS,
    slides: false,
    value: 0,
};

/// Pawn moves depend on color and occupancy, so its offset set is empty and
/// its generator handles it specially.
#[inline]
pub const fn piece_rule(kind: PieceKind) -> &'static PieceRule {
    match kind {
        PieceKind::Pawn => &PAWN_RULE,
        PieceKind::Knight => &KNIGHT_RULE,
        PieceKind::Bishop => &BISHOP_RULE,
        PieceKind::Rook => &ROOK_RULE,
        PieceKind::Queen => &QUEEN_RULE,
        PieceKind::King => &KING_RULE,
    }
}

impl PieceKind {
    #[inline]
    pub const fn value(self) -> i32 {
        piece_rule(self).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_values_match_classic_scale() {
        assert_eq!(PieceKind::Pawn.value(), 1);
        assert_eq!(PieceKind::Knight.value(), 3);
        assert_eq!(PieceKind::Bishop.value(), 3);
        assert_eq!(PieceKind::Rook.value(), 5);
        assert_eq!(PieceKind::Queen.value(), 9);
        assert_eq!(PieceKind::King.value(), 0);
    }

    #[test]
    fn only_long_range_pieces_slide() {
        assert!(piece_rule(PieceKind::Queen).slides);
        assert!(!piece_rule(PieceKind::Knight).slides);
        assert!(!piece_rule(PieceKind::King).slides);
    }
}
