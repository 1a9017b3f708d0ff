//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternate heuristics
//! can be swapped without touching the search code.

use crate::game_state::{chess_types::*, position::Position};

/// Score for delivering checkmate; mates found sooner score higher.
pub const MATE_SCORE: i32 = 1000;
pub const STALEMATE_SCORE: i32 = 0;
/// Bound strictly outside every reachable score.
pub const SCORE_INFINITY: i32 = MATE_SCORE + 1;

pub trait BoardScorer: Send + Sync {
    /// Static score of `position`; positive favors `Color::Light`.
    fn score(&self, position: &Position) -> i32;
}

/// Signed material sum: pawn 1, knight 3, bishop 3, rook 5, queen 9, king 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        position
            .pieces()
            .map(|(_, piece)| piece.color.sign() * piece.kind.value())
            .sum()
    }
}

/// Score of `position` from `color`'s point of view.
#[inline]
pub fn score_for<S: BoardScorer>(scorer: &S, position: &Position, color: Color) -> i32 {
    color.sign() * scorer.score(position)
}
