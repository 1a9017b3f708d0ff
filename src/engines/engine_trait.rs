//! Engine abstraction layer.
//!
//! Every move-selection strategy sits behind `Engine` so callers can pick one
//! at runtime and drive it through the same `choose_move` call.

use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::search::search_result::SearchResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// `None` for strategies that do not score moves.
    pub best_score: Option<i32>,
    pub nodes: u64,
}

impl From<SearchResult> for EngineOutput {
    fn from(result: SearchResult) -> Self {
        Self {
            best_move: result.best_move,
            best_score: Some(result.best_score),
            nodes: result.nodes,
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks one of `legal_moves`, which must be the legal moves of
    /// `position`. The position is left as it was found.
    fn choose_move(
        &mut self,
        position: &mut Position,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput>;
}
