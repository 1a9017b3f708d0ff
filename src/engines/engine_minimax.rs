use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::minimax_search;

/// Plain fixed-depth minimax. Reported scores are from Light's view.
pub struct MinimaxEngine {
    depth: u8,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumRules Minimax"
    }

    fn choose_move(
        &mut self,
        position: &mut Position,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        minimax_search(
            position,
            legal_moves,
            &self.move_generator,
            &self.scorer,
            self.depth,
        )
        .map(EngineOutput::from)
    }
}
