use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::negamax_search;

/// Alpha-beta negamax. Reported scores are from the mover's view.
pub struct NegamaxEngine {
    depth: u8,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
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

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "PlumRules Negamax"
    }

    fn choose_move(
        &mut self,
        position: &mut Position,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        negamax_search(
            position,
            legal_moves,
            &self.move_generator,
            &self.scorer,
            self.depth,
        )
        .map(EngineOutput::from)
    }
}
