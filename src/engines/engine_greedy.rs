use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::MaterialScorer;
use crate::search::greedy::greedy_search;

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
            rng,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "PlumRules Greedy"
    }

    fn choose_move(
        &mut self,
        position: &mut Position,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        greedy_search(
            position,
            legal_moves,
            &self.move_generator,
            &self.scorer,
            &mut self.rng,
        )
        .map(EngineOutput::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_free_queen() {
        let mut position =
            Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        let out = GreedyEngine::with_seed(5)
            .choose_move(&mut position, &moves)
            .expect("engine should choose");
        assert_eq!(out.best_move.map(|mv| mv.to_string()), Some("d1d5".to_owned()));
        assert_eq!(out.best_score, Some(5));
        assert_eq!(out.nodes, 1 + moves.len() as u64);
    }
}
