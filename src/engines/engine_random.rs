//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and as the fallback when no scoring is configured.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumRules Random"
    }

    fn choose_move(
        &mut self,
        _position: &mut Position,
        legal_moves: &[Move],
    ) -> ChessResult<EngineOutput> {
        let picked = legal_moves
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMoves)?;

        Ok(EngineOutput {
            best_move: Some(*picked),
            best_score: None,
            nodes: 0,
        })
    }
}
