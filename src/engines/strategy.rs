//! Strategy selection and the single move-choice entry point.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax,
    NegamaxAlphaBeta,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::Minimax,
        Strategy::NegamaxAlphaBeta,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Minimax => "minimax",
            Strategy::NegamaxAlphaBeta => "negamax",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            "minimax" => Ok(Strategy::Minimax),
            "negamax" | "alphabeta" | "negamax-alpha-beta" => Ok(Strategy::NegamaxAlphaBeta),
            _ => Err(ChessError::UnknownStrategy(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Ply budget for the tree searches; values below 1 are raised to 1.
    pub depth: u8,
    /// Seeds random choice and greedy tie-breaks.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::NegamaxAlphaBeta,
            depth: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn new(strategy: Strategy, depth: u8) -> Self {
        Self {
            strategy,
            depth,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the engine this configuration describes.
    pub fn build_engine(&self) -> Box<dyn Engine> {
        let depth = self.depth.max(1);
        match (self.strategy, self.seed) {
            (Strategy::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (Strategy::Random, None) => Box::new(RandomEngine::new()),
            (Strategy::Greedy, Some(seed)) => Box::new(GreedyEngine::with_seed(seed)),
            (Strategy::Greedy, None) => Box::new(GreedyEngine::new()),
            (Strategy::Minimax, _) => Box::new(MinimaxEngine::new(depth)),
            (Strategy::NegamaxAlphaBeta, _) => Box::new(NegamaxEngine::new(depth)),
        }
    }
}

impl FromStr for SearchConfig {
    type Err = ChessError;

    /// Parses `strategy` or `strategy:depth`, e.g. `negamax:3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = SearchConfig::default();
        let (name, depth) = match s.split_once(':') {
            Some((name, depth)) => (name, Some(depth)),
            None => (s, None),
        };
        config.strategy = name.parse()?;
        if let Some(depth) = depth {
            config.depth = depth
                .trim()
                .parse()
                .map_err(|_| ChessError::UnknownStrategy(s.to_owned()))?;
        }
        Ok(config)
    }
}

/// Runs `engine` on a non-empty move list and logs the decision.
pub fn run_engine(
    engine: &mut dyn Engine,
    position: &mut Position,
    legal_moves: &[Move],
) -> ChessResult<EngineOutput> {
    if legal_moves.is_empty() {
        return Err(ChessError::NoLegalMoves);
    }
    let out = engine.choose_move(position, legal_moves)?;
    debug!(
        engine = engine.name(),
        side = %position.side_to_move(),
        best_move = ?out.best_move.map(|mv| mv.to_string()),
        score = ?out.best_score,
        nodes = out.nodes,
        "engine decision"
    );
    Ok(out)
}

/// Chooses a move for the side to move in `position`.
///
/// `legal_moves` must be the legal moves of `position`; an empty list is
/// `ChessError::NoLegalMoves`. `depth` only matters for the tree searches and
/// is raised to at least 1.
pub fn choose_move(
    position: &mut Position,
    legal_moves: &[Move],
    strategy: Strategy,
    depth: u8,
) -> ChessResult<Move> {
    choose_move_with(position, legal_moves, &SearchConfig::new(strategy, depth))
}

pub fn choose_move_with(
    position: &mut Position,
    legal_moves: &[Move],
    config: &SearchConfig,
) -> ChessResult<Move> {
    let mut engine = config.build_engine();
    let out = run_engine(engine.as_mut(), position, legal_moves)?;
    out.best_move.ok_or(ChessError::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("NEGAMAX".parse::<Strategy>(), Ok(Strategy::NegamaxAlphaBeta));
        assert!("deep-blue".parse::<Strategy>().is_err());
    }

    #[test]
    fn config_parses_optional_depth() {
        let config: SearchConfig = "minimax:3".parse().expect("config should parse");
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.depth, 3);

        let config: SearchConfig = "greedy".parse().expect("config should parse");
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.depth, SearchConfig::default().depth);

        assert!("negamax:deep".parse::<SearchConfig>().is_err());
    }

    #[test]
    fn every_strategy_returns_a_legal_move_and_restores_position() {
        let mut position = Position::new_game();
        let before = position.clone();
        let moves = position.legal_moves().expect("legal moves");
        for strategy in Strategy::ALL {
            let chosen = choose_move(&mut position, &moves, strategy, 2).expect("a move");
            assert!(moves.contains(&chosen), "{strategy} chose {chosen}");
            assert_eq!(position, before, "{strategy}");
        }
    }

    #[test]
    fn zero_depth_is_treated_as_one() {
        let mut position =
            Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        let chosen = choose_move(&mut position, &moves, Strategy::Minimax, 0).expect("a move");
        assert_eq!(chosen.to_string(), "d1d5");
    }

    #[test]
    fn empty_move_list_is_an_error_for_every_strategy() {
        let mut position = Position::new_game();
        for strategy in Strategy::ALL {
            assert_eq!(
                choose_move(&mut position, &[], strategy, 2),
                Err(ChessError::NoLegalMoves)
            );
        }
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let mut position = Position::new_game();
        let moves = position.legal_moves().expect("legal moves");
        let config = SearchConfig::new(Strategy::Random, 1).with_seed(99);
        let first = choose_move_with(&mut position, &moves, &config).expect("a move");
        let second = choose_move_with(&mut position, &moves, &config).expect("a move");
        assert_eq!(first, second);
    }
}
