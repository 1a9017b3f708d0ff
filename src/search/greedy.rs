//! One-ply greedy scoring.
//!
//! Each legal move is applied and scored from the mover's view: checkmate is a
//! fixed win, stalemate is zero, anything else is the material balance. Ties
//! for the best score are broken uniformly at random.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::outcome::{evaluate_outcome, GameOutcome};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_for, BoardScorer, MATE_SCORE, STALEMATE_SCORE};
use crate::search::search_result::SearchResult;

pub fn greedy_search<G, S, R>(
    position: &mut Position,
    legal_moves: &[Move],
    generator: &G,
    scorer: &S,
    rng: &mut R,
) -> ChessResult<SearchResult>
where
    G: MoveGenerator,
    S: BoardScorer,
    R: Rng + ?Sized,
{
    let mover = position.side_to_move();
    let mut best_score = i32::MIN;
    let mut best_moves = Vec::new();
    let mut nodes = 1u64;

    for mv in legal_moves {
        position.apply_move(mv)?;
        let replies = generator.generate_legal_moves(position);
        let score = replies.map(|replies| match evaluate_outcome(position, &replies) {
            GameOutcome::Checkmate => MATE_SCORE,
            GameOutcome::Stalemate => STALEMATE_SCORE,
            GameOutcome::Check | GameOutcome::Ongoing => score_for(scorer, position, mover),
        });
        position.undo_move();
        let score = score?;
        nodes += 1;

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(*mv);
        } else if score == best_score {
            best_moves.push(*mv);
        }
    }

    let picked = best_moves.choose(rng).ok_or(ChessError::NoLegalMoves)?;
    Ok(SearchResult {
        best_move: Some(*picked),
        best_score,
        nodes,
    })
}
