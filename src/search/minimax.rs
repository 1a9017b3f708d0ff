//! Fixed-depth minimax.
//!
//! Scores are from `Color::Light`'s view: Light maximizes and Dark minimizes.
//! Each call returns its own `(best move, best score)` pair, so nothing is
//! shared across the recursion except the node counter.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::Color, position::Position};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, SCORE_INFINITY};
use crate::search::search_result::{terminal_score_for_light, SearchResult};

/// Searches `depth` plies below `position` over the given root moves.
///
/// The root move kept is the first one reaching the best value. The position
/// is restored before returning, including on error.
pub fn minimax_search<G: MoveGenerator, S: BoardScorer>(
    position: &mut Position,
    legal_moves: &[Move],
    generator: &G,
    scorer: &S,
    depth: u8,
) -> ChessResult<SearchResult> {
    let maximizing = position.side_to_move() == Color::Light;
    let mut nodes = 0u64;
    let (best_move, best_score) = minimax(
        position,
        legal_moves,
        generator,
        scorer,
        depth,
        0,
        maximizing,
        &mut nodes,
    )?;

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

#[allow(clippy::too_many_arguments)]
fn minimax<G: MoveGenerator, S: BoardScorer>(
    position: &mut Position,
    legal_moves: &[Move],
    generator: &G,
    scorer: &S,
    depth: u8,
    ply: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> ChessResult<(Option<Move>, i32)> {
    *nodes += 1;

    if depth == 0 {
        return Ok((None, scorer.score(position)));
    }
    if legal_moves.is_empty() {
        return Ok((None, terminal_score_for_light(position, ply)));
    }

    let mut best_move = None;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for mv in legal_moves {
        position.apply_move(mv)?;
        // Replies are only needed above the horizon.
        let replies = if depth > 1 {
            generator.generate_legal_moves(position)
        } else {
            Ok(Vec::new())
        };
        let child = replies.and_then(|replies| {
            minimax(
                position,
                &replies,
                generator,
                scorer,
                depth - 1,
                ply + 1,
                !maximizing,
                nodes,
            )
        });
        position.undo_move();
        let (_, score) = child?;

        if ply == 0 {
            trace!(%mv, score, "minimax root move");
        }

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(*mv);
        }
    }

    Ok((best_move, best_score))
}
