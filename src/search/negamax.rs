//! Negamax with alpha-beta pruning.
//!
//! Computes the same value as minimax from the mover's own view: each
//! recursive call negates the child score and swaps the bounds, and a node
//! stops expanding once `alpha >= beta`. For the same depth and move order it
//! picks the same root move as `minimax_search`, visiting fewer nodes.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, SCORE_INFINITY};
use crate::search::search_result::{terminal_score, SearchResult};

/// `best_score` is from the side to move's view.
pub fn negamax_search<G: MoveGenerator, S: BoardScorer>(
    position: &mut Position,
    legal_moves: &[Move],
    generator: &G,
    scorer: &S,
    depth: u8,
) -> ChessResult<SearchResult> {
    let turn_mult = position.side_to_move().sign();
    let mut nodes = 0u64;
    let (best_move, best_score) = negamax(
        position,
        legal_moves,
        generator,
        scorer,
        depth,
        0,
        turn_mult,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        &mut nodes,
    )?;

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

#[allow(clippy::too_many_arguments)]
fn negamax<G: MoveGenerator, S: BoardScorer>(
    position: &mut Position,
    legal_moves: &[Move],
    generator: &G,
    scorer: &S,
    depth: u8,
    ply: u8,
    turn_mult: i32,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> ChessResult<(Option<Move>, i32)> {
    *nodes += 1;

    if depth == 0 {
        return Ok((None, turn_mult * scorer.score(position)));
    }
    if legal_moves.is_empty() {
        return Ok((None, terminal_score(position, ply)));
    }

    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;

    for mv in legal_moves {
        position.apply_move(mv)?;
        // Replies are only needed above the horizon.
        let replies = if depth > 1 {
            generator.generate_legal_moves(position)
        } else {
            Ok(Vec::new())
        };
        let child = replies.and_then(|replies| {
            negamax(
                position,
                &replies,
                generator,
                scorer,
                depth - 1,
                ply + 1,
                -turn_mult,
                -beta,
                -alpha,
                nodes,
            )
        });
        position.undo_move();
        let score = -child?.1;

        if ply == 0 {
            trace!(%mv, score, "negamax root move");
        }

        if score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    Ok((best_move, best_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::{MaterialScorer, MATE_SCORE};
    use crate::search::minimax::minimax_search;

    fn both(fen: &str, depth: u8) -> (SearchResult, SearchResult, i32) {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        let sign = position.side_to_move().sign();
        let moves = position.legal_moves().expect("legal moves");
        let plain = minimax_search(
            &mut position,
            &moves,
            &LegalMoveGenerator,
            &MaterialScorer,
            depth,
        )
        .expect("minimax should run");
        let pruned = negamax_search(
            &mut position,
            &moves,
            &LegalMoveGenerator,
            &MaterialScorer,
            depth,
        )
        .expect("negamax should run");
        (plain, pruned, sign)
    }

    #[test]
    fn finds_back_rank_mate_from_movers_view() {
        let (_, pruned, _) = both("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2);
        assert_eq!(pruned.best_move.map(|mv| mv.to_string()), Some("a1a8".to_owned()));
        assert_eq!(pruned.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn dark_score_is_reported_from_dark_view() {
        let (plain, pruned, sign) = both("4k3/8/8/8/8/8/1q6/R3K3 b - - 0 1", 1);
        assert_eq!(sign, -1);
        assert_eq!(pruned.best_score, 9);
        assert_eq!(plain.best_score, -9);
        assert_eq!(pruned.best_move, plain.best_move);
    }

    #[test]
    fn agrees_with_minimax_while_visiting_fewer_nodes() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 3";
        let (plain, pruned, sign) = both(fen, 3);
        assert_eq!(pruned.best_score, sign * plain.best_score);
        assert_eq!(pruned.best_move, plain.best_move);
        assert!(pruned.nodes < plain.nodes, "{} vs {}", pruned.nodes, plain.nodes);
    }

    #[test]
    fn stalemate_scores_zero_before_the_horizon() {
        let mut position =
            Position::from_fen("7k/8/6Q1/8/8/8/8/6K1 w - - 0 1").expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        let result = negamax_search(
            &mut position,
            &moves,
            &LegalMoveGenerator,
            &MaterialScorer,
            2,
        )
        .expect("negamax should run");
        let best = result.best_move.expect("a move is chosen");
        // Queen and king versus bare king: never choose the stalemating Qg6-f7.
        assert_ne!(best.to_string(), "g6f7");
        assert_eq!(result.best_score, 9);
    }
}
