use plum_rules::chess_errors::ChessError;
use plum_rules::engines::strategy::{choose_move, Strategy};
use plum_rules::game_state::chess_types::Position;
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::search::board_scoring::{BoardScorer, MaterialScorer};
use plum_rules::search::minimax::minimax_search;
use plum_rules::search::negamax::negamax_search;
use plum_rules::utils::long_algebraic::find_legal_move;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R b KQkq - 0 3",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
];

#[test]
fn negamax_agrees_with_minimax() {
    for fen in POSITIONS {
        for depth in 1..=3u8 {
            let mut position = Position::from_fen(fen).expect("FEN should parse");
            let before = position.clone();
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

            assert_eq!(pruned.best_score, sign * plain.best_score, "{fen} depth {depth}");
            assert_eq!(pruned.best_move, plain.best_move, "{fen} depth {depth}");
            assert!(pruned.nodes <= plain.nodes, "{fen} depth {depth}");
            assert_eq!(position, before);
        }
    }
}

#[test]
fn negamax_choice_has_the_minimax_value() {
    // Re-search the position after each engine's chosen move one ply shallower
    // and check both choices lead to the same value.
    let fen = POSITIONS[1];
    let depth = 3u8;
    let mut position = Position::from_fen(fen).expect("FEN should parse");
    let moves = position.legal_moves().expect("legal moves");

    let value_after = |text: String| {
        let mut child = position.clone();
        let mv = find_legal_move(&mut child, &text).expect("chosen move is legal");
        child.apply_move(&mv).expect("chosen move applies");
        let replies = child.legal_moves().expect("legal moves");
        minimax_search(
            &mut child,
            &replies,
            &LegalMoveGenerator,
            &MaterialScorer,
            depth - 1,
        )
        .expect("minimax should run")
        .best_score
    };

    let mut scratch = Position::from_fen(fen).expect("FEN should parse");
    let by_minimax = choose_move(&mut scratch, &moves, Strategy::Minimax, depth).expect("a move");
    let by_negamax =
        choose_move(&mut scratch, &moves, Strategy::NegamaxAlphaBeta, depth).expect("a move");
    assert_eq!(value_after(by_minimax.to_string()), value_after(by_negamax.to_string()));
}

#[test]
fn every_strategy_plays_a_legal_game_fragment() {
    for strategy in Strategy::ALL {
        let mut position = Position::new_game();
        for _ in 0..8 {
            let moves = position.legal_moves().expect("legal moves");
            if moves.is_empty() {
                break;
            }
            let before = position.clone();
            let mv = choose_move(&mut position, &moves, strategy, 2).expect("a move");
            assert_eq!(position, before, "{strategy} left the position modified");
            assert!(moves.contains(&mv), "{strategy} chose an illegal move {mv}");
            position.apply_move(&mv).expect("chosen move applies");
        }
        assert_eq!(position.ply_count(), 8);
    }
}

#[test]
fn tree_searches_find_mate_in_one() {
    let fen = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
    for strategy in [Strategy::Greedy, Strategy::Minimax, Strategy::NegamaxAlphaBeta] {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        let moves = position.legal_moves().expect("legal moves");
        let mv = choose_move(&mut position, &moves, strategy, 2).expect("a move");
        assert_eq!(mv.to_string(), "a1a8", "{strategy}");
    }
}

#[test]
fn mated_side_has_nothing_to_choose() {
    let mut position = Position::new_game();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mv = find_legal_move(&mut position, text).expect("scripted move is legal");
        position.apply_move(&mv).expect("scripted move applies");
    }
    let moves = position.legal_moves().expect("legal moves");
    assert_eq!(
        choose_move(&mut position, &moves, Strategy::NegamaxAlphaBeta, 2),
        Err(ChessError::NoLegalMoves)
    );
    assert_eq!(MaterialScorer.score(&position), 0);
}
