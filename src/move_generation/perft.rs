use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft_legal(position: &mut Position, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

/// Counts leaf positions `depth` plies below `position` by walking the tree
/// with apply/undo. The position is restored before returning.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    position: &mut Position,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generator.generate_legal_moves(position)?;
    let mut total = PerftCounts::default();

    for mv in moves {
        position.apply_move(&mv)?;
        let counted = if depth == 1 {
            leaf_counts(generator, position, &mv)
        } else {
            perft(generator, position, depth - 1)
        };
        position.undo_move();
        total.merge(counted?);
    }

    Ok(total)
}

/// Counts for the single leaf reached by `mv`, which has just been applied.
fn leaf_counts<G: MoveGenerator>(
    generator: &G,
    position: &mut Position,
    mv: &Move,
) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(mv.is_en_passant()),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(mv.is_promotion()),
        ..PerftCounts::default()
    };
    if position.is_in_check() {
        counts.checks = 1;
        if generator.generate_legal_moves(position)?.is_empty() {
            counts.checkmates = 1;
        }
    }
    Ok(counts)
}

/// Per-root-move node counts, useful when comparing against another engine.
pub fn perft_divide(position: &mut Position, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let generator = LegalMoveGenerator;
    let moves = generator.generate_legal_moves(position)?;
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        position.apply_move(&mv)?;
        let counts = perft(&generator, position, depth.saturating_sub(1));
        position.undo_move();
        out.push((mv.to_string(), counts?.nodes));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_node_counts() {
        let mut position = Position::new_game();
        let before = position.clone();
        assert_eq!(perft_legal(&mut position, 1).expect("perft").nodes, 20);
        assert_eq!(perft_legal(&mut position, 2).expect("perft").nodes, 400);
        let depth3 = perft_legal(&mut position, 3).expect("perft");
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(position, before);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let mut position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let depth1 = perft_legal(&mut position, 1).expect("perft");
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft_legal(&mut position, 2).expect("perft");
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn rook_endgame_counts() {
        let mut position =
            Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN");
        assert_eq!(perft_legal(&mut position, 1).expect("perft").nodes, 14);
        assert_eq!(perft_legal(&mut position, 2).expect("perft").nodes, 191);
        assert_eq!(perft_legal(&mut position, 3).expect("perft").nodes, 2812);
    }

    #[test]
    fn divide_sums_to_total() {
        let mut position = Position::new_game();
        let divided = perft_divide(&mut position, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
