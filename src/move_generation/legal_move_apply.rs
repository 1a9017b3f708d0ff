//! The mutator: the only code that changes a `Position`'s fields.
//!
//! `apply_move` and `undo_move` are strictly paired. Every applied move pushes
//! one `UndoState` holding the move plus the castling rights and en-passant
//! target it replaced, so N applies followed by N undos restore the exact
//! prior position.

use tracing::warn;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    KINGSIDE_KING_TO_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TO_COL, QUEENSIDE_ROOK_COL,
    QUEENSIDE_ROOK_TO_COL,
};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_piece_moves, GenerationMode};
use crate::moves::chess_move::Move;

/// Kind a pawn becomes when no other choice is requested.
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;

impl Position {
    /// Applies `mv`, promoting to a queen when it is a promotion.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<()> {
        self.apply_move_promoting_to(mv, DEFAULT_PROMOTION)
    }

    /// Applies `mv`, promoting to `promotion` when it is a promotion.
    ///
    /// The move must be one of this position's legal moves. A move whose
    /// recorded pieces disagree with the board, that the moving piece cannot
    /// make, or that leaves the mover's king attacked is rejected and the
    /// position is left unchanged.
    pub fn apply_move_promoting_to(&mut self, mv: &Move, promotion: PieceKind) -> ChessResult<()> {
        self.check_applicable(mv, promotion)?;

        let mut reachable = Vec::new();
        generate_piece_moves(
            self,
            mv.from(),
            mv.piece_moved(),
            GenerationMode::Moves,
            &mut reachable,
        );
        if !reachable.contains(mv) {
            return Err(illegal(mv, "the piece cannot make this move here"));
        }

        let mover = mv.piece_moved().color;
        self.make_move(mv, promotion);
        if is_king_in_check(self, mover) {
            self.undo_move();
            return Err(illegal(mv, "it leaves the king in check"));
        }
        Ok(())
    }

    /// Applies a move just produced by pseudo-legal generation for this
    /// position, without re-checking that it is legal.
    pub(crate) fn apply_pseudo_legal_move(&mut self, mv: &Move) -> ChessResult<()> {
        self.check_applicable(mv, DEFAULT_PROMOTION)?;
        self.make_move(mv, DEFAULT_PROMOTION);
        Ok(())
    }

    fn make_move(&mut self, mv: &Move, promotion: PieceKind) {

        let mover = mv.piece_moved();
        let color = mover.color;

        self.undo_stack.push(UndoState {
            mv: *mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.set_piece(mv.from(), None);
        let placed = if mv.is_promotion() {
            Piece::new(color, promotion)
        } else {
            mover
        };
        self.set_piece(mv.to(), Some(placed));

        if mover.kind == PieceKind::King {
            self.king_squares[color.index()] = Some(mv.to());
        }
        if let Some(captured) = mv.piece_captured() {
            if captured.kind == PieceKind::King {
                self.king_squares[captured.color.index()] = None;
            }
        }

        if mv.is_en_passant() {
            self.set_piece(mv.en_passant_victim_square(), None);
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, Some(Piece::new(color, PieceKind::Rook)));
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::at((mv.from().row() + mv.to().row()) / 2, mv.from().col()))
        } else {
            None
        };

        self.revoke_castling_rights(mv);
        self.side_to_move = color.opposite();
    }

    /// Reverts the most recent move and returns it.
    ///
    /// With an empty log this reports the condition and leaves the position
    /// untouched.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(undo) = self.undo_stack.pop() else {
            warn!("no move to undo");
            return None;
        };
        let mv = undo.mv;
        let mover = mv.piece_moved();
        let color = mover.color;

        self.side_to_move = color;
        self.set_piece(mv.from(), Some(mover));
        self.set_piece(mv.to(), mv.piece_captured());

        if mover.kind == PieceKind::King {
            self.king_squares[color.index()] = Some(mv.from());
        }
        if let Some(captured) = mv.piece_captured() {
            if captured.kind == PieceKind::King {
                self.king_squares[captured.color.index()] = Some(mv.to());
            }
        }

        if mv.is_en_passant() {
            self.set_piece(
                mv.en_passant_victim_square(),
                Some(Piece::new(color.opposite(), PieceKind::Pawn)),
            );
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, Some(Piece::new(color, PieceKind::Rook)));
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;
        Some(mv)
    }

    fn check_applicable(&self, mv: &Move, promotion: PieceKind) -> ChessResult<()> {
        let mismatch = |reason: &str| ChessError::MoveDoesNotMatchPosition {
            mv: mv.to_string(),
            reason: reason.to_owned(),
        };

        let on_origin = self
            .piece_at(mv.from())
            .ok_or(ChessError::NoPieceOnSquare(mv.from()))?;
        if on_origin != mv.piece_moved() {
            return Err(mismatch("origin holds a different piece"));
        }
        if on_origin.color != self.side_to_move {
            return Err(ChessError::WrongSideToMove {
                square: mv.from(),
                color: self.side_to_move,
            });
        }
        if self.piece_at(mv.to()) != mv.piece_captured() {
            return Err(mismatch("destination occupant changed"));
        }
        if mv.is_en_passant() {
            let victim = Piece::new(on_origin.color.opposite(), PieceKind::Pawn);
            if self.piece_at(mv.en_passant_victim_square()) != Some(victim) {
                return Err(mismatch("no pawn to capture en passant"));
            }
        }
        if mv.is_castle() {
            let (rook_from, _) = castle_rook_squares(mv);
            if self.piece_at(rook_from) != Some(Piece::new(on_origin.color, PieceKind::Rook)) {
                return Err(mismatch("no rook to castle with"));
            }
        }
        if mv.is_promotion() && matches!(promotion, PieceKind::Pawn | PieceKind::King) {
            return Err(ChessError::InvalidPromotionPiece(promotion));
        }
        Ok(())
    }

    /// Rights only ever shrink here; restoring them is `undo_move`'s job.
    fn revoke_castling_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved();
        let color = mover.color;

        if mover.kind == PieceKind::King {
            self.castling_rights &= !(kingside_right(color) | queenside_right(color));
        }
        if mover.kind == PieceKind::Rook {
            self.castling_rights &= !corner_right(mv.from(), color);
        }
        // A rook captured on its corner takes its side's right with it.
        if let Some(captured) = mv.piece_captured() {
            if captured.kind == PieceKind::Rook {
                self.castling_rights &= !corner_right(mv.to(), captured.color);
            }
        }
    }
}

fn illegal(mv: &Move, reason: &str) -> ChessError {
    ChessError::IllegalMove {
        mv: mv.to_string(),
        reason: reason.to_owned(),
    }
}

/// The right tied to `color`'s rook starting on `square`, or none.
fn corner_right(square: Square, color: Color) -> CastlingRights {
    if square.row() != color.home_row() {
        return 0;
    }
    match square.col() {
        KINGSIDE_ROOK_COL => kingside_right(color),
        QUEENSIDE_ROOK_COL => queenside_right(color),
        _ => 0,
    }
}

fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from().row();
    if mv.to().col() == KINGSIDE_KING_TO_COL {
        (
            Square::at(row, KINGSIDE_ROOK_COL),
            Square::at(row, KINGSIDE_ROOK_TO_COL),
        )
    } else {
        (
            Square::at(row, QUEENSIDE_ROOK_COL),
            Square::at(row, QUEENSIDE_ROOK_TO_COL),
        )
    }
}
