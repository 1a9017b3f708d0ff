//! Crate root module declarations for the Plum rules engine.
//!
//! Exposes the position model, pseudo-legal and legal move generation, the
//! apply/undo mutator, the search strategies, the engine layer and text
//! utilities under stable module paths for binaries, tests and benches.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod outcome;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod piece_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod greedy;
    pub mod minimax;
    pub mod negamax;
    pub mod search_result;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod strategy;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod position_text;
    pub mod render_game_state;
}
