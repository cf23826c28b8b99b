//! Crate root module declarations for the bitboard draughts rules engine.
//!
//! This file exposes the board model, the single-move rule functions
//! (validation, application, capture-chain detection), the turn driver, and
//! text helpers so the interactive binary, tests, and benches can import
//! stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_status;
    pub mod rules_config;
}

pub mod move_generation {
    pub mod capture_chain;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
}

pub mod session {
    pub mod turn_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}

pub use checkers_errors::{CheckersError, CheckersResult};
pub use game_state::board_state::BoardState;
pub use game_state::checkers_types::{GameStatus, IllegalMove, MoveClass, PieceKind, Player, Square};
pub use game_state::rules_config::RulesConfig;
pub use session::turn_controller::{CheckersGame, TurnOutcome};

/// Starting layout: twelve men per side on the three rows nearest each home edge.
#[inline]
pub fn initialize_board() -> BoardState {
    BoardState::new_game()
}
