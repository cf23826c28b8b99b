//! Rule switches for the turn driver.

use crate::game_state::checkers_types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// End the turn as soon as a jump lands on the mover's promotion row,
    /// even if the piece could keep capturing.
    pub stop_chain_on_promotion: bool,
    pub black_moves_first: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            stop_chain_on_promotion: true,
            black_moves_first: true,
        }
    }
}

impl RulesConfig {
    #[inline]
    pub fn first_player(&self) -> Player {
        if self.black_moves_first {
            Player::Black
        } else {
            Player::White
        }
    }
}
