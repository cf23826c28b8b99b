//! Total-capture win detection.
//!
//! A side wins only once the opponent has no pieces left; being blocked with
//! no legal move is not treated as a loss.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::{GameStatus, Player};

#[inline]
pub fn is_over_masks(black_pieces: u64, white_pieces: u64) -> GameStatus {
    if white_pieces == 0 {
        GameStatus::Win(Player::Black)
    } else if black_pieces == 0 {
        GameStatus::Win(Player::White)
    } else {
        GameStatus::InProgress
    }
}

#[inline]
pub fn is_over(board: &BoardState) -> GameStatus {
    is_over_masks(board.black_pieces, board.white_pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_white_mask_is_a_black_win() {
        let mut board = BoardState::new_game();
        board.white_pieces = 0;
        assert_eq!(is_over(&board), GameStatus::Win(Player::Black));
    }

    #[test]
    fn empty_black_mask_is_a_white_win() {
        assert_eq!(is_over_masks(0, 1 << 40), GameStatus::Win(Player::White));
    }

    #[test]
    fn both_sides_present_is_in_progress() {
        assert_eq!(is_over(&BoardState::new_game()), GameStatus::InProgress);
        assert_eq!(is_over_masks(1, 1 << 63), GameStatus::InProgress);
    }
}
