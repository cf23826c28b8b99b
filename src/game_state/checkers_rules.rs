//! Canonical draughts rule constants.
//!
//! Board dimensions and the starting layout masks used to initialize and
//! validate board setup.

use crate::game_state::checkers_types::Square;

pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_SQUARES: u8 = 64;

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: u32 = 12;

/// Black: playable squares of rows 0-2.
pub const BLACK_STARTING_MASK: u64 = starting_mask(0, 2);
/// White: playable squares of rows 5-7.
pub const WHITE_STARTING_MASK: u64 = starting_mask(5, 7);

/// Playable (dark) squares between two rows inclusive, where `row + col` is odd.
const fn starting_mask(first_row: u8, last_row: u8) -> u64 {
    let mut mask = 0u64;
    let mut row = first_row;
    while row <= last_row {
        let mut col = (row + 1) % 2;
        while col < BOARD_WIDTH {
            mask |= 1u64 << (row * BOARD_WIDTH + col);
            col += 2;
        }
        row += 1;
    }
    mask
}

/// Whether `square` can hold a piece at all.
#[inline]
pub const fn is_playable_square(square: Square) -> bool {
    square < BOARD_SQUARES && ((square / BOARD_WIDTH) + (square % BOARD_WIDTH)) % 2 == 1
}
