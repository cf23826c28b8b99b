//! Follow-up jump detection for multi-capture turns.
//!
//! After a capture, the same piece must keep jumping while a jump is
//! available from its landing square. A man only looks along its forward
//! diagonals, so a chain can never reverse a man's direction; a king looks
//! along all four.

use crate::game_state::{board_state::BoardState, checkers_types::*};
use crate::move_generation::legal_move_shared::{offset_square, square_mask, DIAGONALS};

/// Whether the piece on `square` has at least one jump available.
pub fn has_further_capture_masks(
    own_pieces: u64,
    opponent_pieces: u64,
    kings: u64,
    square: Square,
    player: Player,
) -> bool {
    !capture_landings_masks(own_pieces, opponent_pieces, kings, square, player).is_empty()
}

#[inline]
pub fn has_further_capture(board: &BoardState, square: Square, player: Player) -> bool {
    has_further_capture_masks(
        board.pieces_of(player),
        board.pieces_of(player.opponent()),
        board.kings,
        square,
        player,
    )
}

/// Landing squares of every jump available to the piece on `square`, in
/// `DIAGONALS` order. Used to tell a player where a chain may continue.
pub fn capture_landings_masks(
    own_pieces: u64,
    opponent_pieces: u64,
    kings: u64,
    square: Square,
    player: Player,
) -> Vec<Square> {
    if square >= 64 {
        return Vec::new();
    }
    let is_king = kings & square_mask(square) != 0;
    let occupied = own_pieces | opponent_pieces;

    let mut landings = Vec::with_capacity(DIAGONALS.len());
    for (d_row, d_col) in DIAGONALS {
        if !is_king && d_row != player.forward() {
            continue;
        }
        let (Some(mid), Some(end)) = (
            offset_square(square, d_row, d_col, 1),
            offset_square(square, d_row, d_col, 2),
        ) else {
            continue;
        };
        if opponent_pieces & square_mask(mid) != 0 && occupied & square_mask(end) == 0 {
            landings.push(end);
        }
    }
    landings
}

#[inline]
pub fn capture_landings(board: &BoardState, square: Square, player: Player) -> Vec<Square> {
    capture_landings_masks(
        board.pieces_of(player),
        board.pieces_of(player.opponent()),
        board.kings,
        square,
        player,
    )
}
