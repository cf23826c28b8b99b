use log::debug;

use crate::game_state::{board_state::BoardState, checkers_types::*};
use crate::move_generation::legal_move_shared::{square_mask, square_row};

/// Applies an already-validated move and returns the resulting board.
///
/// `captured` is the square reported by `MoveClass::Capture`, if any. The
/// input is trusted: no legality checks are repeated here.
pub fn apply_move(
    board: &BoardState,
    start: Square,
    end: Square,
    captured: Option<Square>,
    player: Player,
) -> BoardState {
    let mut next = *board;
    apply_move_in_place(&mut next, start, end, captured, player);
    next
}

/// In-place form of [`apply_move`].
pub fn apply_move_in_place(
    board: &mut BoardState,
    start: Square,
    end: Square,
    captured: Option<Square>,
    player: Player,
) {
    let start_mask = square_mask(start);
    let end_mask = square_mask(end);

    // Relocate the piece within its own color mask.
    let own = board.pieces_of_mut(player);
    *own &= !start_mask;
    *own |= end_mask;

    // King-ness follows the piece, not the square.
    if board.kings & start_mask != 0 {
        board.kings &= !start_mask;
        board.kings |= end_mask;
    }

    if let Some(captured) = captured {
        let captured_mask = square_mask(captured);
        *board.pieces_of_mut(player.opponent()) &= !captured_mask;
        board.kings &= !captured_mask;
    }

    if lands_on_promotion_row(end, player) && board.kings & end_mask == 0 {
        debug!("{player} piece crowned on square {end}");
        board.kings |= end_mask;
    }

    debug_assert!(board.is_consistent(), "apply_move broke board invariants");
}

/// Whether `square` is on the row where `player`'s men are crowned.
#[inline]
pub fn lands_on_promotion_row(square: Square, player: Player) -> bool {
    square_row(square) as u8 == player.promotion_row()
}
