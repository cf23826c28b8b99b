//! Single-move legality classification.
//!
//! Works directly on the occupancy masks so callers holding masks from any
//! source can classify a proposed move without building a `BoardState`.

use crate::game_state::checkers_rules::BOARD_SQUARES;
use crate::game_state::{board_state::BoardState, checkers_types::*};
use crate::move_generation::legal_move_shared::{square_at, square_col, square_mask, square_row};

/// Classifies the move `start -> end` for `player`.
///
/// Checks run in a fixed order and the first failing one names the
/// rejection: bounds, own piece on `start`, empty `end`, diagonal shape,
/// then distance-specific rules (direction for steps, midpoint then
/// direction for jumps).
pub fn classify_move(
    own_pieces: u64,
    opponent_pieces: u64,
    kings: u64,
    start: Square,
    end: Square,
    player: Player,
) -> MoveClass {
    if start >= BOARD_SQUARES || end >= BOARD_SQUARES {
        return MoveClass::Illegal(IllegalMove::OutOfBounds);
    }

    let start_mask = square_mask(start);
    if own_pieces & start_mask == 0 {
        return MoveClass::Illegal(IllegalMove::NoOwnPiece);
    }
    if (own_pieces | opponent_pieces) & square_mask(end) != 0 {
        return MoveClass::Illegal(IllegalMove::DestinationOccupied);
    }

    let row_diff = square_row(end) - square_row(start);
    let col_diff = square_col(end) - square_col(start);
    if row_diff.abs() != col_diff.abs() {
        return MoveClass::Illegal(IllegalMove::NotDiagonal);
    }

    let is_king = kings & start_mask != 0;
    let forward = player.forward();

    match row_diff.abs() {
        1 => {
            if is_king || row_diff == forward {
                MoveClass::Simple
            } else {
                MoveClass::Illegal(IllegalMove::WrongDirection)
            }
        }
        2 => {
            let mid_row = square_row(start) + row_diff / 2;
            let mid_col = square_col(start) + col_diff / 2;
            let Some(mid) = square_at(mid_row, mid_col) else {
                return MoveClass::Illegal(IllegalMove::NothingToCapture);
            };
            if opponent_pieces & square_mask(mid) == 0 {
                return MoveClass::Illegal(IllegalMove::NothingToCapture);
            }
            if is_king || row_diff == 2 * forward {
                MoveClass::Capture(mid)
            } else {
                MoveClass::Illegal(IllegalMove::WrongDirection)
            }
        }
        _ => MoveClass::Illegal(IllegalMove::BadDistance),
    }
}

/// Board-level form of [`classify_move`], resolving own/opponent masks from `player`.
#[inline]
pub fn validate_move(board: &BoardState, start: Square, end: Square, player: Player) -> MoveClass {
    classify_move(
        board.pieces_of(player),
        board.pieces_of(player.opponent()),
        board.kings,
        start,
        end,
        player,
    )
}
