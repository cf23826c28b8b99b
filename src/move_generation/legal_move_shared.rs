use crate::game_state::checkers_rules::BOARD_WIDTH;
use crate::game_state::checkers_types::Square;

/// The four diagonal steps as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub const fn square_row(square: Square) -> i8 {
    (square / BOARD_WIDTH) as i8
}

#[inline]
pub const fn square_col(square: Square) -> i8 {
    (square % BOARD_WIDTH) as i8
}

#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

/// Square at `(row, col)`, or `None` when either coordinate leaves the board.
#[inline]
pub const fn square_at(row: i8, col: i8) -> Option<Square> {
    if row < 0 || row >= BOARD_WIDTH as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
        None
    } else {
        Some((row as u8) * BOARD_WIDTH + col as u8)
    }
}

/// Square reached by stepping `steps` times along `(d_row, d_col)`.
#[inline]
pub const fn offset_square(square: Square, d_row: i8, d_col: i8, steps: i8) -> Option<Square> {
    square_at(
        square_row(square) + d_row * steps,
        square_col(square) + d_col * steps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_on_the_board() {
        assert_eq!(offset_square(17, 1, 1, 1), Some(26));
        assert_eq!(offset_square(17, -1, 1, 2), Some(3));
        assert_eq!(offset_square(8, 1, -1, 1), None);
        assert_eq!(offset_square(62, 1, 1, 1), None);
        assert_eq!(square_at(7, 7), Some(63));
        assert_eq!(square_at(-1, 0), None);
    }
}
