//! Terminal-oriented ASCII board renderer.
//!
//! Creates a human-readable board view from the bitboards for the
//! interactive binary, tests, and diagnostics.

use crate::game_state::{board_state::BoardState, checkers_types::*};

const COLUMN_HEADER: &str = "  A B C D E F G H";

/// Render the board with row 8 at the top.
///
/// `b`/`B` are Black men/kings, `w`/`W` White men/kings, `.` an empty square.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str(COLUMN_HEADER);
    out.push('\n');

    for row in (0..8u8).rev() {
        let label = char::from(b'1' + row);
        out.push(label);
        out.push(' ');

        for col in 0..8u8 {
            out.push(piece_char(board.piece_at(row * 8 + col)));
            out.push(' ');
        }

        out.push(label);
        out.push('\n');
    }

    out.push_str(COLUMN_HEADER);

    out
}

fn piece_char(piece: Option<(Player, PieceKind)>) -> char {
    match piece {
        None => '.',
        Some((Player::Black, PieceKind::Man)) => 'b',
        Some((Player::Black, PieceKind::King)) => 'B',
        Some((Player::White, PieceKind::Man)) => 'w',
        Some((Player::White, PieceKind::King)) => 'W',
    }
}
