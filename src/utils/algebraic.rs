//! Square conversions for column-letter/row-number coordinates.
//!
//! Converts between human-readable coordinates (e.g., `B6`) and internal
//! square indices. Columns run `A..=H` left to right, rows `1..=8` from
//! Black's home edge.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Square;

/// Convert a column letter (either case) and a 1-based row to a square index.
#[inline]
pub fn to_index(column: char, row: i32) -> CheckersResult<Square> {
    let upper = column.to_ascii_uppercase();
    if !('A'..='H').contains(&upper) || !(1..=8).contains(&row) {
        return Err(CheckersError::InvalidCoordinate { column, row });
    }
    let col = upper as u8 - b'A';
    Ok((row as u8 - 1) * 8 + col)
}

/// Convert a square index back to its upper-case column letter and row.
#[inline]
pub fn index_to_coordinate(square: Square) -> CheckersResult<(char, u8)> {
    if square > 63 {
        return Err(CheckersError::SquareOutOfRange(square));
    }
    Ok((char::from(b'A' + square % 8), square / 8 + 1))
}

/// Square index as text, for example `"B6"`.
#[inline]
pub fn square_name(square: Square) -> String {
    match index_to_coordinate(square) {
        Ok((column, row)) => format!("{column}{row}"),
        Err(_) => format!("#{square}"),
    }
}

/// Parse text such as `"b6"` or `" C3 "` into a square index.
///
/// Text that is not one letter followed by digits is malformed; a letter and
/// number outside the board are reported as an invalid coordinate.
pub fn parse_coordinate(text: &str) -> CheckersResult<Square> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let column = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| CheckersError::MalformedCoordinate(text.to_owned()))?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckersError::MalformedCoordinate(text.to_owned()));
    }
    // Too many digits to be a row at all; still a coordinate-shaped input.
    let row = digits.parse::<i32>().unwrap_or(i32::MAX);
    to_index(column, row)
}
