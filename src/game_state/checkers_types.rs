/// Shared value types for the draughts rules engine.
/// Board squares are plain indices; color and crowning are tracked in
/// separate masks on `BoardState`.

pub use crate::game_state::board_state::BoardState;

/// Board square index (`0..=63`, `row * 8 + column`).
pub type Square = u8;

/// Side to move. Discriminants follow the conventional numbering (Black = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Row increment a non-king piece of this side may move in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// Farthest row from this side's home edge.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Black => 7,
            Player::White => 0,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a piece is crowned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

/// Reason a proposed move was rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Start or end lies outside `0..=63`.
    OutOfBounds,
    /// The start square does not hold one of the mover's pieces.
    NoOwnPiece,
    DestinationOccupied,
    NotDiagonal,
    /// A non-king tried to move or jump away from its forward direction.
    WrongDirection,
    /// Two-step diagonal whose midpoint does not hold an opponent piece.
    NothingToCapture,
    /// Diagonal, but neither one nor two steps.
    BadDistance,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMove::OutOfBounds => "square index out of range",
            IllegalMove::NoOwnPiece => "no piece of the moving side on the start square",
            IllegalMove::DestinationOccupied => "destination square is not empty",
            IllegalMove::NotDiagonal => "move is not diagonal",
            IllegalMove::WrongDirection => "regular pieces may only move forward",
            IllegalMove::NothingToCapture => "no opponent piece to jump over",
            IllegalMove::BadDistance => "moves must cover one or two diagonal steps",
        };
        f.write_str(text)
    }
}

/// Legality class of a single proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Illegal(IllegalMove),
    Simple,
    /// Jump; carries the square of the piece being captured.
    Capture(Square),
}

impl MoveClass {
    #[inline]
    pub const fn is_legal(self) -> bool {
        !matches!(self, MoveClass::Illegal(_))
    }

    #[inline]
    pub const fn captured_square(self) -> Option<Square> {
        match self {
            MoveClass::Capture(square) => Some(square),
            _ => None,
        }
    }
}

/// Outcome of the total-capture win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
}
