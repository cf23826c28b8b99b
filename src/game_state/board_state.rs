//! Bitboard board representation.
//!
//! `BoardState` is the central model for the engine: one occupancy mask per
//! color plus a mask of crowned pieces. It is a small `Copy` value, so rule
//! functions take it by reference and the applicator hands back a new one.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{BLACK_STARTING_MASK, WHITE_STARTING_MASK};
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    pub black_pieces: u64,
    pub white_pieces: u64,
    /// Crowned pieces of either color. Always a subset of the two color masks.
    pub kings: u64,
}

impl BoardState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout: twelve men per side, no kings.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            black_pieces: BLACK_STARTING_MASK,
            white_pieces: WHITE_STARTING_MASK,
            kings: 0,
        }
    }

    /// Builds a board from raw masks, rejecting layouts that break the
    /// one-piece-per-square or kings-are-pieces invariants.
    pub fn from_masks(black_pieces: u64, white_pieces: u64, kings: u64) -> CheckersResult<Self> {
        let overlap = black_pieces & white_pieces;
        if overlap != 0 {
            return Err(CheckersError::OverlappingPieces(overlap));
        }
        let orphans = kings & !(black_pieces | white_pieces);
        if orphans != 0 {
            return Err(CheckersError::OrphanKings(orphans));
        }
        Ok(Self {
            black_pieces,
            white_pieces,
            kings,
        })
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.black_pieces | self.white_pieces
    }

    #[inline]
    pub fn pieces_of(&self, player: Player) -> u64 {
        match player {
            Player::Black => self.black_pieces,
            Player::White => self.white_pieces,
        }
    }

    #[inline]
    pub(crate) fn pieces_of_mut(&mut self, player: Player) -> &mut u64 {
        match player {
            Player::Black => &mut self.black_pieces,
            Player::White => &mut self.white_pieces,
        }
    }

    #[inline]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.pieces_of(player).count_ones()
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        square < 64 && self.occupied() & (1u64 << square) == 0
    }

    #[inline]
    pub fn is_king(&self, square: Square) -> bool {
        square < 64 && self.kings & (1u64 << square) != 0
    }

    /// Owner and kind of the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Player, PieceKind)> {
        if square >= 64 {
            return None;
        }
        let mask = 1u64 << square;
        let owner = if self.black_pieces & mask != 0 {
            Player::Black
        } else if self.white_pieces & mask != 0 {
            Player::White
        } else {
            return None;
        };
        let kind = if self.kings & mask != 0 {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some((owner, kind))
    }

    /// Colors are disjoint and every king sits on an occupied square.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.black_pieces & self.white_pieces == 0 && self.kings & !self.occupied() == 0
    }
}
