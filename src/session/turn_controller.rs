//! Turn sequencing on top of the stateless rule functions.
//!
//! `CheckersGame` owns one board and the side to move, and drives the
//! capture-chain loop: after a jump the same piece must keep jumping while
//! it can, and the turn only passes once the chain ends. Nothing here reads
//! input; callers feed already-parsed squares and re-prompt on `Err`.

use log::{debug, info};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::game_status::is_over;
use crate::game_state::rules_config::RulesConfig;
use crate::game_state::{board_state::BoardState, checkers_types::*};
use crate::move_generation::capture_chain::capture_landings;
use crate::move_generation::legal_move_apply::{apply_move_in_place, lands_on_promotion_row};
use crate::move_generation::legal_move_checks::validate_move;
use crate::utils::algebraic::square_name;

/// What the caller must do after a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passed to the opponent.
    TurnComplete {
        /// Every square captured this turn, in jump order.
        captured: Vec<Square>,
        /// The moving piece was crowned during this turn.
        promoted: bool,
    },
    /// The piece on `from` must jump again; `landings` lists where it can go.
    ChainContinues { from: Square, landings: Vec<Square> },
}

#[derive(Debug, Clone)]
pub struct CheckersGame {
    board: BoardState,
    to_move: Player,
    config: RulesConfig,
    pending_chain: Option<Square>,
    turn_captures: Vec<Square>,
    turn_promoted: bool,
    turns_played: u32,
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl CheckersGame {
    pub fn new(config: RulesConfig) -> Self {
        Self::from_board(BoardState::new_game(), config.first_player(), config)
    }

    pub fn from_board(board: BoardState, to_move: Player, config: RulesConfig) -> Self {
        Self {
            board,
            to_move,
            config,
            pending_chain: None,
            turn_captures: Vec::new(),
            turn_promoted: false,
            turns_played: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Square of the piece that must keep jumping, if a chain is in progress.
    #[inline]
    pub fn pending_chain(&self) -> Option<Square> {
        self.pending_chain
    }

    #[inline]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        is_over(&self.board)
    }

    /// Plays the first move of a turn.
    ///
    /// Rejected moves leave the game untouched.
    pub fn submit_move(&mut self, start: Square, end: Square) -> CheckersResult<TurnOutcome> {
        self.ensure_in_progress()?;
        if let Some(from) = self.pending_chain {
            return Err(CheckersError::ChainPending(from));
        }

        match validate_move(&self.board, start, end, self.to_move) {
            MoveClass::Illegal(reason) => Err(self.reject(start, end, reason)),
            MoveClass::Simple => {
                let was_king = self.board.is_king(start);
                apply_move_in_place(&mut self.board, start, end, None, self.to_move);
                self.note_promotion(was_king, end);
                Ok(self.finish_turn())
            }
            MoveClass::Capture(captured) => Ok(self.play_capture(start, end, captured)),
        }
    }

    /// Plays the next jump of a pending chain, starting from the previous landing square.
    ///
    /// Only captures are accepted. On `Err` the chain stays pending.
    pub fn continue_chain(&mut self, end: Square) -> CheckersResult<TurnOutcome> {
        self.ensure_in_progress()?;
        let start = self.pending_chain.ok_or(CheckersError::NoChainPending)?;

        match validate_move(&self.board, start, end, self.to_move) {
            MoveClass::Capture(captured) => Ok(self.play_capture(start, end, captured)),
            MoveClass::Simple => {
                debug!(
                    "{} tried a plain step {} -> {} mid-chain",
                    self.to_move,
                    square_name(start),
                    square_name(end)
                );
                Err(CheckersError::ChainRequiresCapture { start, end })
            }
            MoveClass::Illegal(reason) => Err(self.reject(start, end, reason)),
        }
    }

    /// Ends a pending chain early. Jumps already made stay on the board.
    pub fn abandon_chain(&mut self) -> CheckersResult<TurnOutcome> {
        let from = self.pending_chain.ok_or(CheckersError::NoChainPending)?;
        info!(
            "{} abandoned the capture chain at {}",
            self.to_move,
            square_name(from)
        );
        Ok(self.finish_turn())
    }

    fn play_capture(&mut self, start: Square, end: Square, captured: Square) -> TurnOutcome {
        let was_king = self.board.is_king(start);
        apply_move_in_place(&mut self.board, start, end, Some(captured), self.to_move);
        self.turn_captures.push(captured);
        self.note_promotion(was_king, end);
        info!(
            "{} jumped {} -> {}, capturing {}",
            self.to_move,
            square_name(start),
            square_name(end),
            square_name(captured)
        );

        if self.config.stop_chain_on_promotion && lands_on_promotion_row(end, self.to_move) {
            debug!("chain stops on the promotion row at {}", square_name(end));
            return self.finish_turn();
        }

        let landings = capture_landings(&self.board, end, self.to_move);
        if landings.is_empty() {
            return self.finish_turn();
        }

        debug!(
            "{} must keep jumping from {} ({} option(s))",
            self.to_move,
            square_name(end),
            landings.len()
        );
        self.pending_chain = Some(end);
        TurnOutcome::ChainContinues {
            from: end,
            landings,
        }
    }

    fn note_promotion(&mut self, was_king: bool, end: Square) {
        if !was_king && self.board.is_king(end) {
            info!("{} piece promoted to king on {}", self.to_move, square_name(end));
            self.turn_promoted = true;
        }
    }

    fn finish_turn(&mut self) -> TurnOutcome {
        let outcome = TurnOutcome::TurnComplete {
            captured: std::mem::take(&mut self.turn_captures),
            promoted: std::mem::replace(&mut self.turn_promoted, false),
        };
        self.pending_chain = None;
        self.turns_played += 1;
        self.to_move = self.to_move.opponent();

        if let GameStatus::Win(winner) = self.status() {
            info!("{winner} wins after {} turns", self.turns_played);
        }
        outcome
    }

    fn reject(&self, start: Square, end: Square, reason: IllegalMove) -> CheckersError {
        debug!(
            "{} move {} -> {} rejected: {reason}",
            self.to_move,
            square_name(start),
            square_name(end)
        );
        CheckersError::IllegalMove { start, end, reason }
    }

    fn ensure_in_progress(&self) -> CheckersResult<()> {
        match self.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::Win(winner) => Err(CheckersError::GameOver(winner)),
        }
    }
}
