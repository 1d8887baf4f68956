use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use tracing::info;

use crate::{
    InvalidTurnOrderError, SessionPlaceError,
    core::{config::GameConfig, placement::Placement, player::Player},
};

use super::game_field::GameField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Waiting,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnState {
    WaitingForMove,
    Placed,
    Skipped,
}

/// Turn bookkeeping over a single [`GameField`].
///
/// The session tracks whose turn it is and moves to `Finished` once nobody can
/// place anything. It never skips a blocked player on its own; callers check
/// [`can_current_player_move`](Self::can_current_player_move) and call
/// [`skip_turn`](Self::skip_turn) when appropriate.
///
/// # Example
///
/// ```
/// use blokus_engine::{BlockKind, GameSession, Placement, Player, Position};
///
/// let mut session = GameSession::new();
/// session.start();
///
/// let opening = Placement::new(Player::Blue, BlockKind::PentoL, Position::new(0, 0));
/// session.try_place(&opening).unwrap();
/// session.next_turn();
///
/// assert_eq!(session.current_player(), Player::Yellow);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    session_state: SessionState,
    turn_state: TurnState,
    turn_order: ArrayVec<Player, { Player::LEN }>,
    current_index: usize,
    turn_number: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a waiting session on a standard board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_field(GameField::new())
    }

    #[must_use]
    pub fn with_field(field: GameField) -> Self {
        Self {
            field,
            session_state: SessionState::Waiting,
            turn_state: TurnState::WaitingForMove,
            turn_order: Player::ALL.into_iter().collect(),
            current_index: 0,
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn field_mut(&mut self) -> &mut GameField {
        &mut self.field
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    /// Turn number, starting at 1 and increasing each time the order wraps.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn turn_order(&self) -> &[Player] {
        &self.turn_order
    }

    /// Replaces the turn order and rewinds to its first player.
    ///
    /// The order must be non-empty and list no player twice. Players left out
    /// never get a turn.
    pub fn set_turn_order(&mut self, order: &[Player]) -> Result<(), InvalidTurnOrderError> {
        if order.is_empty() || order.len() > Player::LEN {
            return Err(InvalidTurnOrderError);
        }
        for (i, player) in order.iter().enumerate() {
            if order[..i].contains(player) {
                return Err(InvalidTurnOrderError);
            }
        }
        self.turn_order = order.iter().copied().collect();
        self.current_index = 0;
        Ok(())
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn_order[self.current_index]
    }

    #[must_use]
    pub fn next_player(&self) -> Player {
        self.turn_order[(self.current_index + 1) % self.turn_order.len()]
    }

    /// Resets the board and begins play with the first player in turn order.
    pub fn start(&mut self) {
        self.reset();
        self.session_state = SessionState::Playing;
        info!(player = %self.current_player(), "game started");
    }

    /// Clears the board and returns to the waiting state.
    ///
    /// The board size and turn order are kept.
    pub fn reset(&mut self) {
        let size = self.field.board().size();
        self.field = GameField::with_config(&GameConfig::with_board_size(size)).unwrap_or_default();
        self.session_state = SessionState::Waiting;
        self.turn_state = TurnState::WaitingForMove;
        self.current_index = 0;
        self.turn_number = 1;
    }

    pub fn end(&mut self) {
        if !self.session_state.is_finished() {
            info!(turn = self.turn_number, "game finished");
        }
        self.session_state = SessionState::Finished;
    }

    /// Places a block for the current player.
    ///
    /// Does not advance the turn; call [`next_turn`](Self::next_turn) afterwards.
    pub fn try_place(&mut self, placement: &Placement) -> Result<(), SessionPlaceError> {
        if !self.session_state.is_playing() {
            return Err(SessionPlaceError::NotPlaying);
        }
        let current = self.current_player();
        if placement.player() != current {
            return Err(SessionPlaceError::NotYourTurn {
                current,
                requested: placement.player(),
            });
        }
        if !self.field.place_block(placement) {
            return Err(SessionPlaceError::Rejected);
        }
        self.turn_state = TurnState::Placed;
        Ok(())
    }

    /// Hands the turn to the next player, or ends the game if nobody can move.
    pub fn next_turn(&mut self) {
        if !self.session_state.is_playing() {
            return;
        }

        self.current_index = (self.current_index + 1) % self.turn_order.len();
        if self.current_index == 0 {
            self.turn_number += 1;
        }

        if self.field.is_game_finished() {
            self.end();
        } else {
            self.turn_state = TurnState::WaitingForMove;
        }
    }

    /// Passes the current player's turn.
    pub fn skip_turn(&mut self) {
        if !self.session_state.is_playing() {
            return;
        }
        self.turn_state = TurnState::Skipped;
        self.next_turn();
    }

    pub fn can_current_player_move(&mut self) -> bool {
        let player = self.current_player();
        self.field.can_player_place_any_block(player)
    }

    #[must_use]
    pub fn final_scores(&self) -> BTreeMap<Player, u32> {
        self.field.calculate_scores()
    }
}
