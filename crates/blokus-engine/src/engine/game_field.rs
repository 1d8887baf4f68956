use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::{
    InvalidBoardSizeError,
    core::{
        block::BlockKind, board::Board, config::GameConfig, placement::Placement, player::Player,
        position::Position,
    },
};

use super::{
    playability::{
        PlayabilityCache, find_legal_placement, legal_placements, legal_placements_of_kind,
    },
    scoring::calculate_scores,
};

/// One game's board together with its playability cache.
///
/// `GameField` is the surface callers drive: every mutation goes through it so
/// the cache is dropped for all players whenever the board changes. Hold one
/// per game session; it has no shared or global state, and callers hosting
/// many sessions serialize access to each field themselves.
///
/// # Example
///
/// ```
/// use blokus_engine::{BlockKind, GameField, Placement, Player, Position};
///
/// let mut field = GameField::new();
/// let opening = Placement::new(Player::Blue, BlockKind::Single, Position::new(0, 0));
///
/// assert!(field.can_place_block(&opening));
/// assert!(field.place_block(&opening));
/// assert_eq!(field.cell_owner(Position::new(0, 0)), Some(Player::Blue));
/// assert!(field.can_player_place_any_block(Player::Blue));
/// assert!(!field.is_game_finished());
/// ```
#[derive(Debug, Clone)]
pub struct GameField {
    board: Board,
    playability: PlayabilityCache,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    /// Creates a field with an empty standard 20×20 board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::standard())
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, InvalidBoardSizeError> {
        Ok(Self::from_board(Board::new(config)?))
    }

    /// Wraps an existing board, for example one restored from a save.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            playability: PlayabilityCache::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[must_use]
    pub fn cell_owner(&self, pos: Position) -> Option<Player> {
        self.board.cell_owner(pos)
    }

    #[must_use]
    pub fn can_place_block(&self, placement: &Placement) -> bool {
        self.board.can_place(placement)
    }

    /// Applies `placement` if it is legal.
    ///
    /// Returns `false` and leaves the field untouched otherwise.
    pub fn place_block(&mut self, placement: &Placement) -> bool {
        if !self.board.apply_placement(placement) {
            return false;
        }
        self.invalidate_cache();
        true
    }

    /// Clears the single cell at `pos`; see [`Board::remove_block`].
    pub fn remove_block(&mut self, pos: Position) -> bool {
        if !self.board.remove_block(pos) {
            return false;
        }
        self.invalidate_cache();
        true
    }

    /// Marks `kind` as used by `player` without placing it.
    pub fn mark_block_used(&mut self, player: Player, kind: BlockKind) -> bool {
        let inserted = self.board.mark_block_used(player, kind);
        self.invalidate_cache();
        inserted
    }

    #[must_use]
    pub fn available_blocks(&self, player: Player) -> Vec<BlockKind> {
        self.board.available_blocks(player)
    }

    /// Checks whether `player` has at least one legal placement left.
    ///
    /// The answer is cached until the next mutation of the board. A `false`
    /// answer also marks the player permanently blocked, which arms
    /// [`needs_blocked_notification`](Self::needs_blocked_notification).
    pub fn can_player_place_any_block(&mut self, player: Player) -> bool {
        if let Some(cached) = self.playability.get(player) {
            return cached;
        }

        let playable = find_legal_placement(&self.board, player).is_some();
        self.playability.insert(player, playable);

        if !playable && !self.board.record(player).is_permanently_blocked() {
            info!(%player, "player has no legal placement left");
            self.board.mark_permanently_blocked(player);
        }
        playable
    }

    /// Checks whether `player` can put `kind` anywhere on the board.
    ///
    /// Not cached; `false` for a kind the player has already used.
    #[must_use]
    pub fn can_place_kind_anywhere(&self, player: Player, kind: BlockKind) -> bool {
        legal_placements_of_kind(&self.board, player, kind)
            .next()
            .is_some()
    }

    /// Returns every legal placement for `player` in search order.
    #[must_use]
    pub fn legal_placements(&self, player: Player) -> Vec<Placement> {
        legal_placements(&self.board, player).collect()
    }

    /// Returns `true` exactly once after `player` was first found to have no
    /// legal placement, and `false` on every other call.
    pub fn needs_blocked_notification(&mut self, player: Player) -> bool {
        self.board.take_blocked_notification(player)
    }

    /// Checks whether no player can place any block.
    pub fn is_game_finished(&mut self) -> bool {
        Player::ALL
            .into_iter()
            .all(|player| !self.can_player_place_any_block(player))
    }

    #[must_use]
    pub fn calculate_scores(&self) -> BTreeMap<Player, u32> {
        calculate_scores(&self.board)
    }

    fn invalidate_cache(&mut self) {
        self.playability.invalidate();
        debug!("playability cache invalidated");
    }
}
