use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{InvalidBoardError, InvalidBoardSizeError};

use super::{
    block::{BlockKind, BlockSet},
    config::GameConfig,
    placement::Placement,
    player::Player,
    position::Position,
    validator::can_place,
};

/// Per-player bookkeeping kept alongside the cell grid.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerRecord {
    used_blocks: BlockSet,
    occupied_cells: Vec<Position>,
    has_placed_first_block: bool,
    permanently_blocked: bool,
    blocked_notified: bool,
}

impl PlayerRecord {
    #[must_use]
    pub fn used_blocks(&self) -> BlockSet {
        self.used_blocks
    }

    /// Cells this player has covered, in placement order.
    ///
    /// Cells cleared by [`Board::remove_block`] stay listed here.
    #[must_use]
    pub fn occupied_cells(&self) -> &[Position] {
        &self.occupied_cells
    }

    #[must_use]
    pub fn has_placed_first_block(&self) -> bool {
        self.has_placed_first_block
    }

    /// Whether a playability search has ever found no legal move for this player.
    #[must_use]
    pub fn is_permanently_blocked(&self) -> bool {
        self.permanently_blocked
    }
}

/// Cell-ownership grid plus per-player progress.
///
/// `Board` is the single source of truth for a game: which player owns each
/// cell, which blocks each player has used, and whether each player has made
/// the first move. It is mutated only through [`Board::apply_placement`],
/// [`Board::mark_block_used`] and [`Board::remove_block`].
///
/// Cache invalidation is not the board's concern; use
/// [`GameField`](crate::GameField) for a board paired with its playability
/// cache.
///
/// # Layout
///
/// Cells are stored row-major, `size * size` entries, each `None` or the
/// owning player.
///
/// # Example
///
/// ```
/// use blokus_engine::{BlockKind, Board, Placement, Player, Position};
///
/// let mut board = Board::standard();
/// let placement = Placement::new(Player::Blue, BlockKind::Single, Position::new(0, 0));
///
/// assert!(board.apply_placement(&placement));
/// assert_eq!(board.cell_owner(Position::new(0, 0)), Some(Player::Blue));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: u8,
    cells: Vec<Option<Player>>,
    records: [PlayerRecord; Player::LEN],
}

#[derive(Deserialize)]
struct RawBoard {
    size: u8,
    cells: Vec<Option<Player>>,
    records: [PlayerRecord; Player::LEN],
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        GameConfig::with_board_size(raw.size)
            .validate()
            .map_err(InvalidBoardError::Size)?;
        let expected = usize::from(raw.size) * usize::from(raw.size);
        if raw.cells.len() != expected {
            return Err(InvalidBoardError::CellCount {
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
            records: raw.records,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Creates an empty board with the configured size.
    pub fn new(config: &GameConfig) -> Result<Self, InvalidBoardSizeError> {
        config.validate()?;
        Ok(Self::empty(config.board_size))
    }

    /// Creates an empty 20×20 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty(GameConfig::STANDARD_BOARD_SIZE)
    }

    fn empty(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; usize::from(size) * usize::from(size)],
            records: Default::default(),
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the owner of the cell at `pos`, or `None` if the cell is empty
    /// or off the board.
    #[must_use]
    pub fn cell_owner(&self, pos: Position) -> Option<Player> {
        pos.index(self.size).and_then(|i| self.cells[i])
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cell_owner(pos).is_some()
    }

    /// Returns an iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.cells.chunks(usize::from(self.size))
    }

    #[must_use]
    pub fn record(&self, player: Player) -> &PlayerRecord {
        &self.records[player.index()]
    }

    #[must_use]
    pub fn used_blocks(&self, player: Player) -> BlockSet {
        self.record(player).used_blocks
    }

    #[must_use]
    pub fn is_block_used(&self, player: Player, kind: BlockKind) -> bool {
        self.used_blocks(player).contains(kind)
    }

    /// Returns the kinds `player` has not used yet, in catalog order.
    #[must_use]
    pub fn available_blocks(&self, player: Player) -> Vec<BlockKind> {
        self.used_blocks(player).complement().iter().collect()
    }

    #[must_use]
    pub fn has_placed_first_block(&self, player: Player) -> bool {
        self.record(player).has_placed_first_block
    }

    #[must_use]
    pub fn occupied_cells(&self, player: Player) -> &[Position] {
        &self.record(player).occupied_cells
    }

    /// Number of cells `player` has covered so far.
    #[must_use]
    pub fn placed_cell_count(&self, player: Player) -> usize {
        self.record(player).occupied_cells.len()
    }

    /// Checks whether `placement` is legal on this board.
    #[must_use]
    pub fn can_place(&self, placement: &Placement) -> bool {
        can_place(self, placement)
    }

    /// Validates and applies `placement`.
    ///
    /// On success every covered cell is assigned to the player, the cells are
    /// appended to the player's occupied list, the block kind is marked used and
    /// the first-move flag is set. Returns `false` without touching the board if
    /// the placement is illegal.
    pub fn apply_placement(&mut self, placement: &Placement) -> bool {
        if !self.can_place(placement) {
            return false;
        }

        let player = placement.player();
        let cells = placement.cells();
        for &pos in &cells {
            if let Some(i) = pos.index(self.size) {
                self.cells[i] = Some(player);
            }
        }

        let record = &mut self.records[player.index()];
        record.occupied_cells.extend_from_slice(&cells);
        record.used_blocks.insert(placement.kind());
        record.has_placed_first_block = true;

        debug!(%placement, "block placed");
        true
    }

    /// Marks `kind` as used by `player` without putting it on the board.
    ///
    /// Returns `true` if the kind was not already used.
    pub fn mark_block_used(&mut self, player: Player, kind: BlockKind) -> bool {
        self.records[player.index()].used_blocks.insert(kind)
    }

    /// Clears the single cell at `pos`.
    ///
    /// Only that one cell is emptied: the rest of the block it belonged to, the
    /// owner's used-kind set and occupied-cell list are left unchanged, so this
    /// is not a full undo of a placement. Returns `false` if the cell is off the
    /// board or already empty.
    // TODO: undo a whole placement once placements are recorded with their cells.
    pub fn remove_block(&mut self, pos: Position) -> bool {
        let Some(i) = pos.index(self.size) else {
            return false;
        };
        let Some(owner) = self.cells[i].take() else {
            return false;
        };
        debug!(%pos, %owner, "cell cleared");
        true
    }

    pub(crate) fn mark_permanently_blocked(&mut self, player: Player) {
        self.records[player.index()].permanently_blocked = true;
    }

    /// Returns `true` the first time it is called after `player` became
    /// permanently blocked, `false` otherwise.
    pub(crate) fn take_blocked_notification(&mut self, player: Player) -> bool {
        let record = &mut self.records[player.index()];
        if record.permanently_blocked && !record.blocked_notified {
            record.blocked_notified = true;
            return true;
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = cell.map_or('.', Player::as_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
