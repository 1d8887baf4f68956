use crate::core::{
    block::{BlockKind, Orientation},
    board::Board,
    placement::Placement,
    player::Player,
    position::Position,
    validator::can_place,
};

/// Memoized answers to "can this player still place anything?".
///
/// Entries are kept per player and dropped all at once by [`invalidate`],
/// which the owner calls after every board mutation, whichever player or
/// region it touched.
///
/// [`invalidate`]: PlayabilityCache::invalidate
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayabilityCache {
    entries: [Option<bool>; Player::LEN],
}

impl PlayabilityCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; Player::LEN],
        }
    }

    #[must_use]
    pub fn get(&self, player: Player) -> Option<bool> {
        self.entries[player.index()]
    }

    pub fn insert(&mut self, player: Player, can_place_any: bool) {
        self.entries[player.index()] = Some(can_place_any);
    }

    /// Forgets the cached result of every player.
    pub fn invalidate(&mut self) {
        self.entries = [None; Player::LEN];
    }
}

/// Returns every legal placement for `player`, lazily.
///
/// Candidates are visited in a fixed order: available block kinds in catalog
/// order, then anchors row by row, then [`Orientation::ALL`]. Identical
/// boards therefore yield identical sequences.
///
/// The search is brute force, bounded by 21 × N² × 8 validator calls.
pub fn legal_placements(board: &Board, player: Player) -> impl Iterator<Item = Placement> + '_ {
    board
        .available_blocks(player)
        .into_iter()
        .flat_map(move |kind| legal_placements_of_kind(board, player, kind))
}

/// Returns every legal placement of one block kind for `player`, lazily.
///
/// Yields nothing once `kind` is used. Order is anchors row by row, then
/// [`Orientation::ALL`].
pub fn legal_placements_of_kind(
    board: &Board,
    player: Player,
    kind: BlockKind,
) -> impl Iterator<Item = Placement> + '_ {
    let size = i16::from(board.size());
    (0..size)
        .flat_map(move |row| {
            (0..size).flat_map(move |col| {
                Orientation::ALL.into_iter().map(move |orientation| {
                    Placement::new(player, kind, Position::new(row, col))
                        .with_orientation(orientation)
                })
            })
        })
        .filter(move |placement| can_place(board, placement))
}

/// Returns the first legal placement for `player` in search order, if any.
#[must_use]
pub fn find_legal_placement(board: &Board, player: Player) -> Option<Placement> {
    legal_placements(board, player).next()
}
