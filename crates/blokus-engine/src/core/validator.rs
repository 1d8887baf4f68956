//! Pure placement legality check.
//!
//! [`can_place`] is the one rule every implementation has to agree on. It reads
//! the board and the placement and nothing else, so identical inputs always
//! give the identical answer.

use super::{block::BlockCells, board::Board, placement::Placement, player::Player};

/// Decides whether `placement` is legal on `board`.
///
/// Checks, in order:
///
/// 1. the anchor and every covered cell lie on the board;
/// 2. the player has not used this block kind yet;
/// 3. no covered cell is already owned;
/// 4. a player's first block covers that player's start corner;
/// 5. any later block touches one of the player's cells diagonally and none of
///    them along an edge.
#[must_use]
pub fn can_place(board: &Board, placement: &Placement) -> bool {
    let size = board.size();
    let player = placement.player();

    if !placement.anchor().is_within(size) {
        return false;
    }
    let cells = placement.cells();
    if !cells.iter().all(|pos| pos.is_within(size)) {
        return false;
    }

    if board.is_block_used(player, placement.kind()) {
        return false;
    }

    if cells.iter().any(|&pos| board.is_occupied(pos)) {
        return false;
    }

    if !board.has_placed_first_block(player) {
        return cells.contains(&player.start_corner(size));
    }

    touches_own_corner(board, player, &cells) && !touches_own_edge(board, player, &cells)
}

fn touches_own_corner(board: &Board, player: Player, cells: &BlockCells) -> bool {
    cells
        .iter()
        .flat_map(|pos| pos.diagonal_neighbors())
        .any(|pos| board.cell_owner(pos) == Some(player))
}

fn touches_own_edge(board: &Board, player: Player, cells: &BlockCells) -> bool {
    cells
        .iter()
        .flat_map(|pos| pos.orthogonal_neighbors())
        .any(|pos| board.cell_owner(pos) == Some(player))
}
