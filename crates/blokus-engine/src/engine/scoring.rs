use std::collections::BTreeMap;

use crate::core::{
    block::{BlockKind, BlockSet},
    board::Board,
    player::Player,
};

/// Bonus for placing all 21 blocks.
pub const ALL_BLOCKS_BONUS: u32 = 15;

/// Extra bonus on top of [`ALL_BLOCKS_BONUS`] when the single is among the
/// used blocks.
///
/// A player who used all 21 blocks has always used the single, so this bonus
/// is only ever awarded together with the first one.
pub const SINGLE_BLOCK_BONUS: u32 = 5;

/// Computes one player's score from the set of blocks they have used.
///
/// # Scoring
///
/// - Every used block scores its cell count (1 to 5 points)
/// - +15 when all 21 blocks are used
/// - A further +5 when, in addition, the single is among them
///
/// # Example
///
/// ```
/// use blokus_engine::{BlockKind, BlockSet, player_score};
///
/// let used: BlockSet = [BlockKind::Single, BlockKind::PentoX].into_iter().collect();
/// assert_eq!(player_score(used), 6);
///
/// let all: BlockSet = BlockKind::ALL.into_iter().collect();
/// assert_eq!(player_score(all), 89 + 15 + 5);
/// ```
#[must_use]
pub fn player_score(used: BlockSet) -> u32 {
    let mut score: u32 = used.iter().map(BlockKind::points).sum();
    if used.is_full() {
        score += ALL_BLOCKS_BONUS;
        if used.contains(BlockKind::Single) {
            score += SINGLE_BLOCK_BONUS;
        }
    }
    score
}

/// Computes the score of every player on `board`.
#[must_use]
pub fn calculate_scores(board: &Board) -> BTreeMap<Player, u32> {
    Player::ALL
        .into_iter()
        .map(|player| (player, player_score(board.used_blocks(player))))
        .collect()
}
