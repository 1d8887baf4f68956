use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// One of the four seats at the board.
///
/// Players are numbered 1 to 4 in turn order. Each owns a fixed start corner
/// that its first placement must cover.
///
/// | Number | Player | Start corner (N×N board) |
/// |--------|--------|--------------------------|
/// | 1 | `Blue` | (0, 0) |
/// | 2 | `Yellow` | (0, N−1) |
/// | 3 | `Red` | (N−1, N−1) |
/// | 4 | `Green` | (N−1, 0) |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    derive_more::FromStr,
)]
#[repr(u8)]
pub enum Player {
    Blue = 1,
    Yellow = 2,
    Red = 3,
    Green = 4,
}

impl Player {
    /// Number of players (always 4).
    pub const LEN: usize = 4;

    pub const ALL: [Self; Self::LEN] = [Self::Blue, Self::Yellow, Self::Red, Self::Green];

    /// Returns the 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Blue),
            2 => Some(Self::Yellow),
            3 => Some(Self::Red),
            4 => Some(Self::Green),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the player whose turn follows this one in the fixed cyclic order.
    ///
    /// Blocked players are not skipped; that is up to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use blokus_engine::Player;
    ///
    /// assert_eq!(Player::Blue.next(), Player::Yellow);
    /// assert_eq!(Player::Green.next(), Player::Blue);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match Self::from_number(self.number() % 4 + 1) {
            Some(player) => player,
            None => unreachable!(),
        }
    }

    /// Returns the corner cell this player's first placement has to cover.
    #[must_use]
    pub fn start_corner(self, board_size: u8) -> Position {
        let last = i16::from(board_size) - 1;
        match self {
            Self::Blue => Position::new(0, 0),
            Self::Yellow => Position::new(0, last),
            Self::Red => Position::new(last, last),
            Self::Green => Position::new(last, 0),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Green => 'G',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Green => "Green",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_players() {
        let mut player = Player::Blue;
        let mut order = vec![];
        for _ in 0..5 {
            order.push(player);
            player = player.next();
        }
        assert_eq!(
            order,
            [
                Player::Blue,
                Player::Yellow,
                Player::Red,
                Player::Green,
                Player::Blue
            ]
        );
    }

    #[test]
    fn test_start_corners_standard_board() {
        assert_eq!(Player::Blue.start_corner(20), Position::new(0, 0));
        assert_eq!(Player::Yellow.start_corner(20), Position::new(0, 19));
        assert_eq!(Player::Red.start_corner(20), Position::new(19, 19));
        assert_eq!(Player::Green.start_corner(20), Position::new(19, 0));
    }

    #[test]
    fn test_number_and_char_conversion() {
        for player in Player::ALL {
            assert_eq!(Player::from_number(player.number()), Some(player));
            assert_eq!(Player::from_char(player.as_char()), Some(player));
            assert_eq!(player.name().parse::<Player>().ok(), Some(player));
        }
        assert_eq!(Player::from_number(0), None);
        assert_eq!(Player::from_number(5), None);
        assert_eq!(Player::from_char('X'), None);
    }
}
