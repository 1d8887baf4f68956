use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, or an offset relative to a placement anchor.
///
/// Coordinates are signed so that transformed shape offsets and off-board
/// anchors can be represented without wrapping. Whether a position actually
/// lies on a board is answered by [`Position::is_within`].
///
/// # Coordinate System
///
/// - (0, 0) is the top-left corner of the board
/// - `row` increases downward
/// - `col` increases rightward
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct Position {
    row: i16,
    col: i16,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    const DIAGONAL_DIRECTIONS: [Self; 4] = [
        Self::new(-1, -1),
        Self::new(-1, 1),
        Self::new(1, -1),
        Self::new(1, 1),
    ];
    const ORTHOGONAL_DIRECTIONS: [Self; 4] = [
        Self::new(-1, 0),
        Self::new(1, 0),
        Self::new(0, -1),
        Self::new(0, 1),
    ];

    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> i16 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i16 {
        self.col
    }

    /// Returns this position shifted by `offset`.
    ///
    /// Coordinates saturate at the `i16` range, so the result is always off
    /// any board when the sum would overflow.
    #[must_use]
    pub const fn offset_by(self, offset: Self) -> Self {
        Self::new(
            self.row.saturating_add(offset.row),
            self.col.saturating_add(offset.col),
        )
    }

    /// Checks if the position lies inside a `size`×`size` board.
    #[must_use]
    pub fn is_within(self, size: u8) -> bool {
        let size = i16::from(size);
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Returns the row-major index of this position on a `size`×`size` board,
    /// or `None` if it lies outside.
    #[must_use]
    pub fn index(self, size: u8) -> Option<usize> {
        if !self.is_within(size) {
            return None;
        }
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some(row * usize::from(size) + col)
    }

    /// The four cells touching this one only at a corner.
    ///
    /// Neighbours may lie outside the board; callers filter them.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Self> {
        Self::DIAGONAL_DIRECTIONS
            .into_iter()
            .map(move |d| self.offset_by(d))
    }

    /// The four cells sharing an edge with this one.
    ///
    /// Neighbours may lie outside the board; callers filter them.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Self> {
        Self::ORTHOGONAL_DIRECTIONS
            .into_iter()
            .map(move |d| self.offset_by(d))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
