use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Maximum number of cells in any block (pentominoes).
pub const MAX_BLOCK_SIZE: usize = 5;

/// Cells covered by a single block, either relative offsets or absolute positions.
pub type BlockCells = ArrayVec<Position, MAX_BLOCK_SIZE>;

/// Rotation state of a block.
///
/// Represents one of four clockwise quarter-turn counts:
///
/// - `0`: 0° (catalog orientation)
/// - `1`: 90°
/// - `2`: 180°
/// - `3`: 270°
///
/// Rotation operations wrap around modulo 4.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    pub const DEG_0: Self = Self(0);
    pub const DEG_90: Self = Self(1);
    pub const DEG_180: Self = Self(2);
    pub const DEG_270: Self = Self(3);

    pub const ALL: [Self; 4] = [Self::DEG_0, Self::DEG_90, Self::DEG_180, Self::DEG_270];

    /// Creates a rotation from a quarter-turn count in `0..4`.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Option<Self> {
        if quarter_turns < 4 {
            Some(Self(quarter_turns))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self((self.0 + 3) % 4)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("rotation must be 0-3, got {value}"))
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

/// A rotation combined with an optional reflection.
///
/// The eight orientations form the full symmetry group of the square, so every
/// distinct pose of every block is reachable.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct Orientation {
    pub rotation: Rotation,
    pub reflected: bool,
}

impl Orientation {
    /// All orientations in search order: rotation-major, unreflected first.
    pub const ALL: [Self; 8] = {
        let mut all = [Self::new(Rotation::DEG_0, false); 8];
        let mut i = 0;
        while i < 8 {
            #[expect(clippy::cast_possible_truncation)]
            let rotation = Rotation((i / 2) as u8);
            all[i] = Self::new(rotation, i % 2 == 1);
            i += 1;
        }
        all
    };

    #[must_use]
    pub const fn new(rotation: Rotation, reflected: bool) -> Self {
        Self {
            rotation,
            reflected,
        }
    }

    /// Transforms a catalog offset into this orientation.
    ///
    /// The reflection `(r, c) → (−r, c)` is applied first, then the rotation
    /// `(r, c) → (c, −r)` once per quarter turn. The result is **not**
    /// renormalized, so negative offsets are kept as-is and the anchor stays on
    /// the catalog `(0, 0)` cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use blokus_engine::{Orientation, Position, Rotation};
    ///
    /// let orientation = Orientation::new(Rotation::DEG_90, false);
    /// assert_eq!(orientation.transform(Position::new(0, 1)), Position::new(1, 0));
    ///
    /// let mirrored = Orientation::new(Rotation::DEG_0, true);
    /// assert_eq!(mirrored.transform(Position::new(1, 1)), Position::new(-1, 1));
    /// ```
    #[must_use]
    pub const fn transform(self, offset: Position) -> Position {
        let mut pos = if self.reflected {
            reflect(offset)
        } else {
            offset
        };
        let mut i = 0;
        while i < self.rotation.quarter_turns() {
            pos = rotate(pos);
            i += 1;
        }
        pos
    }
}

/// Rotates an offset a quarter turn: `(r, c) → (c, −r)`.
#[must_use]
pub const fn rotate(offset: Position) -> Position {
    Position::new(offset.col(), -offset.row())
}

/// Mirrors an offset across the column axis: `(r, c) → (−r, c)`.
#[must_use]
pub const fn reflect(offset: Position) -> Position {
    Position::new(-offset.row(), offset.col())
}

/// The 21 block shapes every player owns one of.
///
/// Discriminants are the 1-based catalog numbers, and declaration order is the
/// canonical iteration order used by every search in the engine.
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
pub enum BlockKind {
    /// 1 cell.
    Single = 1,
    /// 2 cells in a line.
    Domino = 2,
    /// 3 cells in a line.
    TrioLine = 3,
    /// 3 cells with a bend.
    TrioAngle = 4,
    TetroI = 5,
    TetroO = 6,
    TetroT = 7,
    TetroL = 8,
    TetroS = 9,
    PentoF = 10,
    PentoI = 11,
    PentoL = 12,
    PentoN = 13,
    PentoP = 14,
    PentoT = 15,
    PentoU = 16,
    PentoV = 17,
    PentoW = 18,
    PentoX = 19,
    PentoY = 20,
    PentoZ = 21,
}

impl BlockKind {
    /// Number of block kinds (21).
    pub const LEN: usize = 21;

    pub const ALL: [Self; Self::LEN] = [
        Self::Single,
        Self::Domino,
        Self::TrioLine,
        Self::TrioAngle,
        Self::TetroI,
        Self::TetroO,
        Self::TetroT,
        Self::TetroL,
        Self::TetroS,
        Self::PentoF,
        Self::PentoI,
        Self::PentoL,
        Self::PentoN,
        Self::PentoP,
        Self::PentoT,
        Self::PentoU,
        Self::PentoV,
        Self::PentoW,
        Self::PentoX,
        Self::PentoY,
        Self::PentoZ,
    ];

    /// Returns the 1-based catalog number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= Self::LEN {
            Some(Self::ALL[number as usize - 1])
        } else {
            None
        }
    }

    const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the catalog offsets of this block in its 0° unreflected pose.
    #[must_use]
    pub const fn offsets(self) -> &'static [Position] {
        BLOCK_SHAPES[self.index()]
    }

    /// Number of cells covered by this block.
    #[must_use]
    pub const fn size(self) -> usize {
        self.offsets().len()
    }

    /// Points awarded for having placed this block.
    ///
    /// Equals the cell count: 1 for the single, up to 5 for each pentomino.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Domino => 2,
            Self::TrioLine | Self::TrioAngle => 3,
            Self::TetroI | Self::TetroO | Self::TetroT | Self::TetroL | Self::TetroS => 4,
            _ => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Domino => "Domino",
            Self::TrioLine => "TrioLine",
            Self::TrioAngle => "TrioAngle",
            Self::TetroI => "TetroI",
            Self::TetroO => "TetroO",
            Self::TetroT => "TetroT",
            Self::TetroL => "TetroL",
            Self::TetroS => "TetroS",
            Self::PentoF => "PentoF",
            Self::PentoI => "PentoI",
            Self::PentoL => "PentoL",
            Self::PentoN => "PentoN",
            Self::PentoP => "PentoP",
            Self::PentoT => "PentoT",
            Self::PentoU => "PentoU",
            Self::PentoV => "PentoV",
            Self::PentoW => "PentoW",
            Self::PentoX => "PentoX",
            Self::PentoY => "PentoY",
            Self::PentoZ => "PentoZ",
        }
    }

    /// Returns the kinds with exactly `size` cells, in catalog order.
    ///
    /// # Examples
    ///
    /// ```
    /// use blokus_engine::BlockKind;
    ///
    /// assert_eq!(BlockKind::by_size(3).count(), 2);
    /// assert_eq!(BlockKind::by_size(4).count(), 5);
    /// assert_eq!(BlockKind::by_size(5).count(), 12);
    /// ```
    pub fn by_size(size: usize) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |kind| kind.size() == size)
    }

    /// Returns the offsets of this block in the given orientation, relative to
    /// the anchor.
    #[must_use]
    pub fn shape(self, orientation: Orientation) -> BlockCells {
        self.offsets()
            .iter()
            .map(|&offset| orientation.transform(offset))
            .collect()
    }

    /// Returns the absolute cells covered when this block is anchored at `anchor`.
    ///
    /// Cells may lie outside the board; legality is checked elsewhere.
    #[must_use]
    pub fn cells(self, orientation: Orientation, anchor: Position) -> BlockCells {
        self.offsets()
            .iter()
            .map(|&offset| anchor.offset_by(orientation.transform(offset)))
            .collect()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const BLOCK_SHAPES: [&[Position]; BlockKind::LEN] = {
    const fn p(row: i16, col: i16) -> Position {
        Position::new(row, col)
    }

    [
        // Single
        &[p(0, 0)],
        // Domino
        &[p(0, 0), p(0, 1)],
        // TrioLine
        &[p(0, 0), p(0, 1), p(0, 2)],
        // TrioAngle
        &[p(0, 0), p(0, 1), p(1, 1)],
        // TetroI
        &[p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
        // TetroO
        &[p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
        // TetroT
        &[p(0, 0), p(0, 1), p(0, 2), p(1, 1)],
        // TetroL
        &[p(0, 0), p(0, 1), p(0, 2), p(1, 0)],
        // TetroS
        &[p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
        // PentoF
        &[p(0, 1), p(0, 2), p(1, 0), p(1, 1), p(2, 1)],
        // PentoI
        &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4)],
        // PentoL
        &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 0)],
        // PentoN
        &[p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(1, 3)],
        // PentoP
        &[p(0, 0), p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
        // PentoT
        &[p(0, 0), p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
        // PentoU
        &[p(0, 0), p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
        // PentoV
        &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)],
        // PentoW
        &[p(0, 0), p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
        // PentoX
        &[p(0, 1), p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
        // PentoY
        &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(1, 1)],
        // PentoZ
        &[p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    ]
};

// Catalog sanity: a malformed entry is a build failure, not a runtime condition.
const _: () = {
    let mut i = 0;
    while i < BlockKind::LEN {
        let shape = BLOCK_SHAPES[i];
        assert!(!shape.is_empty() && shape.len() <= MAX_BLOCK_SIZE);
        assert!(BlockKind::ALL[i] as usize == i + 1);
        let mut a = 0;
        while a < shape.len() {
            let mut b = a + 1;
            while b < shape.len() {
                assert!(
                    shape[a].row() != shape[b].row() || shape[a].col() != shape[b].col(),
                    "duplicate cell in block shape"
                );
                b += 1;
            }
            a += 1;
        }
        i += 1;
    }
};

/// A set of block kinds, stored as a bitmask indexed by catalog number.
///
/// Iteration follows catalog order. Serialized as the raw mask; masks with
/// bits outside the catalog are rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BlockSet {
    bits: u32,
}

impl BlockSet {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const FULL: Self = Self {
        bits: ((1 << BlockKind::LEN) - 1) << 1,
    };

    #[must_use]
    pub const fn contains(self, kind: BlockKind) -> bool {
        self.bits & (1 << kind.number()) != 0
    }

    /// Adds `kind` and returns `true` if it was not already present.
    pub const fn insert(&mut self, kind: BlockKind) -> bool {
        let present = self.contains(kind);
        self.bits |= 1 << kind.number();
        !present
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[must_use]
    pub const fn is_full(self) -> bool {
        self.bits == Self::FULL.bits
    }

    /// Returns the kinds not in this set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self {
            bits: Self::FULL.bits & !self.bits,
        }
    }

    pub fn iter(self) -> impl Iterator<Item = BlockKind> {
        BlockKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

impl TryFrom<u32> for BlockSet {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        if bits & !Self::FULL.bits != 0 {
            return Err(format!("block set {bits:#x} has bits outside the catalog"));
        }
        Ok(Self { bits })
    }
}

impl From<BlockSet> for u32 {
    fn from(set: BlockSet) -> Self {
        set.bits
    }
}

impl FromIterator<BlockKind> for BlockSet {
    fn from_iter<T: IntoIterator<Item = BlockKind>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}
