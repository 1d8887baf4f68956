use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParsePlacementError;

use super::{
    block::{BlockCells, BlockKind, Orientation, Rotation},
    player::Player,
    position::Position,
};

/// A request to put one block of one player on the board.
///
/// Placements are plain values. Building one never checks legality; use
/// [`can_place`](crate::can_place) or [`GameField::can_place_block`](crate::GameField::can_place_block).
///
/// # Example
///
/// ```
/// use blokus_engine::{BlockKind, Placement, Player, Position, Rotation};
///
/// let placement = Placement::new(Player::Blue, BlockKind::PentoF, Position::new(3, 4))
///     .with_rotation(Rotation::DEG_90)
///     .with_reflection(true);
/// assert_eq!(placement.cells().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    player: Player,
    kind: BlockKind,
    anchor: Position,
    orientation: Orientation,
}

impl Placement {
    /// Creates an unrotated, unreflected placement.
    #[must_use]
    pub const fn new(player: Player, kind: BlockKind, anchor: Position) -> Self {
        Self {
            player,
            kind,
            anchor,
            orientation: Orientation::new(Rotation::DEG_0, false),
        }
    }

    #[must_use]
    pub const fn with_rotation(self, rotation: Rotation) -> Self {
        Self {
            orientation: Orientation::new(rotation, self.orientation.reflected),
            ..self
        }
    }

    #[must_use]
    pub const fn with_reflection(self, reflected: bool) -> Self {
        Self {
            orientation: Orientation::new(self.orientation.rotation, reflected),
            ..self
        }
    }

    #[must_use]
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.orientation.rotation
    }

    #[must_use]
    pub const fn is_reflected(&self) -> bool {
        self.orientation.reflected
    }

    /// Returns the absolute board cells this placement would cover.
    #[must_use]
    pub fn cells(&self) -> BlockCells {
        self.kind.cells(self.orientation, self.anchor)
    }
}

// Text form: "player:kind#rotation[m]@row,col" (e.g., "B:PentoF#1m@3,-2").
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}#{}{}@{},{}",
            self.player.as_char(),
            self.kind.name(),
            self.rotation().quarter_turns(),
            if self.is_reflected() { "m" } else { "" },
            self.anchor.row(),
            self.anchor.col(),
        )
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (player_str, rest) = s
            .split_once(':')
            .ok_or(ParsePlacementError::MissingSeparator(':'))?;
        let (kind_str, rest) = rest
            .split_once('#')
            .ok_or(ParsePlacementError::MissingSeparator('#'))?;
        let (orientation_str, position_str) = rest
            .split_once('@')
            .ok_or(ParsePlacementError::MissingSeparator('@'))?;
        let (row_str, col_str) = position_str
            .split_once(',')
            .ok_or(ParsePlacementError::MissingSeparator(','))?;

        let mut chars = player_str.chars();
        let player = match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ParsePlacementError::InvalidPlayer(player_str.to_owned()))?;

        let kind = kind_str
            .parse::<BlockKind>()
            .map_err(|_| ParsePlacementError::InvalidKind(kind_str.to_owned()))?;

        let (rotation_str, reflected) = match orientation_str.strip_suffix('m') {
            Some(rotation_str) => (rotation_str, true),
            None => (orientation_str, false),
        };
        let rotation = rotation_str
            .parse::<u8>()
            .ok()
            .and_then(Rotation::new)
            .ok_or_else(|| ParsePlacementError::InvalidRotation(orientation_str.to_owned()))?;

        let row = row_str
            .parse::<i16>()
            .map_err(|_| ParsePlacementError::InvalidCoordinate(row_str.to_owned()))?;
        let col = col_str
            .parse::<i16>()
            .map_err(|_| ParsePlacementError::InvalidCoordinate(col_str.to_owned()))?;

        Ok(Self::new(player, kind, Position::new(row, col))
            .with_rotation(rotation)
            .with_reflection(reflected))
    }
}

impl Serialize for Placement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid placement '{s}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_other_fields() {
        let placement = Placement::new(Player::Red, BlockKind::TetroL, Position::new(7, 8))
            .with_rotation(Rotation::DEG_270)
            .with_reflection(true)
            .with_rotation(Rotation::DEG_90);

        assert_eq!(placement.player(), Player::Red);
        assert_eq!(placement.kind(), BlockKind::TetroL);
        assert_eq!(placement.anchor(), Position::new(7, 8));
        assert_eq!(placement.rotation(), Rotation::DEG_90);
        assert!(placement.is_reflected());
    }

    #[test]
    fn test_cells_include_anchor() {
        // Every catalog shape has (0, 0) except F and X, whose anchor cell is empty.
        for kind in BlockKind::ALL {
            let placement = Placement::new(Player::Blue, kind, Position::new(10, 10));
            let has_anchor = placement.cells().contains(&Position::new(10, 10));
            let expected = !matches!(kind, BlockKind::PentoF | BlockKind::PentoX);
            assert_eq!(has_anchor, expected, "{kind}");
        }
    }

    #[test]
    fn test_cells_at_extreme_anchor_stay_off_board() {
        let placement: Placement = "B:PentoI#0@32767,32767".parse().unwrap();
        let cells = placement.cells();
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|pos| !pos.is_within(32)));
    }

    #[test]
    fn test_placement_serialization() {
        let placement = Placement::new(Player::Blue, BlockKind::PentoF, Position::new(3, -2))
            .with_rotation(Rotation::DEG_90)
            .with_reflection(true);

        let serialized = serde_json::to_string(&placement).unwrap();
        assert_eq!(serialized, "\"B:PentoF#1m@3,-2\"");

        let deserialized: Placement = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, placement);

        let plain = Placement::new(Player::Green, BlockKind::Single, Position::new(19, 0));
        assert_eq!(plain.to_string(), "G:Single#0@19,0");
    }

    #[test]
    fn test_placement_parse_error_cases() {
        assert!(matches!(
            "BSingle#0@0,0".parse::<Placement>(),
            Err(ParsePlacementError::MissingSeparator(':'))
        ));
        assert!(matches!(
            "B:Single0@0,0".parse::<Placement>(),
            Err(ParsePlacementError::MissingSeparator('#'))
        ));
        assert!(matches!(
            "B:Single#0@0".parse::<Placement>(),
            Err(ParsePlacementError::MissingSeparator(','))
        ));
        assert!(matches!(
            "X:Single#0@0,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidPlayer(_))
        ));
        assert!(matches!(
            "BY:Single#0@0,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidPlayer(_))
        ));
        assert!(matches!(
            "B:Hexomino#0@0,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidKind(_))
        ));
        assert!(matches!(
            "B:Single#4@0,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidRotation(_))
        ));
        assert!(matches!(
            "B:Single#1x@0,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidRotation(_))
        ));
        assert!(matches!(
            "B:Single#0@a,0".parse::<Placement>(),
            Err(ParsePlacementError::InvalidCoordinate(_))
        ));
        assert!(serde_json::from_str::<Placement>("\"B:Single#0@0,zz\"").is_err());
    }
}
