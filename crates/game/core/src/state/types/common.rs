use std::fmt;
use std::str::FromStr;

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.
    ///
    /// Movement, fire range, and sharing range are all measured with it.
    pub fn distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Parses algebraic cell notation (`"b3"` is `(1, 2)`), case-insensitive.
    pub fn from_algebraic(notation: &str) -> Result<Self, ParsePositionError> {
        let notation = notation.trim().to_ascii_lowercase();
        let mut chars = notation.chars();
        let column = chars
            .next()
            .ok_or_else(|| ParsePositionError::new(&notation))?;
        if !column.is_ascii_lowercase() {
            return Err(ParsePositionError::new(&notation));
        }

        let row: i32 = chars
            .as_str()
            .parse()
            .map_err(|_| ParsePositionError::new(&notation))?;

        let y = row
            .checked_sub(1)
            .ok_or_else(|| ParsePositionError::new(&notation))?;

        Ok(Self::new(column as i32 - 'a' as i32, y))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

/// Returned when a cell reference is not `<letter><number>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid algebraic cell notation: {notation:?}")]
pub struct ParsePositionError {
    pub notation: String,
}

impl ParsePositionError {
    fn new(notation: &str) -> Self {
        Self {
            notation: notation.to_owned(),
        }
    }
}

/// Roster index of a tank inside the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankId(pub u32);

impl fmt::Display for TankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tank#{}", self.0)
    }
}

/// Roster index of a wall inside the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallId(pub u32);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wall#{}", self.0)
    }
}

/// Kind of a board occupant, used to ignore whole categories in line-of-sight queries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    Tank,
    Wall,
}

/// Handle stored in a board cell. Resolves to an entry of the controller's rosters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Tank(TankId),
    Wall(WallId),
}

impl Occupant {
    pub const fn kind(self) -> EntityKind {
        match self {
            Occupant::Tank(_) => EntityKind::Tank,
            Occupant::Wall(_) => EntityKind::Wall,
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Tank(id) => id.fmt(f),
            Occupant::Wall(id) => id.fmt(f),
        }
    }
}
