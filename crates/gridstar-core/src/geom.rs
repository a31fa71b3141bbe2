//! Cell coordinates.

use std::fmt;

/// A cell on the grid. `x` counts columns from the left, `y` counts rows
/// from the top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ZERO: Self = Self::new(0, 0);

    /// Unit offsets in expansion order: west, east, north, south.
    pub const CARDINALS: [Position; 4] = [
        Self::new(-1, 0),
        Self::new(1, 0),
        Self::new(0, -1),
        Self::new(0, 1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cells sharing an edge with `self`, ordered as
    /// [`CARDINALS`](Position::CARDINALS). Some may lie off the grid.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Self::CARDINALS.map(|d| Self::new(self.x + d.x, self.y + d.y))
    }

    /// Whether `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
