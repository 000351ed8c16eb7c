//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! Ponds use the "odd-r" offset layout: cells are stored in ordinary
//! rectangular rows, and every odd row sits half a cell to the right of the
//! even rows around it. [`Point::hex_neighbor`] hides the row-parity
//! arithmetic so that callers only ever deal in directions.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Returned when a neighbor is requested with a direction index outside
/// `0..Direction::COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid neighbor direction {0}: expected an index in 0..=5")]
pub struct InvalidDirection(pub usize);

/// One of the six hex directions, numbered clockwise from east.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
}

impl Direction {
    /// Number of directions around a hex cell.
    pub const COUNT: usize = 6;

    /// All directions in index order.
    pub const ALL: [Direction; Self::COUNT] = [
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
    ];

    /// The direction index, in `0..6`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The next direction clockwise (`index + 1 mod 6`).
    #[inline]
    pub const fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The next direction counter-clockwise (`index - 1 mod 6`).
    #[inline]
    pub const fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::COUNT]
    }
}

impl TryFrom<usize> for Direction {
    type Error = InvalidDirection;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(InvalidDirection(index))
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell position in offset coordinates. X grows right (column), Y grows
/// down (row).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in direction `dir`.
    ///
    /// The result may lie outside any particular grid; bounds are the map's
    /// concern.
    #[inline]
    pub const fn hex_neighbor(self, dir: Direction) -> Self {
        let odd = self.y & 1 != 0;
        let (dx, dy) = match (dir, odd) {
            (Direction::East, _) => (1, 0),
            (Direction::West, _) => (-1, 0),
            (Direction::SouthEast, false) => (0, 1),
            (Direction::SouthEast, true) => (1, 1),
            (Direction::SouthWest, false) => (-1, 1),
            (Direction::SouthWest, true) => (0, 1),
            (Direction::NorthWest, false) => (-1, -1),
            (Direction::NorthWest, true) => (0, -1),
            (Direction::NorthEast, false) => (0, -1),
            (Direction::NorthEast, true) => (1, -1),
        };
        self.shift(dx, dy)
    }

    /// All six neighbours, in direction order.
    #[inline]
    pub fn hex_neighbors(self) -> [Point; Direction::COUNT] {
        Direction::ALL.map(|dir| self.hex_neighbor(dir))
    }

    /// Axial `(q, r)` coordinates of this cell.
    #[inline]
    pub const fn axial(self) -> (i32, i32) {
        (self.x - (self.y - (self.y & 1)) / 2, self.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
