//! Grid geometry: cell positions and the four movement headings.
//!
//! The grid is toroidal — stepping off one edge wraps to the opposite edge.
//! `Position` itself is wrap-agnostic (a plain integer pair); wrapping is the
//! grid's job, since only the grid knows its own dimensions.

use std::fmt;

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate.  Valid cells satisfy `0 <= x < width` and
/// `0 <= y < height`; values outside that range appear only transiently,
/// before the grid wraps them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell ahead in `direction`, unwrapped.
    #[inline]
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A vehicle heading.  North is `+y`, matching the renderer's convention.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four headings, in a fixed order suitable for uniform sampling.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit cell offset of this heading.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(letter)
    }
}
