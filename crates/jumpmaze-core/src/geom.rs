//! Geometry primitives: [`Pos`] and [`Dir`].
//!
//! Positions are `(row, col)` pairs. Rows grow downward, columns grow to the
//! right, matching how a maze file is laid out line by line.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid cell position.
///
/// Ordering is row-major (row first, then column), which gives ordered sets
/// of positions a reading-order iteration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol), saturating on overflow.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row.saturating_add(drow),
            col: self.col.saturating_add(dcol),
        }
    }

    /// The position reached by jumping `dist` cells in direction `dir`.
    ///
    /// Saturates instead of overflowing, so huge distances land outside any
    /// realistic grid rather than wrapping back into it.
    #[inline]
    pub fn jump(self, dir: Dir, dist: u32) -> Self {
        let d = i32::try_from(dist).unwrap_or(i32::MAX);
        match dir {
            Dir::Up => self.shift(d.saturating_neg(), 0),
            Dir::Down => self.shift(d, 0),
            Dir::Left => self.shift(0, d.saturating_neg()),
            Dir::Right => self.shift(0, d),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four jump directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// All directions in neighbor order: up, down, left, right.
    ///
    /// Both search strategies break ties by this order.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
}
