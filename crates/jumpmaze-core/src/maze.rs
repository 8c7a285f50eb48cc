//! The immutable jumping maze and its movement rule.

use std::fmt;

use crate::geom::{Dir, Pos};

/// A validated jumping maze.
///
/// Every cell holds a jump distance. From a cell with distance `d > 0` the
/// four candidate moves are `d` cells up, down, left and right; candidates
/// outside the grid are dropped. A cell with distance `0` is a dead end.
///
/// A `Maze` can only be obtained through [`Maze::new`], so every instance
/// satisfies its invariants: positive dimensions, exactly `rows × cols`
/// cells, and in-bounds start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MazeRepr", into = "MazeRepr")
)]
pub struct Maze {
    rows: i32,
    cols: i32,
    start: Pos,
    goal: Pos,
    cells: Vec<u32>,
}

impl Maze {
    /// Build a maze from its declared dimensions, endpoints and grid rows.
    pub fn new(
        rows: i32,
        cols: i32,
        start: Pos,
        goal: Pos,
        grid: Vec<Vec<u32>>,
    ) -> Result<Self, MazeError> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::EmptyDimension { rows, cols });
        }
        if grid.len() != rows as usize {
            return Err(MazeError::RowCount {
                expected: rows as usize,
                found: grid.len(),
            });
        }
        if let Some((r, line)) = grid
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != cols as usize)
        {
            return Err(MazeError::RowLength {
                row: r,
                expected: cols as usize,
                found: line.len(),
            });
        }
        let cells: Vec<u32> = grid.into_iter().flatten().collect();
        let maze = Self {
            rows,
            cols,
            start,
            goal,
            cells,
        };
        if !maze.is_valid(start) {
            return Err(MazeError::StartOutOfBounds(start));
        }
        if !maze.is_valid(goal) {
            return Err(MazeError::GoalOutOfBounds(goal));
        }
        Ok(maze)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The start position.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The goal position.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a valid maze has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn is_valid(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// The jump distance at `p`, or `0` when `p` is out of bounds.
    #[inline]
    pub fn jump_value(&self, p: Pos) -> u32 {
        match self.idx(p) {
            Some(i) => self.cells[i],
            None => 0,
        }
    }

    /// The jump values of row `r`, or an empty slice if out of range.
    pub fn row(&self, r: i32) -> &[u32] {
        if r < 0 || r >= self.rows {
            return &[];
        }
        let w = self.cols as usize;
        let start = r as usize * w;
        &self.cells[start..start + w]
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        let w = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Pos::new((i / w) as i32, (i % w) as i32), v))
    }

    /// The reachable destinations from `p`, in up, down, left, right order.
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    /// Append the reachable destinations from `p` into `buf`.
    ///
    /// Same order as [`neighbors`](Self::neighbors). `buf` is not cleared.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        let d = self.jump_value(p);
        if d == 0 {
            return;
        }
        for dir in Dir::ALL {
            let np = p.jump(dir, d);
            if self.is_valid(np) {
                buf.push(np);
            }
        }
    }

    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        if !self.is_valid(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a maze fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns are not positive.
    EmptyDimension { rows: i32, cols: i32 },
    /// The grid has a different number of rows than declared.
    RowCount { expected: usize, found: usize },
    /// A grid row has a different number of columns than declared.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The start position lies outside the grid.
    StartOutOfBounds(Pos),
    /// The goal position lies outside the grid.
    GoalOutOfBounds(Pos),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { rows, cols } => {
                write!(f, "invalid dimensions {rows}x{cols}")
            }
            Self::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, got {found}")
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(f, "row {row}: expected {expected} columns, got {found}"),
            Self::StartOutOfBounds(p) => write!(f, "start position {p} is out of bounds"),
            Self::GoalOutOfBounds(p) => write!(f, "goal position {p} is out of bounds"),
        }
    }
}

impl std::error::Error for MazeError {}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Wire shape of a [`Maze`]; deserialization goes back through validation.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MazeRepr {
    rows: i32,
    cols: i32,
    start: Pos,
    goal: Pos,
    grid: Vec<Vec<u32>>,
}

#[cfg(feature = "serde")]
impl From<Maze> for MazeRepr {
    fn from(m: Maze) -> Self {
        let grid = (0..m.rows).map(|r| m.row(r).to_vec()).collect();
        Self {
            rows: m.rows,
            cols: m.cols,
            start: m.start,
            goal: m.goal,
            grid,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(r: MazeRepr) -> Result<Self, Self::Error> {
        Maze::new(r.rows, r.cols, r.start, r.goal, r.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(grid: Vec<Vec<u32>>, start: Pos, goal: Pos) -> Maze {
        let rows = grid.len() as i32;
        let cols = grid[0].len() as i32;
        Maze::new(rows, cols, start, goal, grid).unwrap()
    }

    #[test]
    fn jump_value_out_of_bounds_is_zero() {
        let m = maze(vec![vec![3, 1], vec![2, 4]], Pos::new(0, 0), Pos::new(1, 1));
        assert_eq!(m.jump_value(Pos::new(1, 0)), 2);
        assert_eq!(m.jump_value(Pos::new(-1, 0)), 0);
        assert_eq!(m.jump_value(Pos::new(0, 2)), 0);
    }

    #[test]
    fn neighbors_order_up_down_left_right() {
        let m = maze(vec![vec![1; 3]; 3], Pos::new(0, 0), Pos::new(2, 2));
        assert_eq!(
            m.neighbors(Pos::new(1, 1)),
            vec![
                Pos::new(0, 1),
                Pos::new(2, 1),
                Pos::new(1, 0),
                Pos::new(1, 2)
            ]
        );
    }

    #[test]
    fn neighbors_filters_out_of_bounds() {
        let m = maze(vec![vec![1, 1], vec![1, 1]], Pos::new(0, 0), Pos::new(1, 1));
        assert_eq!(m.neighbors(Pos::new(0, 0)), vec![Pos::new(1, 0), Pos::new(0, 1)]);
    }

    #[test]
    fn zero_jump_has_no_neighbors() {
        let m = maze(vec![vec![0, 1], vec![1, 1]], Pos::new(0, 0), Pos::new(1, 1));
        assert!(m.neighbors(Pos::new(0, 0)).is_empty());
    }

    #[test]
    fn huge_jump_has_no_neighbors() {
        let m = maze(vec![vec![u32::MAX]], Pos::new(0, 0), Pos::new(0, 0));
        assert!(m.neighbors(Pos::new(0, 0)).is_empty());
    }

    #[test]
    fn huge_declared_width_is_rejected_before_allocating() {
        assert_eq!(
            Maze::new(1000, i32::MAX, Pos::ZERO, Pos::ZERO, vec![vec![]; 1000]),
            Err(MazeError::RowLength {
                row: 0,
                expected: i32::MAX as usize,
                found: 0
            })
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Maze::new(0, 2, Pos::ZERO, Pos::ZERO, vec![]),
            Err(MazeError::EmptyDimension { rows: 0, cols: 2 })
        );
        assert_eq!(
            Maze::new(2, 2, Pos::ZERO, Pos::ZERO, vec![vec![1, 1]]),
            Err(MazeError::RowCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Maze::new(1, 2, Pos::ZERO, Pos::ZERO, vec![vec![1, 1, 1]]),
            Err(MazeError::RowLength {
                row: 0,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Maze::new(1, 2, Pos::new(0, 2), Pos::ZERO, vec![vec![1, 1]]),
            Err(MazeError::StartOutOfBounds(Pos::new(0, 2)))
        );
        assert_eq!(
            Maze::new(1, 2, Pos::ZERO, Pos::new(-1, 0), vec![vec![1, 1]]),
            Err(MazeError::GoalOutOfBounds(Pos::new(-1, 0)))
        );
    }

    #[test]
    fn rows_and_iter() {
        let m = maze(vec![vec![1, 2, 3], vec![4, 5, 6]], Pos::ZERO, Pos::ZERO);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert!(m.row(2).is_empty());
        assert_eq!(m.len(), 6);
        let cells: Vec<_> = m.iter().collect();
        assert_eq!(cells[4], (Pos::new(1, 1), 5));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::new(
            2,
            2,
            Pos::new(0, 0),
            Pos::new(1, 1),
            vec![vec![1, 1], vec![1, 0]],
        )
        .unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn invalid_maze_is_rejected() {
        let json = r#"{"rows":1,"cols":1,"start":{"row":0,"col":0},"goal":{"row":3,"col":0},"grid":[[1]]}"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
    }

    #[test]
    fn mismatched_wide_grid_is_rejected() {
        let json = r#"{"rows":2,"cols":2147483647,"start":{"row":0,"col":0},"goal":{"row":0,"col":0},"grid":[[],[]]}"#;
        let err = serde_json::from_str::<Maze>(json).unwrap_err();
        assert!(err.to_string().contains("row 0: expected 2147483647 columns, got 0"));
    }
}
