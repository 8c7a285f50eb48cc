//! Random jumping maze generation.

use jumpmaze_core::{Maze, Pos};
use jumpmaze_search::Ucs;
use rand::{Rng, RngExt};

/// Parameters for [`MazeGen`].
#[derive(Debug, Clone)]
pub struct MazeGenConfig {
    pub rows: i32,
    pub cols: i32,
    /// Largest jump value generated. Values are drawn from `1..=max_jump`
    /// (clamped to at least 1).
    pub max_jump: u32,
    /// Percentage (0–100) of cells turned into dead ends (jump value 0).
    pub dead_end_pct: u32,
}

impl Default for MazeGenConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            max_jump: 3,
            dead_end_pct: 10,
        }
    }
}

/// Random maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub cfg: MazeGenConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the given configuration.
    pub fn new(cfg: MazeGenConfig, rng: R) -> Self {
        Self { rng, cfg }
    }

    /// Generate a maze with random jump values and random start and goal.
    ///
    /// Returns `None` if the configured dimensions are not positive.
    pub fn generate(&mut self) -> Option<Maze> {
        let MazeGenConfig {
            rows,
            cols,
            max_jump,
            dead_end_pct,
        } = self.cfg;
        if rows <= 0 || cols <= 0 {
            return None;
        }
        let max_jump = max_jump.max(1);
        let grid: Vec<Vec<u32>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if self.rng.random_range(0..100) < dead_end_pct {
                            0
                        } else {
                            self.rng.random_range(1..=max_jump)
                        }
                    })
                    .collect()
            })
            .collect();
        let start = self.random_pos();
        let goal = self.random_pos();
        Maze::new(rows, cols, start, goal, grid).ok()
    }

    /// Generate mazes until one has a solution, giving up after `attempts`.
    pub fn generate_solvable(&mut self, attempts: usize) -> Option<Maze> {
        for attempt in 0..attempts {
            let maze = self.generate()?;
            let mut search = Ucs::new(maze);
            search.run_to_completion();
            if search.solution().is_some() {
                log::debug!("solvable maze found after {} attempts", attempt + 1);
                return Some(search.maze().clone());
            }
        }
        log::debug!("no solvable maze in {attempts} attempts");
        None
    }

    fn random_pos(&mut self) -> Pos {
        Pos::new(
            self.rng.random_range(0..self.cfg.rows),
            self.rng.random_range(0..self.cfg.cols),
        )
    }
}
