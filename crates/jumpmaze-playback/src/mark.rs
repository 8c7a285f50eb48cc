//! Per-cell classification of a recorded search step.

use jumpmaze_core::{Maze, Pos};
use jumpmaze_search::SearchStep;

/// How a cell should be drawn for a given step.
///
/// When several apply, the highest one wins:
/// solution path > current > frontier > visited > goal > start > plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMark {
    Plain,
    Start,
    Goal,
    Visited,
    Frontier,
    Current,
    Path,
}

impl CellMark {
    /// Classify `p` in `maze` at `step`. With no step only the endpoints are
    /// marked.
    pub fn classify(maze: &Maze, step: Option<&SearchStep>, p: Pos) -> Self {
        if let Some(s) = step {
            if s.on_solution(p) {
                return Self::Path;
            }
            if s.current == Some(p) {
                return Self::Current;
            }
            if s.frontier.contains(&p) {
                return Self::Frontier;
            }
            if s.visited.contains(&p) {
                return Self::Visited;
            }
        }
        if p == maze.goal() {
            Self::Goal
        } else if p == maze.start() {
            Self::Start
        } else {
            Self::Plain
        }
    }

    /// Single-character marker used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Self::Plain => ' ',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Visited => '.',
            Self::Frontier => '?',
            Self::Current => '@',
            Self::Path => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpmaze_search::{Progress, Ucs};

    fn maze() -> Maze {
        Maze::new(
            2,
            2,
            Pos::new(0, 0),
            Pos::new(1, 1),
            vec![vec![1, 1], vec![1, 1]],
        )
        .unwrap()
    }

    #[test]
    fn endpoints_without_step() {
        let m = maze();
        assert_eq!(CellMark::classify(&m, None, Pos::new(0, 0)), CellMark::Start);
        assert_eq!(CellMark::classify(&m, None, Pos::new(1, 1)), CellMark::Goal);
        assert_eq!(CellMark::classify(&m, None, Pos::new(0, 1)), CellMark::Plain);
    }

    #[test]
    fn precedence() {
        let m = maze();
        let mut s = Ucs::new(m.clone());
        assert_eq!(s.advance(), Progress::More);
        s.advance();
        // Cursor stays at the first step; inspect the newest one.
        let step = s.history().last().unwrap();
        assert_eq!(step.current, Some(Pos::new(1, 0)));
        assert_eq!(CellMark::classify(&m, Some(step), Pos::new(1, 0)), CellMark::Current);
        assert_eq!(CellMark::classify(&m, Some(step), Pos::new(0, 1)), CellMark::Frontier);
        assert_eq!(CellMark::classify(&m, Some(step), Pos::new(0, 0)), CellMark::Visited);

        s.run_to_completion();
        let last = s.history().last().unwrap();
        for p in [Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)] {
            assert_eq!(CellMark::classify(&m, Some(last), p), CellMark::Path);
        }
        assert_eq!(CellMark::classify(&m, Some(last), Pos::new(0, 1)), CellMark::Visited);
    }
}
