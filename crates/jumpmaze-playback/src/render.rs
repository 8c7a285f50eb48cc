//! Plain-text rendering of a search step.

use std::fmt::Write;

use jumpmaze_core::{Maze, Pos};
use jumpmaze_search::{SearchStep, solution_message};

use crate::mark::CellMark;

/// Draw `maze` as a grid of jump values, each prefixed with the
/// [`CellMark::glyph`] of that cell at `step`.
///
/// ```text
/// S1  2 ?1
/// .3 @1  2
/// ```
pub fn render_text(maze: &Maze, step: Option<&SearchStep>) -> String {
    let width = maze
        .iter()
        .map(|(_, v)| v.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for r in 0..maze.rows() {
        for c in 0..maze.cols() {
            let p = Pos::new(r, c);
            if c > 0 {
                out.push(' ');
            }
            let mark = CellMark::classify(maze, step, p);
            let _ = write!(out, "{}{:>width$}", mark.glyph(), maze.jump_value(p));
        }
        out.push('\n');
    }
    out
}

/// The status line shown for `step`.
///
/// A step holding a solution always reports its move count; otherwise the
/// step's own message is shown, falling back to `fallback` when it has none.
pub fn status_text(step: Option<&SearchStep>, fallback: &str) -> String {
    if let Some(moves) = step.and_then(SearchStep::moves) {
        return solution_message(moves);
    }
    match step {
        Some(s) if !s.message.is_empty() => s.message.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpmaze_search::{Dfs, NO_SOLUTION};

    fn maze(grid: Vec<Vec<u32>>, goal: Pos) -> Maze {
        let rows = grid.len() as i32;
        let cols = grid[0].len() as i32;
        Maze::new(rows, cols, Pos::new(0, 0), goal, grid).unwrap()
    }

    #[test]
    fn render_without_step() {
        let m = maze(vec![vec![1, 10], vec![2, 3]], Pos::new(1, 1));
        assert_eq!(render_text(&m, None), "S 1  10\n  2 G 3\n");
    }

    #[test]
    fn render_solved() {
        let m = maze(vec![vec![1, 1], vec![1, 1]], Pos::new(1, 1));
        let mut s = Dfs::new(m.clone());
        s.run_to_completion();
        let text = render_text(&m, s.history().last());
        assert_eq!(text, "*1 ?1\n*1 *1\n");
    }

    #[test]
    fn status_precedence() {
        assert_eq!(status_text(None, "idle"), "idle");
        let plain = SearchStep::default();
        assert_eq!(status_text(Some(&plain), "idle"), "idle");
        let exhausted = SearchStep {
            message: NO_SOLUTION.to_string(),
            ..SearchStep::default()
        };
        assert_eq!(status_text(Some(&exhausted), "idle"), NO_SOLUTION);
        let solved = SearchStep {
            solution_path: Some(vec![Pos::new(0, 0), Pos::new(0, 1)]),
            ..SearchStep::default()
        };
        assert_eq!(status_text(Some(&solved), "idle"), "solution found in 1 moves");
    }
}
