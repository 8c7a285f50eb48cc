//! Non-interactive commands: console reports, traces and maze generation.

use std::io::{self, Write};

use jumpmaze_core::Maze;
use jumpmaze_input::{MazeGen, MazeGenConfig};
use jumpmaze_playback::{render_text, status_text};
use jumpmaze_search::{Algorithm, History, NO_SOLUTION, Search};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const RULE: &str = "------------------------------";

/// Run `algo` on a copy of `maze` until it finishes.
pub fn solve(algo: Algorithm, maze: &Maze) -> Box<dyn Search> {
    let mut search = algo.solver(maze.clone());
    search.run_to_completion();
    log::debug!(
        "{algo}: {} after {} expansions",
        search.message(),
        search.expansions()
    );
    search
}

/// Solve every maze with both strategies and print the move counts.
pub fn write_solve_report<W: Write>(mut w: W, mazes: &[Maze]) -> io::Result<()> {
    writeln!(w, "{RULE}")?;
    writeln!(w, "Mazes:")?;
    writeln!(w, "{RULE}")?;
    for (i, maze) in mazes.iter().enumerate() {
        writeln!(
            w,
            "\n--- maze {} ({}x{}) ---",
            i + 1,
            maze.rows(),
            maze.cols()
        )?;

        let dfs = solve(Algorithm::DepthFirst, maze);
        match dfs.solution() {
            Some(path) => writeln!(w, "DFS: path found in {} moves", path.len() - 1)?,
            None => writeln!(w, "DFS: {NO_SOLUTION}")?,
        }

        let ucs = solve(Algorithm::UniformCost, maze);
        match ucs.solution() {
            Some(path) => writeln!(w, "UCS (BFS): {}", path.len() - 1)?,
            None => writeln!(w, "UCS (BFS): {NO_SOLUTION}")?,
        }
    }
    writeln!(w, "{RULE}")
}

/// Print every recorded step of a finished search as a text grid.
pub fn write_trace<W: Write>(mut w: W, maze: &Maze, search: &dyn Search) -> io::Result<()> {
    let history = search.history();
    let last = history.len().saturating_sub(1);
    for (i, step) in history.iter().enumerate() {
        let current = step
            .current
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        writeln!(
            w,
            "step {i}/{last}: current {current}, frontier {}, visited {}",
            step.frontier.len(),
            step.visited.len()
        )?;
        write!(w, "{}", render_text(maze, Some(step)))?;
        let status = status_text(Some(step), "");
        if !status.is_empty() {
            writeln!(w, "{status}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// JSON document emitted by `jumpmaze trace --json`.
#[derive(Serialize)]
pub struct TraceDocument<'a> {
    pub algorithm: Algorithm,
    pub maze: &'a Maze,
    pub expansions: usize,
    pub history: &'a History,
}

/// Write the full history of a finished search as pretty-printed JSON.
pub fn write_trace_json<W: Write>(
    w: W,
    maze: &Maze,
    search: &dyn Search,
) -> serde_json::Result<()> {
    let doc = TraceDocument {
        algorithm: search.algorithm(),
        maze,
        expansions: search.expansions(),
        history: search.history(),
    };
    serde_json::to_writer_pretty(w, &doc)
}

/// Generator RNG: reproducible with a seed, otherwise seeded from the
/// thread RNG.
pub fn generator_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Generate `count` random mazes. With `solvable`, only mazes that have a
/// solution are kept; generation gives up on a maze after `attempts` tries.
pub fn generate_mazes<R: Rng>(
    cfg: MazeGenConfig,
    rng: R,
    count: usize,
    solvable: bool,
    attempts: usize,
) -> Vec<Maze> {
    let mut mg = MazeGen::new(cfg, rng);
    (0..count)
        .filter_map(|_| {
            if solvable {
                mg.generate_solvable(attempts)
            } else {
                mg.generate()
            }
        })
        .collect()
}
