//! `jumpmaze`: solve, trace, replay and generate jumping mazes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jumpmaze_cli::commands::{
    generate_mazes, generator_rng, solve, write_solve_report, write_trace, write_trace_json,
};
use jumpmaze_cli::term::TerminalDriver;
use jumpmaze_core::Maze;
use jumpmaze_input::{MazeGenConfig, load_file, write_mazes};
use jumpmaze_playback::{Playback, PlaybackConfig};
use jumpmaze_search::Algorithm;

#[derive(Parser)]
#[command(name = "jumpmaze", version)]
#[command(about = "Step-by-step DFS and UCS search over jumping mazes")]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve every maze in FILE with both strategies and print move counts
    Solve { file: PathBuf },
    /// Run one search to completion and print every recorded step
    Trace {
        file: PathBuf,
        /// Maze to use, counting from 1
        #[arg(long, default_value_t = 1)]
        maze: usize,
        /// Search strategy: dfs or ucs
        #[arg(long, default_value = "dfs")]
        algo: Algorithm,
        /// Print the history as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a search interactively in the terminal
    Play {
        file: PathBuf,
        /// Maze to use, counting from 1
        #[arg(long, default_value_t = 1)]
        maze: usize,
        /// Search strategy: dfs or ucs
        #[arg(long, default_value = "dfs")]
        algo: Algorithm,
        /// Delay between automatic steps
        #[arg(long, default_value_t = 150)]
        delay_ms: u64,
    },
    /// Print random mazes in the input file format
    Generate {
        #[arg(long, default_value_t = 6)]
        rows: i32,
        #[arg(long, default_value_t = 6)]
        cols: i32,
        #[arg(long, default_value_t = 3)]
        max_jump: u32,
        /// Percentage of dead-end cells
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=100))]
        dead_end_pct: u32,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Keep only mazes that have a solution
        #[arg(long)]
        solvable: bool,
    },
}

/// Attempts per maze for `generate --solvable`.
const SOLVABLE_ATTEMPTS: usize = 10_000;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve { file } => {
            let mazes = load(&file)?;
            write_solve_report(io::stdout().lock(), &mazes)?;
        }
        Command::Trace {
            file,
            maze,
            algo,
            json,
        } => {
            let maze = pick(load(&file)?, maze)?;
            let search = solve(algo, &maze);
            let mut out = io::stdout().lock();
            if json {
                write_trace_json(&mut out, &maze, search.as_ref())?;
                writeln!(out)?;
            } else {
                write_trace(&mut out, &maze, search.as_ref())?;
            }
        }
        Command::Play {
            file,
            maze: index,
            algo,
            delay_ms,
        } => {
            let maze = pick(load(&file)?, index)?;
            let mut playback = Playback::new(PlaybackConfig {
                search: algo.solver(maze.clone()),
                interval: Duration::from_millis(delay_ms),
            });
            let title = format!("maze {index} [{algo}]");
            let mut driver = TerminalDriver::init().context("initialising terminal")?;
            driver.run(&title, &maze, &mut playback)?;
        }
        Command::Generate {
            rows,
            cols,
            max_jump,
            dead_end_pct,
            count,
            seed,
            solvable,
        } => {
            if rows <= 0 || cols <= 0 {
                bail!("maze dimensions must be positive, got {rows}x{cols}");
            }
            let cfg = MazeGenConfig {
                rows,
                cols,
                max_jump,
                dead_end_pct,
            };
            let rng = generator_rng(seed);
            let mazes = generate_mazes(cfg, rng, count, solvable, SOLVABLE_ATTEMPTS);
            if mazes.len() < count {
                log::warn!("generated {} of {count} mazes", mazes.len());
            }
            write_mazes(io::stdout().lock(), &mazes)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load(path: &Path) -> Result<Vec<Maze>> {
    let loaded =
        load_file(path).with_context(|| format!("reading mazes from {}", path.display()))?;
    if loaded.mazes.is_empty() {
        bail!(
            "{}: no valid mazes ({} records skipped)",
            path.display(),
            loaded.skipped.len()
        );
    }
    Ok(loaded.mazes)
}

fn pick(mazes: Vec<Maze>, index: usize) -> Result<Maze> {
    let count = mazes.len();
    index
        .checked_sub(1)
        .and_then(|i| mazes.into_iter().nth(i))
        .with_context(|| format!("--maze {index} out of range (file has {count} mazes)"))
}
