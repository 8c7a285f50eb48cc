//! Maze sources for jumpmaze: the text file format and random generation.
//!
//! Everything here produces validated [`Maze`](jumpmaze_core::Maze) values;
//! malformed records are skipped and reported, never handed to the search
//! engine.

pub mod loader;
pub mod mapgen;
pub mod writer;

pub use loader::{LoadError, Loaded, RowError, SkipReason, load_file, parse_mazes};
pub use mapgen::{MazeGen, MazeGenConfig};
pub use writer::{format_maze, write_mazes};
