//! **jumpmaze-core**: the jumping maze model.
//!
//! A jumping maze is a grid where every cell holds a jump distance. This
//! crate provides the position type, the validated [`Maze`] and its
//! movement rule; the search engine lives in `jumpmaze-search`.

pub mod geom;
pub mod maze;

pub use geom::{Dir, Pos};
pub use maze::{Maze, MazeError};
