//! Writing mazes back out in the file format read by [`crate::loader`].

use std::io::{self, Write};

use jumpmaze_core::Maze;

/// Render one maze record: header line followed by its grid rows.
pub fn format_maze(maze: &Maze) -> String {
    let (s, g) = (maze.start(), maze.goal());
    let mut out = format!(
        "{} {} {} {} {} {}\n",
        maze.rows(),
        maze.cols(),
        s.row,
        s.col,
        g.row,
        g.col
    );
    for r in 0..maze.rows() {
        let line = maze
            .row(r)
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write all mazes followed by the `0` terminator line.
pub fn write_mazes<'a, W: Write>(
    mut w: W,
    mazes: impl IntoIterator<Item = &'a Maze>,
) -> io::Result<()> {
    for maze in mazes {
        w.write_all(format_maze(maze).as_bytes())?;
    }
    w.write_all(b"0\n")?;
    w.flush()
}
