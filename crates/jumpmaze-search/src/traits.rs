use jumpmaze_core::{Maze, Pos};

/// Minimal graph interface for the search engine: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in tie-breaking order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

impl Pather for Maze {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.neighbors_into(p, buf);
    }
}

impl<P: Pather + ?Sized> Pather for &P {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        (**self).neighbors(p, buf);
    }
}
