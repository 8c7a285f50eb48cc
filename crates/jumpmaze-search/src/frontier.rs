//! Pending-work containers shared by the search strategies.
//!
//! [`Stack`] and [`Queue`] differ only in which end [`Frontier::pop_next`]
//! removes from. Strategies depend on the [`Frontier`] capability, never on a
//! concrete container.

use std::collections::{BTreeSet, VecDeque};

use jumpmaze_core::Pos;

/// A pending expansion: a position and the path that reached it.
///
/// Each entry owns its path. Branching copies the parent path, so sibling
/// entries never alias one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub pos: Pos,
    pub path: Vec<Pos>,
}

impl Entry {
    /// The seed entry for a search starting at `start`.
    pub fn seed(start: Pos) -> Self {
        Self {
            pos: start,
            path: vec![start],
        }
    }

    /// A new entry one move further along this entry's path.
    pub fn branch(&self, next: Pos) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self { pos: next, path }
    }
}

/// Pending-work collection with a single removal policy.
pub trait Frontier: Default {
    /// Add an entry.
    fn push(&mut self, entry: Entry);

    /// Remove the next entry according to the container's policy.
    fn pop_next(&mut self) -> Option<Entry>;

    /// The set of positions currently pending (duplicates collapse).
    fn positions(&self) -> BTreeSet<Pos>;

    /// Drop all pending entries.
    fn clear(&mut self);

    /// Number of pending entries, duplicates included.
    fn len(&self) -> usize;

    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Stack
// ---------------------------------------------------------------------------

/// Last-in-first-out pending work.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    entries: Vec<Entry>,
}

impl Frontier for Stack {
    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn pop_next(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    fn positions(&self) -> BTreeSet<Pos> {
        self.entries.iter().map(|e| e.pos).collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// First-in-first-out pending work.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    entries: VecDeque<Entry>,
}

impl Frontier for Queue {
    fn push(&mut self, entry: Entry) {
        self.entries.push_back(entry);
    }

    fn pop_next(&mut self) -> Option<Entry> {
        self.entries.pop_front()
    }

    fn positions(&self) -> BTreeSet<Pos> {
        self.entries.iter().map(|e| e.pos).collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
