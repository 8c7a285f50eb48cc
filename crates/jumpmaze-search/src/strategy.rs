//! Search strategies: the policy half of a [`Solver`](crate::Solver).

use std::fmt;
use std::str::FromStr;

use jumpmaze_core::Maze;

use crate::frontier::{Frontier, Queue, Stack};
use crate::solver::{Search, Solver};

/// When a position enters the visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitPolicy {
    /// Marked when removed from the frontier. The same position may be
    /// queued several times before its first removal.
    OnPop,
    /// Marked when added to the frontier. Every position is queued at most
    /// once.
    OnPush,
}

/// Order in which a position's neighbors are pushed onto the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOrder {
    Forward,
    Reversed,
}

/// A search strategy: a frontier container plus its marking and push policy.
pub trait Strategy {
    type Frontier: Frontier;

    /// Display name.
    const NAME: &'static str;
    const VISIT: VisitPolicy;
    const PUSH_ORDER: PushOrder;
}

/// Depth-first search.
///
/// Neighbors are pushed in reverse so that, popped from the stack, they are
/// expanded in up, down, left, right order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl Strategy for DepthFirst {
    type Frontier = Stack;

    const NAME: &'static str = "DFS";
    const VISIT: VisitPolicy = VisitPolicy::OnPop;
    const PUSH_ORDER: PushOrder = PushOrder::Reversed;
}

/// Uniform-cost search. Every move costs one step, so this is breadth-first
/// search and finds a path with the fewest moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl Strategy for UniformCost {
    type Frontier = Queue;

    const NAME: &'static str = "UCS (BFS)";
    const VISIT: VisitPolicy = VisitPolicy::OnPush;
    const PUSH_ORDER: PushOrder = PushOrder::Forward;
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Runtime choice between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    DepthFirst,
    UniformCost,
}

impl Algorithm {
    /// Both algorithms, depth-first first.
    pub const ALL: [Algorithm; 2] = [Algorithm::DepthFirst, Algorithm::UniformCost];

    /// Display name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => DepthFirst::NAME,
            Self::UniformCost => UniformCost::NAME,
        }
    }

    /// Start a search of this kind over `maze`.
    pub fn solver(self, maze: Maze) -> Box<dyn Search> {
        match self {
            Self::DepthFirst => Box::new(Solver::<DepthFirst>::new(maze)),
            Self::UniformCost => Box::new(Solver::<UniformCost>::new(maze)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "ucs" | "bfs" | "uniform-cost" => Ok(Self::UniformCost),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d} (expected dfs or ucs)", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}
