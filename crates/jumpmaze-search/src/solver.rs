//! The steppable search engine.
//!
//! A [`Solver`] expands one position per [`advance`](Solver::advance) call
//! and records a [`SearchStep`] for every expansion, so a caller can walk the
//! search forward and backward one decision at a time.

use std::collections::BTreeSet;
use std::marker::PhantomData;

use jumpmaze_core::{Maze, Pos};

use crate::frontier::{Entry, Frontier};
use crate::history::History;
use crate::step::SearchStep;
use crate::strategy::{Algorithm, DepthFirst, PushOrder, Strategy, UniformCost, VisitPolicy};
use crate::traits::Pather;

/// Message recorded when the frontier runs dry without reaching the goal.
pub const NO_SOLUTION: &str = "no solution found";

/// Message recorded when the goal is reached.
pub fn solution_message(moves: usize) -> String {
    format!("solution found in {moves} moves")
}

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    NotStarted,
    Running,
    Solved,
    Exhausted,
}

impl SearchState {
    /// Whether the search has finished, with or without a solution.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// Result of a single [`Solver::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// More positions may remain to expand.
    More,
    /// The search has finished; further calls do nothing.
    Done,
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Steppable search over a graph `G` using strategy `S`.
///
/// Construction records the initial step immediately. Each
/// [`advance`](Self::advance) pops one frontier entry, records a step, and
/// queues the entry's unvisited neighbors. The solver owns its [`History`];
/// cursor movement never re-runs search logic.
pub struct Solver<S: Strategy, G: Pather = Maze> {
    graph: G,
    start: Pos,
    goal: Pos,
    pending: S::Frontier,
    visited: BTreeSet<Pos>,
    state: SearchState,
    solution: Option<Vec<Pos>>,
    message: String,
    history: History,
    expansions: usize,
    nbuf: Vec<Pos>,
    _strategy: PhantomData<S>,
}

/// Depth-first solver over a [`Maze`].
pub type Dfs = Solver<DepthFirst>;
/// Uniform-cost (breadth-first) solver over a [`Maze`].
pub type Ucs = Solver<UniformCost>;

impl<S: Strategy> Solver<S, Maze> {
    /// Start a search from the maze's start to its goal.
    pub fn new(maze: Maze) -> Self {
        let (start, goal) = (maze.start(), maze.goal());
        Self::with_graph(maze, start, goal)
    }

    /// The maze being searched.
    pub fn maze(&self) -> &Maze {
        &self.graph
    }
}

impl<S: Strategy, G: Pather> Solver<S, G> {
    /// Start a search over an arbitrary graph.
    pub fn with_graph(graph: G, start: Pos, goal: Pos) -> Self {
        let mut solver = Self {
            graph,
            start,
            goal,
            pending: S::Frontier::default(),
            visited: BTreeSet::new(),
            state: SearchState::NotStarted,
            solution: None,
            message: String::new(),
            history: History::new(),
            expansions: 0,
            nbuf: Vec::with_capacity(4),
            _strategy: PhantomData,
        };
        solver.initialize();
        solver
    }

    /// Discard all progress and history and record a fresh initial step.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.visited.clear();
        self.state = SearchState::NotStarted;
        self.solution = None;
        self.message.clear();
        self.history = History::new();
        self.expansions = 0;
        self.initialize();
    }

    fn initialize(&mut self) {
        self.pending.push(Entry::seed(self.start));
        self.visited.insert(self.start);
        // Under pop-time marking nothing has been expanded yet.
        let shown = match S::VISIT {
            VisitPolicy::OnPop => BTreeSet::new(),
            VisitPolicy::OnPush => self.visited.clone(),
        };
        self.record(None, Vec::new(), shown);
        self.state = SearchState::Running;
        log::debug!("{}: search from {} to {} started", S::NAME, self.start, self.goal);
    }

    /// Perform exactly one pop/expand operation.
    ///
    /// Returns [`Progress::Done`] once the goal has been reached or the
    /// frontier is exhausted; from then on the call is a no-op.
    pub fn advance(&mut self) -> Progress {
        match self.state {
            SearchState::Solved | SearchState::Exhausted => return Progress::Done,
            SearchState::NotStarted => {
                self.initialize();
                return Progress::More;
            }
            SearchState::Running => {}
        }

        let Some(entry) = self.pending.pop_next() else {
            self.message = NO_SOLUTION.to_string();
            self.record(None, Vec::new(), self.visited.clone());
            self.state = SearchState::Exhausted;
            log::debug!(
                "{}: frontier exhausted after {} expansions",
                S::NAME,
                self.expansions
            );
            return Progress::Done;
        };
        self.expansions += 1;

        if S::VISIT == VisitPolicy::OnPop {
            self.visited.insert(entry.pos);
        }

        if entry.pos == self.goal {
            let moves = entry.path.len().saturating_sub(1);
            self.solution = Some(entry.path.clone());
            self.message = solution_message(moves);
            self.record(Some(entry.pos), entry.path, self.visited.clone());
            self.pending.clear();
            self.state = SearchState::Solved;
            log::debug!(
                "{}: goal {} reached in {} moves after {} expansions",
                S::NAME,
                self.goal,
                moves,
                self.expansions
            );
            return Progress::Done;
        }

        self.record(Some(entry.pos), entry.path.clone(), self.visited.clone());

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.graph.neighbors(entry.pos, &mut nbuf);
        if S::PUSH_ORDER == PushOrder::Reversed {
            nbuf.reverse();
        }
        for &np in nbuf.iter() {
            if self.visited.contains(&np) {
                continue;
            }
            if S::VISIT == VisitPolicy::OnPush {
                self.visited.insert(np);
            }
            self.pending.push(entry.branch(np));
        }
        log::trace!(
            "{}: expanded {}, {} pending",
            S::NAME,
            entry.pos,
            self.pending.len()
        );
        self.nbuf = nbuf;
        Progress::More
    }

    /// Advance until the search finishes.
    pub fn run_to_completion(&mut self) {
        while self.advance() == Progress::More {}
    }

    /// Show the next step.
    ///
    /// If the cursor is behind the newest recorded step this only moves the
    /// cursor. Otherwise the search is advanced and the cursor follows the
    /// newly recorded step. Returns `false` when nothing changed.
    pub fn step_forward(&mut self) -> bool {
        if self.history.move_forward() {
            return true;
        }
        let before = self.history.len();
        self.advance();
        if self.history.len() > before {
            self.history.jump_to_end();
            return true;
        }
        false
    }

    /// Show the previous step. Returns `false` at the first step.
    pub fn step_backward(&mut self) -> bool {
        self.history.move_backward()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The step under the history cursor.
    pub fn current(&self) -> Option<&SearchStep> {
        self.history.current()
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The start-to-goal path, once found.
    pub fn solution(&self) -> Option<&[Pos]> {
        self.solution.as_deref()
    }

    /// Final status message; empty while the search is running.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of frontier entries popped so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn record(&mut self, current: Option<Pos>, path: Vec<Pos>, visited: BTreeSet<Pos>) {
        // `message` stays empty until a terminal step is recorded.
        self.history.record(SearchStep {
            current,
            path_to_current: path,
            frontier: self.pending.positions(),
            visited,
            solution_path: self.solution.clone(),
            message: self.message.clone(),
        });
    }
}

// ---------------------------------------------------------------------------
// Search (object-safe facade)
// ---------------------------------------------------------------------------

/// Object-safe view of a running search, for callers that pick the
/// strategy at runtime (see [`Algorithm::solver`]).
pub trait Search {
    fn algorithm(&self) -> Algorithm;
    fn advance(&mut self) -> Progress;
    fn step_forward(&mut self) -> bool;
    fn step_backward(&mut self) -> bool;
    fn history(&self) -> &History;
    fn state(&self) -> SearchState;
    fn solution(&self) -> Option<&[Pos]>;
    fn message(&self) -> &str;
    fn expansions(&self) -> usize;

    fn run_to_completion(&mut self) {
        while self.advance() == Progress::More {}
    }

    fn current(&self) -> Option<&SearchStep> {
        self.history().current()
    }
}

macro_rules! impl_search {
    ($strategy:ty, $algo:expr) => {
        impl<G: Pather> Search for Solver<$strategy, G> {
            fn algorithm(&self) -> Algorithm {
                $algo
            }
            fn advance(&mut self) -> Progress {
                Solver::advance(self)
            }
            fn step_forward(&mut self) -> bool {
                Solver::step_forward(self)
            }
            fn step_backward(&mut self) -> bool {
                Solver::step_backward(self)
            }
            fn history(&self) -> &History {
                Solver::history(self)
            }
            fn state(&self) -> SearchState {
                Solver::state(self)
            }
            fn solution(&self) -> Option<&[Pos]> {
                Solver::solution(self)
            }
            fn message(&self) -> &str {
                Solver::message(self)
            }
            fn expansions(&self) -> usize {
                Solver::expansions(self)
            }
        }
    };
}

impl_search!(DepthFirst, Algorithm::DepthFirst);
impl_search!(UniformCost, Algorithm::UniformCost);
