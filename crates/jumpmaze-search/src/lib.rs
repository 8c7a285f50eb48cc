//! Steppable search over jumping mazes.
//!
//! This crate provides two uninformed search strategies that record every
//! decision they make, so the exploration can be replayed step by step:
//!
//! - **Depth-first** ([`Dfs`]): stack frontier, positions marked visited
//!   when popped.
//! - **Uniform-cost** ([`Ucs`]): queue frontier, positions marked visited
//!   when pushed; finds a path with the fewest moves.
//!
//! Each [`Solver`] owns a [`History`] of [`SearchStep`] snapshots and a
//! cursor into it. [`Solver::advance`] extends the history by one step;
//! [`Solver::step_forward`] and [`Solver::step_backward`] move the cursor,
//! advancing the search only when the cursor is already on the newest step.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | neighbor enumeration for the searched graph |
//! | [`Frontier`] | pending-work container ([`Stack`], [`Queue`]) |
//! | [`Strategy`] | frontier + visit-marking + push-order policy |
//! | [`Search`] | object-safe facade for runtime strategy choice |

mod frontier;
mod history;
mod solver;
mod step;
mod strategy;
mod traits;

pub use frontier::{Entry, Frontier, Queue, Stack};
pub use history::{History, InvalidCursor};
pub use solver::{
    Dfs, NO_SOLUTION, Progress, Search, SearchState, Solver, Ucs, solution_message,
};
pub use step::SearchStep;
pub use strategy::{
    Algorithm, DepthFirst, PushOrder, Strategy, UniformCost, UnknownAlgorithm, VisitPolicy,
};
pub use traits::Pather;
