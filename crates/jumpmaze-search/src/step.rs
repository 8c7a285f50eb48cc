use std::collections::BTreeSet;

use jumpmaze_core::Pos;

/// One recorded moment of a search.
///
/// A step carries everything needed to redraw the search at that point
/// without re-running it. Steps are never modified after being recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStep {
    /// The position just expanded, if any.
    pub current: Option<Pos>,
    /// Path from the start to `current`; empty when `current` is `None`.
    pub path_to_current: Vec<Pos>,
    /// Positions pending expansion.
    pub frontier: BTreeSet<Pos>,
    /// Positions visited so far.
    pub visited: BTreeSet<Pos>,
    /// Start-to-goal path, once one has been found.
    pub solution_path: Option<Vec<Pos>>,
    /// Status text; empty for ordinary expansion steps.
    pub message: String,
}

impl SearchStep {
    /// Number of moves in the solution path, if one was found.
    pub fn moves(&self) -> Option<usize> {
        self.solution_path
            .as_ref()
            .map(|p| p.len().saturating_sub(1))
    }

    /// Whether `p` lies on the solution path.
    pub fn on_solution(&self, p: Pos) -> bool {
        self.solution_path
            .as_ref()
            .is_some_and(|path| path.contains(&p))
    }
}
