//! Append-only step history with a movable cursor.
//!
//! The cursor marks the step being inspected, independently of how far the
//! search itself has progressed. Moving it replays recorded steps without
//! recomputation.

use std::fmt;

use crate::step::SearchStep;

/// Recorded search steps plus a cursor into them.
///
/// The cursor is `None` only while the history is empty; otherwise it is
/// always a valid index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HistoryRepr"))]
pub struct History {
    steps: Vec<SearchStep>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step. The first step recorded places the cursor on it;
    /// later steps leave the cursor where it is.
    pub fn record(&mut self, step: SearchStep) {
        self.steps.push(step);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    /// Advance the cursor one step. Returns `false` if already at the end.
    pub fn move_forward(&mut self) -> bool {
        match self.cursor {
            Some(c) if c < self.steps.len().saturating_sub(1) => {
                self.cursor = Some(c + 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor back one step. Returns `false` if already at the
    /// first step.
    pub fn move_backward(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor to the first step.
    pub fn jump_to_start(&mut self) {
        if !self.steps.is_empty() {
            self.cursor = Some(0);
        }
    }

    /// Move the cursor to the most recently recorded step.
    pub fn jump_to_end(&mut self) {
        self.cursor = self.steps.len().checked_sub(1);
    }

    /// The step under the cursor.
    pub fn current(&self) -> Option<&SearchStep> {
        self.cursor.and_then(|c| self.steps.get(c))
    }

    /// The cursor index.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether the cursor is on the most recent step (or history is empty).
    pub fn at_end(&self) -> bool {
        self.cursor
            .is_none_or(|c| c >= self.steps.len().saturating_sub(1))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SearchStep> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&SearchStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchStep> {
        self.steps.iter()
    }
}

/// A cursor that does not point into the recorded steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCursor {
    pub cursor: Option<usize>,
    pub len: usize,
}

impl fmt::Display for InvalidCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cursor {
            Some(c) => write!(f, "cursor {c} out of range for {} steps", self.len),
            None => write!(f, "missing cursor for {} steps", self.len),
        }
    }
}

impl std::error::Error for InvalidCursor {}

/// Wire shape of a [`History`]; deserialization checks the cursor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HistoryRepr {
    steps: Vec<SearchStep>,
    cursor: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<HistoryRepr> for History {
    type Error = InvalidCursor;

    fn try_from(r: HistoryRepr) -> Result<Self, Self::Error> {
        let len = r.steps.len();
        let valid = match r.cursor {
            None => len == 0,
            Some(c) => c < len,
        };
        if !valid {
            return Err(InvalidCursor {
                cursor: r.cursor,
                len,
            });
        }
        Ok(Self {
            steps: r.steps,
            cursor: r.cursor,
        })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a SearchStep;
    type IntoIter = std::slice::Iter<'a, SearchStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
