//! The step recorder shared by every sorter.
//!
//! A [`Step`] is a frozen picture of the array taken while a sorter is working on it: a full copy
//! of the values, the positions that were just compared or moved, and a sentence explaining what
//! happened. The [`Recorder`] collects those steps in order while a sort runs, and counts the
//! comparisons it performs on the sorter's behalf.

use std::cmp::Ordering;
use std::fmt::Display;

use serde::Serialize;

use crate::{Algorithm, OrstError, Result, Trace};

/// One instrumented operation of a sort.
///
/// The snapshot is an owned copy of the array, so mutating the array after the step was taken
/// never shows up here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<T> {
    snapshot: Vec<T>,
    highlighted: Vec<usize>,
    explanation: String,
}

impl<T: Clone> Step<T> {
    /// Takes a copy of `array` and marks `indices` on it.
    ///
    /// `indices` is treated as a set: duplicates collapse into one position.
    ///
    /// # Panics
    ///
    /// Panics if more than two distinct indices are given or if any index is out of bounds for
    /// `array`. Both are bugs in the calling sorter.
    pub fn capture(array: &[T], indices: &[usize], explanation: impl Into<String>) -> Self {
        let mut highlighted = Vec::with_capacity(indices.len());
        for &index in indices {
            assert!(
                index < array.len(),
                "highlighted index {index} is out of bounds for an array of length {}",
                array.len()
            );
            if !highlighted.contains(&index) {
                highlighted.push(index);
            }
        }
        assert!(
            highlighted.len() <= 2,
            "a step highlights at most two positions, got {highlighted:?}"
        );

        Step {
            snapshot: array.to_vec(),
            highlighted,
            explanation: explanation.into(),
        }
    }
}

impl<T> Step<T> {
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    /// Positions in [`Step::snapshot`] that were compared, swapped or placed. Empty when the step
    /// only announces something.
    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }
}

/// Accumulates the steps of a single sort.
///
/// Sorters receive a `&mut Recorder` and call [`Recorder::record`] at every point worth showing.
/// All element comparisons go through [`Recorder::compare`] so that values without an ordering
/// are reported instead of silently treated as equal.
#[derive(Debug)]
pub struct Recorder<T> {
    steps: Vec<Step<T>>,
    comparisons: usize,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            comparisons: 0,
        }
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Compares `left` against `right`.
    ///
    /// Returns [`OrstError::IncomparableElements`] when the two values have no ordering.
    pub fn compare(&mut self, left: &T, right: &T) -> Result<Ordering>
    where
        T: PartialOrd + Display,
    {
        self.comparisons += 1;
        match left.partial_cmp(right) {
            Some(ordering) => Ok(ordering),
            None => Err(OrstError::IncomparableElements {
                left: left.to_string(),
                right: right.to_string(),
            }),
        }
    }

    /// Shorthand for `compare(left, right)? == Ordering::Less`.
    pub fn less(&mut self, left: &T, right: &T) -> Result<bool>
    where
        T: PartialOrd + Display,
    {
        Ok(self.compare(left, right)? == Ordering::Less)
    }

    /// Captures `array` as the next step of the trace. See [`Step::capture`].
    pub fn record(&mut self, array: &[T], indices: &[usize], explanation: impl Into<String>)
    where
        T: Clone,
    {
        let step = Step::capture(array, indices, explanation);
        log::trace!(
            "step {}: {} (highlighted: {:?})",
            self.steps.len() + 1,
            step.explanation(),
            step.highlighted()
        );
        self.steps.push(step);
    }

    /// Consumes the recorder and hands the steps over to a [`Trace`].
    pub fn finish(self, algorithm: Algorithm, input: Vec<T>) -> Trace<T> {
        Trace::new(algorithm, input, self.steps, self.comparisons)
    }
}

/// Renders values the way explanations show them: `[a, b, c]`.
pub(crate) fn list<T: Display>(values: &[T]) -> String {
    let values: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(", "))
}
