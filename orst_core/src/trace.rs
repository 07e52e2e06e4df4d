use serde::Serialize;

use crate::{Algorithm, Step};

/// The ordered steps of one run of one algorithm over one input.
///
/// A trace is built by a [`Recorder`](crate::Recorder) and cannot be changed afterwards. It keeps
/// a copy of the input so that an empty trace (nothing to compare) still knows what it sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace<T> {
    algorithm: Algorithm,
    input: Vec<T>,
    comparisons: usize,
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    pub(crate) fn new(
        algorithm: Algorithm,
        input: Vec<T>,
        steps: Vec<Step<T>>,
        comparisons: usize,
    ) -> Self {
        Self {
            algorithm,
            input,
            comparisons,
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array as it was before sorting began.
    pub fn input(&self) -> &[T] {
        &self.input
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// Number of element comparisons the sorter made, including the ones it did not record as
    /// steps (the silent minimum scan of selection sort, the merge loop of merge sort).
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Number of steps that highlight at least one position.
    pub fn highlighted_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !step.highlighted().is_empty())
            .count()
    }

    /// The snapshot of the last step, or the input itself when no step was recorded.
    pub fn final_snapshot(&self) -> &[T] {
        self.steps
            .last()
            .map(Step::snapshot)
            .unwrap_or(self.input.as_slice())
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
