//! # Introduction
//!
//! Classic comparison sorts that explain themselves. Every sorter in this crate sorts a slice in
//! place while recording a [`Trace`]: a snapshot of the array, the positions involved and a short
//! sentence at each comparison, swap, partition, split and merge.
//!
//! # Example
//!
//! ```
//! use orst_core::Algorithm;
//!
//! let trace = Algorithm::Bubble.trace(&[3, 1, 2]).unwrap();
//!
//! assert_eq!(trace.final_snapshot(), &[1, 2, 3]);
//!
//! let first = &trace.steps()[0];
//! assert_eq!(first.snapshot(), &[1, 3, 2]);
//! assert_eq!(first.highlighted(), &[0, 1]);
//! assert!(first.explanation().ends_with("Comparing 3 and 1. Swapped."));
//! ```
//!
//! The same thing with a concrete sorter:
//!
//! ```
//! use orst_core::{MergeSorter, Sorter};
//!
//! let trace = MergeSorter.trace(&[4, 2]).unwrap();
//! assert_eq!(trace.len(), 2);
//! assert_eq!(trace.final_snapshot(), &[2, 4]);
//! ```

mod algorithm;
mod error;
mod recorder;
mod sorters;
mod trace;

use std::fmt::Display;

pub use algorithm::Algorithm;
pub use error::{OrstError, Result};
pub use recorder::{Recorder, Step};
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use trace::Trace;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `sort` rearranges `slice` in ascending order and records its progress in `recorder`. It must
/// leave the slice sorted when it returns `Ok`, and it must record a step after the last
/// mutation it makes so that the final snapshot of the trace is the sorted array.
pub trait Sorter<T>
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm;

    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()>;

    /// Sorts a private copy of `input` and returns the finished trace. `input` itself is never
    /// touched.
    fn trace(&self, input: &[T]) -> Result<Trace<T>> {
        let algorithm = self.algorithm();
        log::debug!("{algorithm}: tracing {} elements", input.len());

        let mut working = input.to_vec();
        let mut recorder = Recorder::new();
        self.sort(&mut working, &mut recorder)?;

        log::debug!(
            "{algorithm}: finished with {} steps and {} comparisons",
            recorder.len(),
            recorder.comparisons()
        );
        Ok(recorder.finish(algorithm, input.to_vec()))
    }
}
