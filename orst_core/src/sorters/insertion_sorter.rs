use std::fmt::Display;

use crate::{Algorithm, Recorder, Result, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// # Recorded steps
///
/// For every element from the second onward: one step announcing the key, one step per
/// predecessor shifted one position to the right (highlighting source and destination), and one
/// step once the key is placed. The key is held aside while shifting, so the shift snapshots show
/// the shifted value twice.
///
/// # Usage
///```
/// use orst_core::{InsertionSorter, Sorter};
///
/// let trace = InsertionSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
///```
#[derive(Default)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()> {
        for unsorted in 1..slice.len() {
            let key = slice[unsorted].clone();
            recorder.record(
                slice,
                &[],
                format!("Inserting {key} into the sorted part of the array."),
            );

            let mut i = unsorted;
            while i > 0 && recorder.less(&key, &slice[i - 1])? {
                slice[i] = slice[i - 1].clone();
                recorder.record(
                    slice,
                    &[i - 1, i],
                    format!("Moved {} to position {i}.", slice[i]),
                );
                i -= 1;
            }

            let placed = format!("Placed {key} at position {i}.");
            slice[i] = key;
            recorder.record(slice, &[], placed);
        }

        Ok(())
    }
}
