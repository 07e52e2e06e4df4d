use std::fmt::Display;

use crate::{Algorithm, Recorder, Result, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_core::{SelectionSorter, Sorter};
///
/// let trace = SelectionSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large lists, and generally
/// performs worse than the similar insertion sort.
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front (
/// left) of the list and a sublist of
/// the remaining unsorted items that occupy the rest of
/// the list. The algorithm proceeds by finding the smallest
/// element in the unsorted sublist, exchanging (swapping
/// ) it with the leftmost unsorted element (putting
/// it in sorted order), and moving the sublist
/// boundaries one element to the right.
///
/// # Recorded steps
///
/// Each pass announces the search for the minimum. The scan itself is not recorded; only the
/// resulting swap is, and only when the minimum was not already in place.
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()> {
        if slice.len() < 2 {
            return Ok(());
        }

        for unsorted in 0..slice.len() {
            recorder.record(
                slice,
                &[],
                format!(
                    "Pass {}: Finding the smallest element from index {unsorted} onward.",
                    unsorted + 1
                ),
            );

            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if recorder.less(&slice[i], &slice[smallest_in_rest])? {
                    smallest_in_rest = i;
                }
            }

            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
                recorder.record(
                    slice,
                    &[unsorted, smallest_in_rest],
                    format!("Swapped {} and {}.", slice[smallest_in_rest], slice[unsorted]),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let trace = SelectionSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
        assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let slice = (1..10).collect::<Vec<_>>();
        let trace = SelectionSorter.trace(&slice).unwrap();
        assert_eq!(trace.final_snapshot(), slice.as_slice());

        // Only the announcements: every minimum is already in place.
        assert_eq!(trace.len(), 9);
        assert_eq!(trace.highlighted_steps(), 0);
        assert_eq!(trace.comparisons(), 36);
    }

    #[test]
    fn very_unsorted() {
        let slice = (1..100).rev().collect::<Vec<_>>();
        let trace = SelectionSorter.trace(&slice).unwrap();
        assert_eq!(trace.final_snapshot(), (1..100).collect::<Vec<_>>());
    }

    #[test]
    fn five_three_four() {
        let trace = SelectionSorter.trace(&[5, 3, 4]).unwrap();
        let steps = trace.steps();
        assert_eq!(steps.len(), 5);

        assert_eq!(
            steps[0].explanation(),
            "Pass 1: Finding the smallest element from index 0 onward."
        );
        assert!(steps[0].highlighted().is_empty());

        assert_eq!(steps[1].explanation(), "Swapped 5 and 3.");
        assert_eq!(steps[1].snapshot(), &[3, 5, 4]);
        assert_eq!(steps[1].highlighted(), &[0, 1]);

        assert_eq!(
            steps[2].explanation(),
            "Pass 2: Finding the smallest element from index 1 onward."
        );
        assert_eq!(steps[3].explanation(), "Swapped 5 and 4.");
        assert_eq!(steps[3].snapshot(), &[3, 4, 5]);
        assert_eq!(steps[3].highlighted(), &[1, 2]);

        // The last pass finds 5 already in place and records no swap.
        assert_eq!(
            steps[4].explanation(),
            "Pass 3: Finding the smallest element from index 2 onward."
        );
        assert_eq!(steps[4].snapshot(), &[3, 4, 5]);
    }

    #[test]
    fn simple_edge_cases() {
        let empty: [i32; 0] = [];
        assert!(SelectionSorter.trace(&empty).unwrap().is_empty());

        let one = SelectionSorter.trace(&[1]).unwrap();
        assert!(one.is_empty());
        assert_eq!(one.final_snapshot(), &[1]);

        let two = SelectionSorter.trace(&[2, 1]).unwrap();
        assert_eq!(two.final_snapshot(), &[1, 2]);

        let three = SelectionSorter.trace(&[3, 1, 2]).unwrap();
        assert_eq!(three.final_snapshot(), &[1, 2, 3]);
    }
}
