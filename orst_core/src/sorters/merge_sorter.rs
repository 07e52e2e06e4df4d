use std::fmt::Display;

use crate::recorder::list;
use crate::{Algorithm, Recorder, Result, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_core::{MergeSorter, Sorter};
///
/// let trace = MergeSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Merge sort divides the unsorted list into two halves, sorts each half recursively and then
/// merges the two sorted halves back together. The merge is stable: when two elements compare
/// equal the one from the left half is written first.
///
/// For a range of odd length the left half gets the extra element.
///
/// # Recorded steps
///
/// One step announcing every split (with the values of both halves at that moment) and one step
/// per merge naming the two halves that were merged. The element-by-element merge itself is not
/// recorded. The merge step is taken once the merge has been written back, so the last step of a
/// trace always shows the sorted array.
pub struct MergeSorter;

fn merge_sort<T>(slice: &mut [T], low: usize, high: usize, recorder: &mut Recorder<T>) -> Result<()>
where
    T: PartialOrd + Clone + Display,
{
    if high - low <= 1 {
        return Ok(());
    }

    let mid = low + (high - low).div_ceil(2);
    recorder.record(
        slice,
        &[],
        format!(
            "Splitting array into two halves: {} and {}.",
            list(&slice[low..mid]),
            list(&slice[mid..high])
        ),
    );

    merge_sort(slice, low, mid, recorder)?;
    merge_sort(slice, mid, high, recorder)?;
    merge(slice, low, mid, high, recorder)
}

/// Merges the sorted runs `slice[low..mid]` and `slice[mid..high]` in place.
fn merge<T>(
    slice: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) -> Result<()>
where
    T: PartialOrd + Clone + Display,
{
    let left = slice[low..mid].to_vec();
    let right = slice[mid..high].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut slice[low..high] {
        // Left wins ties: only a strictly smaller right element goes first.
        let take_right =
            i == left.len() || (j < right.len() && recorder.less(&right[j], &left[i])?);

        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }

    recorder.record(
        slice,
        &[],
        format!("Merging {} and {}.", list(&left), list(&right)),
    );
    Ok(())
}

impl<T> Sorter<T> for MergeSorter
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()> {
        let len = slice.len();
        merge_sort(slice, 0, len, recorder)
    }
}
