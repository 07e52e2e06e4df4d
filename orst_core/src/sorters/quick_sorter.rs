use std::fmt::Display;

use crate::{Algorithm, Recorder, Result, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::{QuickSorter, Sorter};
///
/// let trace = QuickSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. The sub-arrays are then sorted recursively.
///
/// This sorter always takes the last element of the range as the pivot and partitions with the
/// Lomuto scheme. Elements equal to the pivot stay where they are during the scan.
///
/// # Recorded steps
///
/// Each partition announces its pivot, records every swap of an element smaller than the pivot
/// and finally records where the pivot landed, highlighting it. Ranges of one element or less
/// record nothing.
pub struct QuickSorter;

fn quicksort<T>(slice: &mut [T], low: usize, high: usize, recorder: &mut Recorder<T>) -> Result<()>
where
    T: PartialOrd + Clone + Display,
{
    if high - low <= 1 {
        return Ok(());
    }

    let pivot_index = partition(slice, low, high, recorder)?;
    let pivot = &slice[pivot_index];
    let placed = format!("Pivot {pivot} placed at index {pivot_index}.");
    recorder.record(slice, &[pivot_index], placed);

    quicksort(slice, low, pivot_index, recorder)?;
    quicksort(slice, pivot_index + 1, high, recorder)
}

/// Partitions `slice[low..high]` around its last element and returns the pivot's final index.
fn partition<T>(
    slice: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) -> Result<usize>
where
    T: PartialOrd + Clone + Display,
{
    let last = high - 1;
    let pivot = slice[last].clone();
    recorder.record(slice, &[], format!("Choosing pivot {pivot} at index {last}."));

    // Everything in `low..store` is smaller than the pivot.
    let mut store = low;
    for i in low..last {
        if recorder.less(&slice[i], &pivot)? {
            slice.swap(store, i);
            recorder.record(
                slice,
                &[store, i],
                format!("Swapped {} with {}.", slice[i], slice[store]),
            );
            store += 1;
        }
    }

    slice.swap(store, last);
    Ok(store)
}

impl<T> Sorter<T> for QuickSorter
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    #[inline]
    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()> {
        let len = slice.len();
        quicksort(slice, 0, len, recorder)
    }
}
