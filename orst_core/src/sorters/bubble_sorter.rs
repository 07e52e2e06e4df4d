use std::cmp::Ordering;
use std::fmt::Display;

use super::ordinal;
use crate::{Algorithm, Recorder, Result, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::{BubbleSorter, Sorter};
///
/// let trace = BubbleSorter.trace(&[1, 5, 4, 2, 3]).unwrap();
/// assert_eq!(trace.final_snapshot(), &[1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. The pass through
/// the list is repeated until the list is sorted. The
/// algorithm, which is a comparison sort, is named for the
/// way smaller or larger elements "bubble" to the top of the list.
///
/// # Recorded steps
///
/// One step per adjacent comparison, highlighting the pair only when it was swapped. The first
/// comparison of each pass also names the pass. A pass without any swap ends the sort early with
/// a final "Array is sorted." step.
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: PartialOrd + Clone + Display,
{
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn sort(&self, slice: &mut [T], recorder: &mut Recorder<T>) -> Result<()> {
        let n = slice.len();
        if n < 2 {
            return Ok(());
        }

        for pass in 0..n {
            let mut swapped = false;

            // After `pass` passes the last `pass` elements are already in place.
            for i in 0..(n - pass - 1) {
                let mut explanation = if i == 0 {
                    let target = match pass {
                        0 => String::from("largest"),
                        _ => format!("{} largest", ordinal(pass + 1)),
                    };
                    format!("Pass {}: moving the {target} element into place. ", pass + 1)
                } else {
                    String::new()
                };
                explanation.push_str(&format!("Comparing {} and {}.", slice[i], slice[i + 1]));

                if recorder.compare(&slice[i], &slice[i + 1])? == Ordering::Greater {
                    slice.swap(i, i + 1);
                    swapped = true;
                    recorder.record(slice, &[i, i + 1], explanation + " Swapped.");
                } else {
                    recorder.record(slice, &[], explanation + " No swap.");
                }
            }

            if !swapped {
                recorder.record(slice, &[], "No swaps in this pass. Array is sorted.");
                break;
            }
        }

        Ok(())
    }
}
