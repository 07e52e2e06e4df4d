use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::{
    BubbleSorter, InsertionSorter, MergeSorter, OrstError, QuickSorter, Result, SelectionSorter,
    Sorter, Trace,
};

/// Selects one of the five supported sorting algorithms.
///
/// Parse it from a user supplied name with [`str::parse`]:
///
/// ```
/// use orst_core::{Algorithm, OrstError};
///
/// assert_eq!("Quick Sort".parse::<Algorithm>(), Ok(Algorithm::Quick));
/// assert_eq!("merge-sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
/// assert_eq!(
///     "bogo".parse::<Algorithm>(),
///     Err(OrstError::UnknownAlgorithm("bogo".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Short lower-case name, e.g. `"bubble"`.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Runs the matching sorter over a copy of `input`.
    pub fn trace<T>(self, input: &[T]) -> Result<Trace<T>>
    where
        T: PartialOrd + Clone + Display,
    {
        match self {
            Algorithm::Bubble => BubbleSorter.trace(input),
            Algorithm::Insertion => InsertionSorter.trace(input),
            Algorithm::Selection => SelectionSorter.trace(input),
            Algorithm::Quick => QuickSorter.trace(input),
            Algorithm::Merge => MergeSorter.trace(input),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        };
        f.write_str(title)
    }
}

impl FromStr for Algorithm {
    type Err = OrstError;

    /// Accepts the slug or the title in any case, with an optional `sort` suffix separated by a
    /// space, `-` or `_`.
    fn from_str(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase().replace(['-', '_'], " ");
        let base = normalized
            .strip_suffix(" sort")
            .unwrap_or(&normalized)
            .trim_end();

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.slug() == base)
            .ok_or_else(|| OrstError::UnknownAlgorithm(name.to_string()))
    }
}
