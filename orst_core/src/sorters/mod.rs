pub mod bubble_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;

/// `1` -> `"1st"`, `12` -> `"12th"`, `23` -> `"23rd"`.
pub(crate) fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
