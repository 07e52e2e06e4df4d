//! Highlighting conventions for the positions a step marks.

use std::fmt::Display;

use colored::Colorize;
use orst_core::Step;

/// How a highlighted value is set apart from the rest of a snapshot.
pub trait Highlighter {
    fn mark(&self, value: &str) -> String;
}

/// Bold red text for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Highlighter for Ansi {
    fn mark(&self, value: &str) -> String {
        value.red().bold().to_string()
    }
}

/// Markdown strong emphasis: `**value**`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Highlighter for Markdown {
    fn mark(&self, value: &str) -> String {
        format!("**{value}**")
    }
}

/// Plain text brackets: `[value]`. For output that is neither a terminal nor markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brackets;

impl Highlighter for Brackets {
    fn mark(&self, value: &str) -> String {
        format!("[{value}]")
    }
}

/// Renders the snapshot of `step` as a space separated list, marking the highlighted positions.
///
/// ```
/// use orst_core::Step;
/// use orst_viz::highlight::{render_snapshot, Brackets};
///
/// let step = Step::capture(&[1, 3, 2], &[1, 2], "Swapped.");
/// assert_eq!(render_snapshot(&step, &Brackets), "1 [3] [2]");
/// ```
pub fn render_snapshot<T, H>(step: &Step<T>, highlighter: &H) -> String
where
    T: Display,
    H: Highlighter + ?Sized,
{
    step.snapshot()
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let value = value.to_string();
            if step.is_highlighted(i) {
                highlighter.mark(&value)
            } else {
                value
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_highlighted() {
        let step = Step::capture(&[4, 2], &[], "Splitting.");
        assert_eq!(render_snapshot(&step, &Markdown), "4 2");
    }

    #[test]
    fn markdown_bolds_highlighted_values() {
        let step = Step::capture(&[-4, 17, 2], &[0, 2], "Swapped.");
        assert_eq!(render_snapshot(&step, &Markdown), "**-4** 17 **2**");
    }

    #[test]
    fn works_through_a_trait_object() {
        let highlighter: Box<dyn Highlighter> = Box::new(Brackets);
        let step = Step::capture(&[5], &[0], "Placed.");
        assert_eq!(render_snapshot(&step, highlighter.as_ref()), "[5]");
    }

    #[test]
    fn ansi_keeps_the_value() {
        assert!(Ansi.mark("42").contains("42"));
    }
}
