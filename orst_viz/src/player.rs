//! Plays a trace back in the terminal, one step at a time.

use std::fmt::Display;
use std::thread::sleep;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use orst_core::{Step, Trace};

use crate::highlight::{render_snapshot, Highlighter};

/// Prints the steps of a [`Trace`] in order, pausing between them.
pub struct Player {
    highlighter: Box<dyn Highlighter>,
    delay: Duration,
}

impl Player {
    pub fn new(highlighter: Box<dyn Highlighter>, delay: Duration) -> Self {
        Self { highlighter, delay }
    }

    pub fn play<T: Display>(&self, trace: &Trace<T>) -> anyhow::Result<()> {
        println!(
            "{} {}",
            "==>".green().bold(),
            trace.algorithm().to_string().magenta().bold().underline()
        );

        if trace.is_empty() {
            println!(
                "\n{} {}",
                "Nothing to compare, the array is already sorted:".italic(),
                trace
                    .input()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            return Ok(());
        }

        let pb = ProgressBar::new(trace.len() as u64);
        pb.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Step ({pos}/{len})",
        )?);

        for (n, step) in trace.iter().enumerate() {
            let text = render_step(n + 1, step, self.highlighter.as_ref());
            pb.suspend(|| println!("\n{text}"));
            pb.inc(1);

            if !self.delay.is_zero() {
                sleep(self.delay);
            }
        }
        pb.finish_and_clear();

        println!(
            "\n{} {} steps, {} comparisons",
            "==>".green().bold(),
            trace.len().to_string().bold().cyan(),
            trace.comparisons().to_string().bold().cyan()
        );
        Ok(())
    }
}

/// The two lines shown for a step: its number and explanation, then the array.
pub fn render_step<T, H>(number: usize, step: &Step<T>, highlighter: &H) -> String
where
    T: Display,
    H: Highlighter + ?Sized,
{
    format!(
        "Step {number}: {}\nArray: {}",
        step.explanation(),
        render_snapshot(step, highlighter)
    )
}
