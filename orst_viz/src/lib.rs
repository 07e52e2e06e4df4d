//! # Introduction
//!
//! Everything that shows a sorting [`Trace`](orst_core::Trace) to a person: a terminal player
//! that walks through the steps, an exporter that writes the steps to a document, and a table
//! comparing all five algorithms on the same input.
//!
//! Install the `orst` crate and run `orst --help` to see the commands built on top of this.

pub mod document;
pub mod highlight;
pub mod player;
pub mod summary;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use colored::Colorize;
use orst_core::Algorithm;

use document::Format;
use highlight::{Ansi, Brackets, Highlighter};
use player::Player;

/// The array sorted when `--values` is not given.
pub const DEMO_ARRAY: [i64; 18] = [
    456, 125, 59, 23, 45, 9, 234, 6, 450, 389, 148, 78, 28, 97, 208, 109, 2, 5,
];

#[derive(Debug, Args)]
pub struct ValuesArg {
    /// Comma separated integers to sort. Defaults to a fixed demo array.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEMO_ARRAY.to_vec()
    )]
    values: Vec<i64>,
}

/// Step through a sort in the terminal.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Sorting algorithm: bubble, insertion, selection, quick or merge
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    #[command(flatten)]
    values: ValuesArg,

    /// Milliseconds to wait between two steps
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Mark highlighted values with brackets instead of colors
    #[arg(long, required = false)]
    plain: bool,
}

impl PlayArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let trace = self.algorithm.trace(&self.values.values)?;

        let highlighter: Box<dyn Highlighter> = if self.plain {
            Box::new(Brackets)
        } else {
            Box::new(Ansi)
        };

        Player::new(highlighter, Duration::from_millis(self.delay_ms)).play(&trace)
    }
}

/// Write the steps of a sort to a file.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Sorting algorithm: bubble, insertion, selection, quick or merge
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    #[command(flatten)]
    values: ValuesArg,

    /// Export in the provided format.
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Path to write the document to. Defaults to `<Algorithm>_sorting_steps.<ext>`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let trace = self.algorithm.trace(&self.values.values)?;
        let output = self
            .output
            .unwrap_or_else(|| self.format.default_file_name(self.algorithm));

        document::export(&trace, self.format, &output)?;

        println!(
            "{} Wrote {} steps to {}",
            "==>".green().bold(),
            trace.len().to_string().bold().cyan(),
            output.display().to_string().bold()
        );
        Ok(())
    }
}

/// Compare all five algorithms on the same input.
#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    values: ValuesArg,
}

impl SummaryArgs {
    pub fn run(self) -> anyhow::Result<()> {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            self.values.values.len().to_string().bold()
        );

        summary::summary_table(&self.values.values)?.printstd();
        println!();
        Ok(())
    }
}
