//! Runs every algorithm over the same input and tabulates how much work each one showed.

use std::fmt::Display;

use colored::Colorize;
use orst_core::Algorithm;
use prettytable::{row, Table};

/// One row per algorithm: recorded steps, comparisons made and steps that highlight something.
pub fn summary_table<T>(input: &[T]) -> orst_core::Result<Table>
where
    T: PartialOrd + Clone + Display,
{
    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Steps Recorded".bold(),
        "Comparisons Made".bold(),
        "Highlighted Steps".bold()
    ]);

    for algorithm in Algorithm::ALL {
        let trace = algorithm.trace(input)?;
        table.add_row(row![
            algorithm.to_string(),
            trace.len().to_string(),
            trace.comparisons().to_string(),
            trace.highlighted_steps().to_string()
        ]);
    }

    Ok(table)
}
