//! Turns a trace into a single exported document.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use orst_core::{Algorithm, Trace};
use serde::Serialize;

use crate::highlight::{render_snapshot, Markdown};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Format {
    /// A readable document with one section per step
    Markdown,

    /// The raw trace as json
    Json,

    /// The raw trace as yaml
    Yaml,

    /// The raw trace as toml
    Toml,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Markdown => "md",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }

    /// `Bubble Sort` exported as markdown goes to `Bubble Sort_sorting_steps.md`.
    pub fn default_file_name(self, algorithm: Algorithm) -> PathBuf {
        PathBuf::from(format!("{algorithm}_sorting_steps.{}", self.extension()))
    }
}

/// Renders `trace` as a markdown document: a title, then one `Step N` section per step holding
/// the explanation and the snapshot with its highlighted values in bold.
pub fn markdown<T: Display>(trace: &Trace<T>) -> String {
    let mut doc = format!("# {} - Sorting Steps\n", trace.algorithm());

    if trace.is_empty() {
        let values = trace
            .input()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        doc.push_str(&format!(
            "\nNo steps were recorded, the array is already sorted.\n\n{}\n",
            values.join(" ")
        ));
        return doc;
    }

    for (n, step) in trace.iter().enumerate() {
        doc.push_str(&format!(
            "\n## Step {}\n\n{}\n\n{}\n",
            n + 1,
            step.explanation(),
            render_snapshot(step, &Markdown)
        ));
    }
    doc
}

/// Renders `trace` in the given format.
pub fn render<T>(trace: &Trace<T>, format: Format) -> anyhow::Result<String>
where
    T: Display + Serialize,
{
    let rendered = match format {
        Format::Markdown => markdown(trace),
        Format::Json => serde_json::to_string_pretty(trace)?,
        Format::Yaml => serde_yaml::to_string(trace)?,
        Format::Toml => toml::to_string_pretty(trace)?,
    };
    Ok(rendered)
}

/// Writes `trace` to `path` in the given format.
pub fn export<T>(trace: &Trace<T>, format: Format, path: &Path) -> anyhow::Result<()>
where
    T: Display + Serialize,
{
    let rendered = render(trace, format)
        .with_context(|| format!("Unable to render the {} trace", trace.algorithm()))?;

    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut buf_writer = BufWriter::new(file);
    buf_writer.write_all(rendered.as_bytes())?;
    buf_writer.flush()?;

    log::info!(
        "wrote {} steps of {} to {}",
        trace.len(),
        trace.algorithm(),
        path.display()
    );
    Ok(())
}
