//! Rendering estimates for the command line.
use clap::ValueEnum;
use tabled::{Table, Tabled, settings::Style};

use crate::estimator::{Estimate, TrialOutcome};

/// Output format of the `percolation` binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The three summary lines
    #[default]
    Plain,
    /// Summary as a table, followed by a per-trial table
    Table,
    /// One CSV row per trial
    Csv,
    /// The whole estimate as JSON
    Json,
}

/// A row type that can be written as CSV.
pub trait Formattable: Tabled {
    fn to_csv_row(&self) -> Vec<String>;

    fn csv_headers() -> Vec<&'static str>;
}

impl Formattable for TrialOutcome {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.open_sites.to_string(),
            self.fraction.to_string(),
            self.time.as_nanos().to_string(),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["open_sites", "fraction", "time_ns"]
    }
}

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Tabled>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());

        table.to_string()
    }
}

pub struct CsvFormatter;

impl CsvFormatter {
    /// Formats `items` as CSV with a leading 1-based `trial` column.
    pub fn format<T: Formattable>(items: &[T]) -> anyhow::Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut headers = vec!["trial"];
        headers.extend(T::csv_headers());
        writer.write_record(&headers)?;

        for (index, item) in items.iter().enumerate() {
            let mut row = vec![(index + 1).to_string()];
            row.extend(item.to_csv_row());
            writer.write_record(&row)?;
        }

        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// The classic three-line summary, labels left-aligned in a 20 column field.
pub fn summary_lines(estimate: &Estimate) -> String {
    let stats = &estimate.stats;
    format!(
        "{:<20}= {:.6}\n{:<20}= {:.6}\n{:<20}= {:.6}, {:.6}\n",
        "mean",
        stats.mean,
        "stddev",
        stats.stddev,
        "95% confidence interval",
        stats.confidence_lo,
        stats.confidence_hi
    )
}

pub fn render(estimate: &Estimate, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Plain => summary_lines(estimate),
        OutputFormat::Table => format!(
            "{}\n{}\n",
            PrettyFormatter::format(&[estimate.stats]),
            PrettyFormatter::format(&estimate.outcomes)
        ),
        OutputFormat::Csv => CsvFormatter::format(&estimate.outcomes)?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(estimate)?),
    })
}
