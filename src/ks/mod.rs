//! Kolmogorov-Smirnov separation for binary classification scores
//!
//! Scores are split into quantile bins, events are counted per bin, and the
//! KS statistic is the largest gap between the cumulative bad-rate and
//! good-rate curves. The walk direction follows `negative_relationship`:
//! flipping it can move the reported KS by a small amount, which is expected.

pub mod accumulator;
pub mod aggregate;
pub mod binner;
pub mod cumulative;
pub mod report;
pub mod table;
pub mod types;

use std::io::Write;
use std::path::Path;

pub use accumulator::KsAccumulator;
pub use aggregate::aggregate;
pub use binner::{quantile_bins, Binning};
pub use cumulative::cumulate;
pub use report::{format_table, ks_line, write_csv, KS_SUMMARY_FILE};
pub use table::SummaryTable;
pub use types::{BinSummary, CumulativeRow, Edge, Interval, COLUMNS};

use crate::config::KsConfig;
use crate::error::{KsError, Result};

/// Compute the KS summary table without any console or file output.
pub fn evaluate(score: &[f64], target: &[f64], config: &KsConfig) -> Result<SummaryTable> {
    config.validate()?;
    if score.len() != target.len() {
        return Err(KsError::invalid(format!(
            "score and target lengths differ ({} vs {})",
            score.len(),
            target.len()
        )));
    }

    let mut binning = quantile_bins(score, config.bins)?;
    if config.round_intervals {
        binning = binning.with_rounded_labels();
    }
    let summaries = aggregate(&binning, target)?;

    let orientation = config.orientation();
    tracing::debug!(
        event = "orientation_resolved",
        negative_relationship = config.negative_relationship,
        orientation = orientation.name(),
        "orientation resolved"
    );
    let rows = cumulate(&summaries, orientation)?;
    let table = SummaryTable::new(rows, orientation, config.bins);

    tracing::info!(
        event = "ks_computed",
        n = score.len(),
        bins = table.effective_bins(),
        ks = table.ks_statistic(),
        orientation = orientation.name(),
        "ks computed"
    );
    Ok(table)
}

/// Compute the table and report it to `out`, writing the CSV to `csv_path`
/// when `write_table` is set.
pub fn ks_to<W: Write>(
    score: &[f64],
    target: &[f64],
    config: &KsConfig,
    out: &mut W,
    csv_path: &Path,
) -> Result<SummaryTable> {
    let table = evaluate(score, target, config)?;
    let csv_path = config.write_table.then_some(csv_path);
    report::report(&table, config.print_table, csv_path, out)?;
    Ok(table)
}

/// Compute the KS summary table, print the KS line to stdout, and
/// optionally print the table and write `ks_summary_table.csv` to the
/// current directory.
///
/// # Example
/// ```
/// use ks_rust::{ks, KsConfig};
///
/// let score: Vec<f64> = (1..=100).map(f64::from).collect();
/// let target: Vec<f64> = score.iter().map(|&s| if s <= 50.0 { 1.0 } else { 0.0 }).collect();
/// let table = ks(&score, &target, &KsConfig::default()).unwrap();
/// assert_eq!(table.ks_rounded(), 1.0);
/// ```
pub fn ks(score: &[f64], target: &[f64], config: &KsConfig) -> Result<SummaryTable> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ks_to(score, target, config, &mut out, Path::new(KS_SUMMARY_FILE))
}
