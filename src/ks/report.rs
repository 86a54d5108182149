//! Console and CSV rendering of the KS summary table

use std::io::Write;
use std::path::Path;

use crate::error::{KsError, Result};
use crate::ks::cumulative::walk_order;
use crate::ks::table::SummaryTable;
use crate::ks::types::{CumulativeRow, COLUMNS};

/// File name used when `write_table` is enabled
pub const KS_SUMMARY_FILE: &str = "ks_summary_table.csv";

/// Render the table as aligned text with a header row, rows in walk order
///
/// # Example
/// ```ignore
/// let table = ks_rust::evaluate(&score, &target, &KsConfig::default())?;
/// println!("{}", format_table(&table));
/// ```
pub fn format_table(table: &SummaryTable) -> String {
    let rows: Vec<&CumulativeRow> = walked_rows(table).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.bin.to_string()).collect();
    let bin_width = labels
        .iter()
        .map(String::len)
        .chain(std::iter::once(COLUMNS[0].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:>bin_width$}", COLUMNS[0]));
    for name in &COLUMNS[1..] {
        out.push_str(&format!(" {:>width$}", name, width = name.len().max(8)));
    }
    out.push('\n');

    for (row, label) in rows.iter().zip(&labels) {
        out.push_str(&format!("{:>bin_width$}", label));
        out.push_str(&format!(" {:>8}", row.count));
        out.push_str(&format!(" {:>8}", row.bads));
        out.push_str(&format!(" {:>8}", row.goods));
        for (value, name) in [
            (row.bad_rate_in_bin, COLUMNS[4]),
            (row.cumulative_bad_rate, COLUMNS[5]),
            (row.cumulative_good_rate, COLUMNS[6]),
            (row.ks, COLUMNS[7]),
            (row.remaining_bad_rate, COLUMNS[8]),
        ] {
            out.push_str(&format!(" {:>width$.6}", value, width = name.len().max(8)));
        }
        out.push('\n');
    }
    out
}

// Rows in the order the cumulative sums were built
fn walked_rows(table: &SummaryTable) -> impl Iterator<Item = &CumulativeRow> {
    walk_order(table.rows().len(), table.orientation())
        .into_iter()
        .map(move |i| &table.rows()[i])
}

/// One-line KS summary, e.g. `KS: 0.47 out of 1.00`
pub fn ks_line(table: &SummaryTable) -> String {
    format!("KS: {:.2} out of 1.00", table.ks_rounded())
}

/// Write the table as comma-delimited text with a header and no index column,
/// rows in walk order
pub fn write_csv(table: &SummaryTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| KsError::file_write(path, e))?;
    for row in walked_rows(table) {
        writer
            .serialize(row)
            .map_err(|e| KsError::file_write(path, e))?;
    }
    writer.flush().map_err(|e| KsError::file_write(path, e))?;

    tracing::info!(
        event = "summary_table_written",
        path = %path.display(),
        rows = table.rows().len(),
        "summary table written"
    );
    Ok(())
}

/// Emit the optional table, the optional CSV, and the KS line
pub fn report<W: Write>(
    table: &SummaryTable,
    print_table: bool,
    csv_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    if print_table {
        write!(out, "{}\n\n", format_table(table)).map_err(KsError::Console)?;
    }
    if let Some(path) = csv_path {
        write_csv(table, path)?;
    }
    writeln!(out, "{}", ks_line(table)).map_err(KsError::Console)?;
    Ok(())
}
