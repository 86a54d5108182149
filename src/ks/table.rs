//! KS summary table.

use std::fmt;

use crate::config::Orientation;
use crate::ks::cumulative::max_ks;
use crate::ks::report::format_table;
use crate::ks::types::CumulativeRow;

/// Summary rows in ascending bin order plus the walk direction used
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryTable {
    rows: Vec<CumulativeRow>,
    orientation: Orientation,
    requested_bins: usize,
}

impl SummaryTable {
    pub(crate) fn new(rows: Vec<CumulativeRow>, orientation: Orientation, requested_bins: usize) -> Self {
        Self {
            rows,
            orientation,
            requested_bins,
        }
    }

    pub fn rows(&self) -> &[CumulativeRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CumulativeRow> {
        self.rows
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn requested_bins(&self) -> usize {
        self.requested_bins
    }

    pub fn effective_bins(&self) -> usize {
        self.rows.len()
    }

    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn total_bads(&self) -> u64 {
        self.rows.iter().map(|r| r.bads).sum()
    }

    /// Maximum KS gap across bins, in `[0, 1]`
    pub fn ks_statistic(&self) -> f64 {
        max_ks(&self.rows)
    }

    /// KS statistic rounded to 2 decimals for display, halves to even
    pub fn ks_rounded(&self) -> f64 {
        (self.ks_statistic() * 100.0).round_ties_even() / 100.0
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_table(self))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::KsConfig;
    use crate::ks::{evaluate, ks_line};

    #[test]
    fn test_ks_rounding_half_to_even() {
        let score: Vec<f64> = (1..=16).map(f64::from).collect();
        let target: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { 0.0 }).collect();
        let table = evaluate(&score, &target, &KsConfig::default().with_bins(16)).unwrap();

        assert_eq!(table.ks_statistic(), 0.125);
        assert_eq!(table.ks_rounded(), 0.12);
        assert_eq!(ks_line(&table), "KS: 0.12 out of 1.00");
    }
}
