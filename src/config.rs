//! KS configuration

use serde::{Deserialize, Serialize};

use crate::error::{KsError, Result};

/// Walk direction used when accumulating bins
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Lowest bin first: a low score means a high event probability
    Ascending,
    /// Highest bin first: a low score means a low event probability
    Descending,
}

impl Orientation {
    /// Resolve the orientation from the `negative_relationship` flag
    pub fn from_negative_relationship(negative_relationship: bool) -> Self {
        if negative_relationship {
            Orientation::Ascending
        } else {
            Orientation::Descending
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Ascending => "ascending",
            Orientation::Descending => "descending",
        }
    }
}

/// Configuration for a KS evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KsConfig {
    /// Requested number of quantile bins (may shrink on tied edges)
    pub bins: usize,
    /// Low score means high event probability
    pub negative_relationship: bool,
    /// Round bin edges to integers in labels
    pub round_intervals: bool,
    /// Print the full summary table
    pub print_table: bool,
    /// Persist the summary table as `ks_summary_table.csv`
    pub write_table: bool,
}

impl Default for KsConfig {
    fn default() -> Self {
        Self {
            bins: 10,
            negative_relationship: true,
            round_intervals: false,
            print_table: false,
            write_table: false,
        }
    }
}

impl KsConfig {
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_negative_relationship(mut self, negative_relationship: bool) -> Self {
        self.negative_relationship = negative_relationship;
        self
    }

    pub fn with_round_intervals(mut self, round_intervals: bool) -> Self {
        self.round_intervals = round_intervals;
        self
    }

    pub fn with_print_table(mut self, print_table: bool) -> Self {
        self.print_table = print_table;
        self
    }

    pub fn with_write_table(mut self, write_table: bool) -> Self {
        self.write_table = write_table;
        self
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_negative_relationship(self.negative_relationship)
    }

    /// Reject configurations that can never produce a table
    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(KsError::invalid("bins must be a positive integer"));
        }
        Ok(())
    }
}
