//! Bin labels and per-bin records.

use std::fmt;

use serde::{Serialize, Serializer};

/// One boundary of a bin label
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Real(f64),
    /// Produced by `round_intervals`; rounds half to even
    Integer(i64),
}

impl Edge {
    pub fn value(&self) -> f64 {
        match *self {
            Edge::Real(x) => x,
            Edge::Integer(i) => i as f64,
        }
    }

    fn rounded(&self) -> Edge {
        match *self {
            Edge::Real(x) => Edge::Integer(x.round_ties_even() as i64),
            Edge::Integer(i) => Edge::Integer(i),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Real(x) => write!(f, "{}", x),
            Edge::Integer(i) => write!(f, "{}", i),
        }
    }
}

/// Right-closed score interval `(left, right]`.
///
/// The lowest bin is closed on both sides so the global minimum is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub left: Edge,
    pub right: Edge,
    pub closed_left: bool,
}

impl Interval {
    pub fn new(left: f64, right: f64, closed_left: bool) -> Self {
        Self {
            left: Edge::Real(left),
            right: Edge::Real(right),
            closed_left,
        }
    }

    /// Same interval with both edges rounded to integers. Label only.
    pub fn rounded(&self) -> Self {
        Self {
            left: self.left.rounded(),
            right: self.right.rounded(),
            closed_left: self.closed_left,
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = (self.left.value(), self.right.value());
        let above = if self.closed_left { x >= lo } else { x > lo };
        above && x <= hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.closed_left { '[' } else { '(' };
        write!(f, "{}{}, {}]", open, self.left, self.right)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Event counts for one bin
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinSummary {
    pub bin: Interval,
    pub count: u64,
    pub bads: u64,
    pub goods: u64,
    pub bad_rate_in_bin: f64,
}

/// One row of the KS summary table.
///
/// Field order is the column order of the table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CumulativeRow {
    pub bin: Interval,
    pub count: u64,
    pub bads: u64,
    pub goods: u64,
    pub bad_rate_in_bin: f64,
    pub cumulative_bad_rate: f64,
    pub cumulative_good_rate: f64,
    pub ks: f64,
    pub remaining_bad_rate: f64,
}

/// Column names of the summary table, in order
pub const COLUMNS: [&str; 9] = [
    "bin",
    "count",
    "bads",
    "goods",
    "bad_rate_in_bin",
    "cumulative_bad_rate",
    "cumulative_good_rate",
    "ks",
    "remaining_bad_rate",
];
