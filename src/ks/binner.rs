//! Quantile binning of scores.

use crate::error::{KsError, Result};
use crate::ks::types::Interval;
use crate::utils::quantile::{label_precision, quantile_edges, round_frac};

/// Decimal places kept in bin labels, widened when labels would collide
pub const LABEL_PRECISION: i32 = 3;

/// Bins produced for one score vector
#[derive(Clone, Debug)]
pub struct Binning {
    intervals: Vec<Interval>,
    assignments: Vec<usize>,
    requested: usize,
}

impl Binning {
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Bin index of each observation, aligned with the input scores
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    pub fn requested_bins(&self) -> usize {
        self.requested
    }

    pub fn effective_bins(&self) -> usize {
        self.intervals.len()
    }

    /// Replace labels with integer-rounded ones. Membership is unchanged.
    pub fn with_rounded_labels(mut self) -> Self {
        for iv in &mut self.intervals {
            *iv = iv.rounded();
        }
        self
    }
}

/// Partition `score` into at most `bins` quantile bins.
///
/// Duplicate quantile edges are dropped, and a bin that ends up holding no
/// observations is folded into the next one, so the effective bin count can
/// be lower than requested. Every returned bin is non-empty.
pub fn quantile_bins(score: &[f64], bins: usize) -> Result<Binning> {
    if score.is_empty() {
        return Err(KsError::invalid("score is empty"));
    }
    if bins == 0 {
        return Err(KsError::invalid("bins must be a positive integer"));
    }
    if let Some(pos) = score.iter().position(|x| !x.is_finite()) {
        return Err(KsError::invalid(format!(
            "score[{}] is not finite ({})",
            pos, score[pos]
        )));
    }

    let mut sorted = score.to_vec();
    sorted.sort_by(f64::total_cmp);

    // With n observations, n bins already give every distinct score its own
    // bin; more edges only fold away
    let mut edges = quantile_edges(&sorted, bins.min(score.len()));
    edges.dedup();
    if edges.len() == 1 {
        // All scores tie: one closed bin [x, x]
        edges.push(edges[0]);
    }
    let raw_bins = edges.len() - 1;

    let raw: Vec<usize> = score
        .iter()
        .map(|&x| edges[1..].partition_point(|&e| e < x).min(raw_bins - 1))
        .collect();

    let mut counts = vec![0usize; raw_bins];
    for &k in &raw {
        counts[k] += 1;
    }

    // An empty bin folds forward by widening the next kept bin's left edge
    let mut remap = vec![0usize; raw_bins];
    let mut label_edges = vec![edges[0]];
    for k in 0..raw_bins {
        if counts[k] == 0 {
            continue;
        }
        remap[k] = label_edges.len() - 1;
        label_edges.push(edges[k + 1]);
    }

    let precision = label_precision(&label_edges, LABEL_PRECISION);
    let labels: Vec<f64> = label_edges.iter().map(|&e| round_frac(e, precision)).collect();
    let intervals: Vec<Interval> = labels
        .windows(2)
        .enumerate()
        .map(|(j, w)| Interval::new(w[0], w[1], j == 0))
        .collect();

    let assignments = raw.into_iter().map(|k| remap[k]).collect();

    if intervals.len() < bins {
        tracing::debug!(
            event = "bins_merged",
            requested = bins,
            effective = intervals.len(),
            "quantile edges collapsed"
        );
    }

    Ok(Binning {
        intervals,
        assignments,
        requested: bins,
    })
}
