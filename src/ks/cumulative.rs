//! Cumulative bad/good curves and the KS gap between them.

use crate::config::Orientation;
use crate::error::{KsError, Result};
use crate::ks::types::{BinSummary, CumulativeRow};

/// Walk order over `n` bins for the given orientation
pub fn walk_order(n: usize, orientation: Orientation) -> Vec<usize> {
    match orientation {
        Orientation::Ascending => (0..n).collect(),
        Orientation::Descending => (0..n).rev().collect(),
    }
}

/// Accumulate bins in `orientation` order.
///
/// Rows come back in the input (ascending bin) order whatever the walk
/// direction. Fails with `DegenerateInput` when either class is absent.
pub fn cumulate(summaries: &[BinSummary], orientation: Orientation) -> Result<Vec<CumulativeRow>> {
    let total_count: u64 = summaries.iter().map(|s| s.count).sum();
    let total_bads: u64 = summaries.iter().map(|s| s.bads).sum();
    let total_goods = total_count - total_bads;
    if total_bads == 0 || total_goods == 0 {
        return Err(KsError::DegenerateInput {
            bads: total_bads,
            goods: total_goods,
        });
    }

    let mut rows: Vec<Option<CumulativeRow>> = vec![None; summaries.len()];
    let (mut cum_count, mut cum_bads, mut cum_goods) = (0u64, 0u64, 0u64);

    for i in walk_order(summaries.len(), orientation) {
        let s = &summaries[i];
        // Forward-looking rate uses sums through the previous bin
        let remaining_bad_rate =
            (total_bads - cum_bads) as f64 / (total_count - cum_count) as f64;

        cum_count += s.count;
        cum_bads += s.bads;
        cum_goods += s.goods;

        let cumulative_bad_rate = cum_bads as f64 / total_bads as f64;
        let cumulative_good_rate = cum_goods as f64 / total_goods as f64;

        rows[i] = Some(CumulativeRow {
            bin: s.bin,
            count: s.count,
            bads: s.bads,
            goods: s.goods,
            bad_rate_in_bin: s.bad_rate_in_bin,
            cumulative_bad_rate,
            cumulative_good_rate,
            ks: (cumulative_bad_rate - cumulative_good_rate).abs(),
            remaining_bad_rate,
        });
    }

    Ok(rows.into_iter().flatten().collect())
}

/// Largest KS gap across rows, 0 for an empty slice
pub fn max_ks(rows: &[CumulativeRow]) -> f64 {
    rows.iter().map(|r| r.ks).fold(0.0, f64::max)
}
