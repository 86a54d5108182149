//! Per-bin event counts.

use crate::error::{KsError, Result};
use crate::ks::binner::Binning;
use crate::ks::types::BinSummary;

/// Check that every label is exactly 0 or 1
pub fn validate_labels(target: &[f64]) -> Result<()> {
    match target.iter().position(|&y| y != 0.0 && y != 1.0) {
        Some(pos) => Err(KsError::invalid(format!(
            "target[{}] must be 0 or 1, got {}",
            pos, target[pos]
        ))),
        None => Ok(()),
    }
}

/// Count observations and events in each bin, in ascending bin order.
pub fn aggregate(binning: &Binning, target: &[f64]) -> Result<Vec<BinSummary>> {
    let assignments = binning.assignments();
    if assignments.len() != target.len() {
        return Err(KsError::invalid(format!(
            "score and target lengths differ ({} vs {})",
            assignments.len(),
            target.len()
        )));
    }
    validate_labels(target)?;

    let n_bins = binning.effective_bins();
    let mut counts = vec![0u64; n_bins];
    let mut bads = vec![0u64; n_bins];
    for (&k, &y) in assignments.iter().zip(target) {
        counts[k] += 1;
        if y == 1.0 {
            bads[k] += 1;
        }
    }

    Ok(binning
        .intervals()
        .iter()
        .zip(counts.into_iter().zip(bads))
        .map(|(&bin, (count, bads))| BinSummary {
            bin,
            count,
            bads,
            goods: count - bads,
            bad_rate_in_bin: bads as f64 / count as f64,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ks::binner::quantile_bins;

    #[test]
    fn test_counts_and_rates() {
        let score = [1.0, 2.0, 3.0, 4.0];
        let target = [1.0, 1.0, 0.0, 1.0];
        let binning = quantile_bins(&score, 2).unwrap();
        let summaries = aggregate(&binning, &target).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!((summaries[0].count, summaries[0].bads, summaries[0].goods), (2, 2, 0));
        assert_eq!(summaries[0].bad_rate_in_bin, 1.0);
        assert_eq!((summaries[1].count, summaries[1].bads, summaries[1].goods), (2, 1, 1));
        assert_eq!(summaries[1].bad_rate_in_bin, 0.5);
    }

    #[test]
    fn test_single_class_bin_has_no_division_error() {
        let score = [1.0, 2.0, 3.0, 4.0];
        let target = [0.0, 0.0, 1.0, 1.0];
        let binning = quantile_bins(&score, 2).unwrap();
        let summaries = aggregate(&binning, &target).unwrap();
        assert_eq!(summaries[0].bad_rate_in_bin, 0.0);
        assert_eq!(summaries[1].bad_rate_in_bin, 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let binning = quantile_bins(&[1.0, 2.0], 2).unwrap();
        let err = aggregate(&binning, &[1.0]).unwrap_err();
        assert!(format!("{}", err).contains("lengths differ"));
    }

    #[test]
    fn test_non_binary_label() {
        let binning = quantile_bins(&[1.0, 2.0], 2).unwrap();
        assert!(matches!(
            aggregate(&binning, &[1.0, 2.0]),
            Err(KsError::InvalidInput(_))
        ));
        assert!(validate_labels(&[0.0, f64::NAN]).is_err());
    }
}
