//! Empirical quantiles over sorted samples.

/// Quantile of an ascending-sorted slice using linear interpolation between
/// order statistics (position `(n - 1) * p`).
///
/// # Arguments
/// * `sorted` - Non-empty samples in ascending order
/// * `p` - Probability in `[0, 1]`; values outside are clamped
pub fn linear_quantile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    if lo >= n - 1 {
        return sorted[n - 1];
    }
    let frac = h - lo as f64;
    let (a, b) = (sorted[lo], sorted[lo + 1]);
    if frac == 0.0 || a == b {
        a
    } else {
        a + frac * (b - a)
    }
}

/// Edges at the `i / bins` quantiles for `i = 0..=bins`.
pub fn quantile_edges(sorted: &[f64], bins: usize) -> Vec<f64> {
    (0..=bins)
        .map(|i| linear_quantile(sorted, i as f64 / bins as f64))
        .collect()
}

/// Round a label edge to `precision` decimals, or to `precision` significant
/// digits when `|x| < 1`. Halves go to even.
pub fn round_frac(x: f64, precision: i32) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let digits = if x.trunc() == 0.0 {
        -(x.fract().abs().log10().floor() as i32) - 1 + precision
    } else {
        precision
    };
    let scale = 10f64.powi(digits);
    (x * scale).round_ties_even() / scale
}

/// Smallest precision from `base` up that keeps distinct edges distinct
/// after `round_frac`.
pub fn label_precision(edges: &[f64], base: i32) -> i32 {
    (base..20)
        .find(|&p| {
            edges
                .windows(2)
                .all(|w| w[0] == w[1] || round_frac(w[0], p) != round_frac(w[1], p))
        })
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_sample() {
        assert_eq!(linear_quantile(&[3.5], 0.0), 3.5);
        assert_eq!(linear_quantile(&[3.5], 0.7), 3.5);
        assert_eq!(linear_quantile(&[3.5], 1.0), 3.5);
    }

    #[test]
    fn test_endpoints_are_min_and_max() {
        let xs = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(linear_quantile(&xs, 0.0), 1.0);
        assert_eq!(linear_quantile(&xs, 1.0), 8.0);
    }

    #[test]
    fn test_interpolates_between_order_statistics() {
        let xs: Vec<f64> = (1..=10).map(|i| f64::from(i) * 10.0).collect();
        // h = 9 * 0.2 = 1.8 -> 20 + 0.8 * 10
        assert_abs_diff_eq!(linear_quantile(&xs, 0.2), 28.0, epsilon = 1e-9);
        assert_abs_diff_eq!(linear_quantile(&xs, 0.5), 55.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ties_yield_duplicate_edges() {
        let xs = [0.0, 0.0, 0.0, 0.0, 5.0];
        let edges = quantile_edges(&xs, 4);
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[1], 0.0);
        assert_eq!(edges[2], 0.0);
        assert_eq!(edges[4], 5.0);
    }

    #[test]
    fn test_round_frac_hides_interpolation_noise() {
        assert_eq!(round_frac(63.99999999999999, 3), 64.0);
        assert_eq!(round_frac(10.9, 3), 10.9);
        assert_eq!(round_frac(-2.71828, 3), -2.718);
        assert_eq!(round_frac(0.0, 3), 0.0);
    }

    #[test]
    fn test_round_frac_small_values_keep_significant_digits() {
        assert_abs_diff_eq!(round_frac(0.000123456, 3), 0.000123, epsilon = 1e-15);
        assert_abs_diff_eq!(round_frac(-0.5678, 3), -0.568, epsilon = 1e-15);
    }

    #[test]
    fn test_label_precision_widens_on_collision() {
        assert_eq!(label_precision(&[1.0, 2.0, 3.0], 3), 3);
        assert_eq!(label_precision(&[1.00001, 1.00002], 3), 5);
        // Repeated raw edges never force extra digits
        assert_eq!(label_precision(&[3.0, 3.0], 3), 3);
    }
}
