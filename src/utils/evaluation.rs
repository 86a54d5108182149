use pyo3::prelude::*;
use pyo3::types::PyAny;

use crate::config::KsConfig;
use crate::ks::accumulator::KsAccumulator;
use crate::utils::convert::{positive_bins, table_to_dict, to_f64_vec};

/// ks(score, target, bins=10, negative_relationship=True, round_intervals=False, print_table=False, write_table=False)
///
/// Prints the KS line (and optionally the table), optionally writes
/// `ks_summary_table.csv` to the working directory, and returns the
/// summary table as a dict of columns.
#[pyfunction]
#[pyo3(
    name = "ks",
    signature = (score, target, bins=10, negative_relationship=true, round_intervals=false, print_table=false, write_table=false)
)]
#[allow(clippy::too_many_arguments)]
pub fn py_ks(
    py: Python,
    score: &PyAny,
    target: &PyAny,
    bins: i64,
    negative_relationship: bool,
    round_intervals: bool,
    print_table: bool,
    write_table: bool,
) -> PyResult<PyObject> {
    let score = to_f64_vec(score, "score")?;
    let target = to_f64_vec(target, "target")?;
    let config = KsConfig {
        bins: positive_bins(bins)?,
        negative_relationship,
        round_intervals,
        print_table,
        write_table,
    };

    let table = crate::ks::ks(&score, &target, &config)?;
    Ok(table_to_dict(py, &table)?.into())
}

/// Collects (label, score) pairs and computes the KS table on demand
#[pyclass]
pub struct KsEvaluator {
    inner: KsAccumulator,
}

#[pymethods]
impl KsEvaluator {
    #[new]
    #[pyo3(signature = (bins=10, negative_relationship=true, round_intervals=false))]
    fn new(bins: i64, negative_relationship: bool, round_intervals: bool) -> PyResult<Self> {
        let config = KsConfig::default()
            .with_bins(positive_bins(bins)?)
            .with_negative_relationship(negative_relationship)
            .with_round_intervals(round_intervals);
        Ok(KsEvaluator {
            inner: KsAccumulator::new(config)?,
        })
    }

    #[getter]
    fn true_labels(&self) -> Vec<f64> {
        self.inner.true_labels().to_vec()
    }

    #[getter]
    fn scores(&self) -> Vec<f64> {
        self.inner.scores().to_vec()
    }

    /// Number of observations collected so far
    #[getter]
    fn processed_instances(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    fn bins(&self) -> usize {
        self.inner.config().bins
    }

    /// Add one observation
    #[pyo3(name = "update")]
    fn update(&mut self, true_label: f64, score: f64) -> PyResult<()> {
        Ok(self.inner.update(true_label, score)?)
    }

    /// Summary table over everything seen so far, plus a "ks_statistic" entry
    #[pyo3(name = "summary")]
    fn summary(&self, py: Python) -> PyResult<PyObject> {
        let table = self.inner.summary()?;
        let results = table_to_dict(py, &table)?;
        results.set_item("ks_statistic", table.ks_statistic())?;
        Ok(results.into())
    }

    /// Drop all collected observations
    #[pyo3(name = "reset")]
    fn reset(&mut self) {
        self.inner.reset();
    }
}
