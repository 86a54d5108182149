pub mod config;
pub mod error;
pub mod ks;
pub mod utils;

pub use config::{KsConfig, Orientation};
pub use error::{KsError, Result};
pub use ks::{
    evaluate, ks, ks_to, BinSummary, CumulativeRow, Edge, Interval, KsAccumulator, SummaryTable,
    COLUMNS, KS_SUMMARY_FILE,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
use utils::evaluation::{py_ks, KsEvaluator};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn ks_rust(_py: Python, m: &PyModule) -> PyResult<()> {
    // ks(score, target, ...):
    m.add_function(wrap_pyfunction!(py_ks, m)?)?;

    // KsEvaluator:
    m.add_class::<KsEvaluator>()?;
    Ok(())
}
