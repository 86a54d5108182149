use ndarray::ArrayView1;
use numpy::{Element, PyArray1};
use pyo3::exceptions::{PyIOError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict};

use crate::error::KsError;
use crate::ks::SummaryTable;

impl From<KsError> for PyErr {
    fn from(err: KsError) -> PyErr {
        match err {
            KsError::InvalidInput(_) | KsError::DegenerateInput { .. } => {
                PyValueError::new_err(err.to_string())
            }
            KsError::FileWrite { .. } | KsError::Console(_) => PyIOError::new_err(err.to_string()),
        }
    }
}

// Cast a numpy array of dtype T to f64, None if `x` is not a PyArray1<T>
fn cast_array<'a, T: Element>(x: &'a PyAny) -> Option<PyResult<&'a PyArray1<f64>>> {
    let arr = x.extract::<&'a PyArray1<T>>().ok()?;
    Some(
        arr.cast::<f64>(false)
            .map_err(|e| PyTypeError::new_err(format!("Failed to cast array to f64: {}", e))),
    )
}

/// Copy a numpy array (any common numeric dtype) or a Python sequence into a Vec<f64>
pub fn to_f64_vec(x: &PyAny, name: &str) -> PyResult<Vec<f64>> {
    let arr = if let Ok(arr) = x.extract::<&PyArray1<f64>>() {
        Some(Ok(arr))
    } else {
        cast_array::<f32>(x)
            .or_else(|| cast_array::<i64>(x))
            .or_else(|| cast_array::<i32>(x))
            .or_else(|| cast_array::<i16>(x))
            .or_else(|| cast_array::<u8>(x))
            .or_else(|| cast_array::<u16>(x))
            .or_else(|| cast_array::<u32>(x))
            .or_else(|| cast_array::<u64>(x))
            .or_else(|| cast_array::<bool>(x))
    };

    match arr {
        Some(arr) => {
            let readonly = arr?.readonly();
            let view: ArrayView1<f64> = readonly.as_array();
            Ok(view.iter().copied().collect())
        }
        None => x.extract::<Vec<f64>>().map_err(|_| {
            PyTypeError::new_err(format!(
                "Unsupported input '{}': expected a 1-d numeric array or sequence of numbers",
                name
            ))
        }),
    }
}

/// Signed bin count from Python into a positive usize
pub fn positive_bins(bins: i64) -> Result<usize, KsError> {
    usize::try_from(bins)
        .ok()
        .filter(|&b| b > 0)
        .ok_or_else(|| KsError::invalid(format!("bins must be a positive integer, got {}", bins)))
}

/// Summary table as a column dict, ready for `pandas.DataFrame(...)`
pub fn table_to_dict<'py>(py: Python<'py>, table: &SummaryTable) -> PyResult<&'py PyDict> {
    let rows = table.rows();
    let dict = PyDict::new(py);
    dict.set_item("bin", rows.iter().map(|r| r.bin.to_string()).collect::<Vec<_>>())?;
    dict.set_item("count", rows.iter().map(|r| r.count).collect::<Vec<_>>())?;
    dict.set_item("bads", rows.iter().map(|r| r.bads).collect::<Vec<_>>())?;
    dict.set_item("goods", rows.iter().map(|r| r.goods).collect::<Vec<_>>())?;
    dict.set_item(
        "bad_rate_in_bin",
        rows.iter().map(|r| r.bad_rate_in_bin).collect::<Vec<_>>(),
    )?;
    dict.set_item(
        "cumulative_bad_rate",
        rows.iter().map(|r| r.cumulative_bad_rate).collect::<Vec<_>>(),
    )?;
    dict.set_item(
        "cumulative_good_rate",
        rows.iter().map(|r| r.cumulative_good_rate).collect::<Vec<_>>(),
    )?;
    dict.set_item("ks", rows.iter().map(|r| r.ks).collect::<Vec<_>>())?;
    dict.set_item(
        "remaining_bad_rate",
        rows.iter().map(|r| r.remaining_bad_rate).collect::<Vec<_>>(),
    )?;
    Ok(dict)
}
