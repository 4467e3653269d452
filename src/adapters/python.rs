//! Python Bindings for OPTICS ordering
//!
//! Exposes the Rust engine to Python via PyO3.
//!
//! ## Usage
//! ```python
//! from optics_ordering import optics, optics_from_text
//!
//! records = [(0.0, 0.0, "A"), (0.0, 1.0, "B"), (0.0, 2.0, "C")]
//! for label, reachability, core in optics(records, min_pts=2, epsilon=5.0):
//!     print(label, reachability, core)   # None for undefined
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::adapters::input::load_points;
use crate::core::{ClusterOrdering, LabeledPoint, OpticsConfig};
use crate::engine::OpticsEngine;
use crate::error::OpticsError;

type Row = (String, Option<f64>, Option<f64>);

fn to_py_err(err: OpticsError) -> PyErr {
    match err {
        OpticsError::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn rows(ordering: ClusterOrdering) -> Vec<Row> {
    ordering
        .into_iter()
        .map(|e| (e.label.into_string(), e.reachability, e.core_distance))
        .collect()
}

fn run(points: &[LabeledPoint], min_pts: usize, epsilon: f64, precompute: bool) -> PyResult<Vec<Row>> {
    let config = OpticsConfig::new(min_pts, epsilon).with_precompute(precompute);
    let engine = OpticsEngine::new(config).map_err(to_py_err)?;
    engine.run(points).map(rows).map_err(to_py_err)
}

/// OPTICS ordering of `(x, y, label)` records
///
/// Returns `(label, reachability, core_distance)` tuples in processing order.
#[pyfunction]
#[pyo3(signature = (records, min_pts, epsilon, precompute = false))]
fn optics(
    records: Vec<(f64, f64, String)>,
    min_pts: usize,
    epsilon: f64,
    precompute: bool,
) -> PyResult<Vec<Row>> {
    let points: Vec<LabeledPoint> = records
        .into_iter()
        .map(|(x, y, label)| LabeledPoint::at(label, x, y))
        .collect();
    run(&points, min_pts, epsilon, precompute)
}

/// OPTICS ordering of text records (`x y label` per line)
#[pyfunction]
#[pyo3(signature = (text, min_pts, epsilon, precompute = false))]
fn optics_from_text(text: &str, min_pts: usize, epsilon: f64, precompute: bool) -> PyResult<Vec<Row>> {
    let points = load_points(text).map_err(to_py_err)?;
    run(&points, min_pts, epsilon, precompute)
}

#[pymodule]
#[pyo3(name = "_core")]
fn optics_ordering(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(optics, m)?)?;
    m.add_function(wrap_pyfunction!(optics_from_text, m)?)?;

    m.add("__doc__", "OPTICS density ordering for labeled points in the plane.")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
