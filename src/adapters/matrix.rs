//! # Distance Matrix Adapter
//!
//! Symmetric pairwise distances over one point set, memoized.
//!
//! Only the strict lower triangle is stored: slot `(hi, lo)` with `hi > lo`
//! serves both `distance(hi, lo)` and `distance(lo, hi)`, so every
//! unordered pair is computed at most once.
//!
//! Two ways to fill it:
//! - `lazy` - a pair is computed the first time it is asked for
//! - `precomputed` - every pair is computed up front, rows in parallel (rayon)

use std::cell::{Cell, OnceCell};
use std::sync::Arc;

use rayon::prelude::*;

use crate::core::{Metric, Point};
use crate::ports::Distances;

/// Memoized symmetric distance table
pub struct DistanceMatrix {
    /// Coordinates, by input position
    points: Vec<Point>,

    /// Metric used for every pair
    metric: Arc<dyn Metric>,

    /// Strict lower triangle, row-major
    cells: Vec<OnceCell<f64>>,

    /// Number of metric evaluations so far
    computed: Cell<usize>,
}

impl DistanceMatrix {
    /// Create a matrix that computes pairs on first use
    pub fn lazy(points: Vec<Point>, metric: Arc<dyn Metric>) -> Self {
        let pairs = pair_count(points.len());
        Self {
            points,
            metric,
            cells: (0..pairs).map(|_| OnceCell::new()).collect(),
            computed: Cell::new(0),
        }
    }

    /// Create a matrix with every pair already computed
    ///
    /// Rows are independent and computed in parallel; the expansion loop
    /// only starts reading once this returns.
    pub fn precomputed(points: Vec<Point>, metric: Arc<dyn Metric>) -> Self {
        let n = points.len();
        let rows: Vec<Vec<f64>> = (1..n)
            .into_par_iter()
            .map(|hi| {
                (0..hi)
                    .map(|lo| metric.distance(&points[hi], &points[lo]))
                    .collect()
            })
            .collect();

        let cells: Vec<OnceCell<f64>> = rows
            .into_iter()
            .flatten()
            .map(OnceCell::from)
            .collect();
        let computed = cells.len();

        tracing::debug!(points = n, pairs = computed, "precomputed distance matrix");

        Self {
            points,
            metric,
            cells,
            computed: Cell::new(computed),
        }
    }

    /// Number of metric evaluations performed so far
    pub fn computed_pairs(&self) -> usize {
        self.computed.get()
    }

    /// Total number of unordered pairs
    pub fn pair_count(&self) -> usize {
        self.cells.len()
    }

    /// The point at an input position
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Name of the metric in use
    pub fn metric_name(&self) -> &'static str {
        self.metric.name()
    }
}

impl Distances for DistanceMatrix {
    fn distance(&self, a: usize, b: usize) -> f64 {
        if a == b {
            return f64::INFINITY;
        }
        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        *self.cells[slot(hi, lo)].get_or_init(|| {
            self.computed.set(self.computed.get() + 1);
            self.metric.distance(&self.points[hi], &self.points[lo])
        })
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

/// Unordered pairs among `n` points
fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Lower-triangle slot of `(hi, lo)`, `hi > lo`
fn slot(hi: usize, lo: usize) -> usize {
    hi * (hi - 1) / 2 + lo
}
