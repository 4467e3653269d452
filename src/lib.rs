//! # OPTICS Ordering
//!
//! Density-based ordering of labeled points in the plane.
//!
//! ## Overview
//!
//! OPTICS (Ordering Points To Identify the Clustering Structure) walks a
//! point set from dense regions outward and records, for every point, its
//! core distance and the reachability distance it was reached with. The
//! resulting ordering is what reachability plots and cluster extraction
//! are built from.
//!
//! ## Key Features
//!
//! - **Deterministic**: identical input gives an identical ordering; ties
//!   pop in ascending label order
//! - **O(log n) seed updates**: indexed binary heap
//! - **Each distance computed once**: memoized symmetric matrix, optionally
//!   filled in parallel
//! - **Pluggable metric**: Euclidean by default
//! - **No infinity sentinels**: undefined values are `None`
//!
//! ## Rust Usage
//!
//! ```rust
//! use optics_ordering::{run, LabeledPoint};
//!
//! let points = vec![
//!     LabeledPoint::at("A", 0.0, 0.0),
//!     LabeledPoint::at("B", 0.0, 1.0),
//!     LabeledPoint::at("C", 0.0, 2.0),
//!     LabeledPoint::at("D", 10.0, 10.0),
//! ];
//!
//! let ordering = run(&points, 2, 5.0)?;
//! assert_eq!(ordering.len(), 4);
//! assert_eq!(ordering.get(3).unwrap().core_distance, None);
//! # Ok::<(), optics_ordering::OpticsError>(())
//! ```
//!
//! ## Layout
//!
//! - [`core`](crate::core) - pure types: points, labels, metrics, config, ordering
//! - [`ports`] - traits the engine depends on
//! - [`adapters`] - distance matrix, text input, reference data, reports
//! - [`engine`] - the OPTICS loop

pub mod core;
pub mod ports;
pub mod adapters;
pub mod engine;
pub mod error;

// Re-exports for convenience
pub use crate::core::{ClusterOrdering, Label, LabeledPoint, Metric, MetricKind, OpticsConfig, OrderedPoint, Point};
pub use engine::{OpticsEngine, OpticsRun};
pub use error::{OpticsError, Result};

/// Compute the OPTICS ordering with Euclidean distance
///
/// Fails with `InvalidConfig` for `min_pts == 0` or a non-positive epsilon,
/// and with `DuplicateLabel` if two points share a label.
pub fn run(points: &[LabeledPoint], min_pts: usize, epsilon: f64) -> Result<ClusterOrdering> {
    OpticsEngine::new(OpticsConfig::new(min_pts, epsilon))?.run(points)
}
