//! # Core Domain
//!
//! Pure math, no I/O. The vocabulary of an OPTICS run.
//!
//! This module contains the fundamental types:
//! - `Point` - A position in the plane
//! - `Label` - Unique identifier of an input point
//! - `Metric` - Trait for measuring distance
//! - `OpticsConfig` - minPts, epsilon, metric
//! - `ClusterOrdering` - The result of a run
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - Fully testable in isolation

mod point;
mod label;
pub mod metric;
pub mod config;
pub mod ordering;

// Re-exports
pub use point::Point;
pub use label::Label;
pub use metric::{Metric, MetricKind};
pub use config::OpticsConfig;
pub use ordering::{ClusterOrdering, OrderedPoint};

/// A point with its label, as read from input
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabeledPoint {
    /// Unique identifier
    pub label: Label,
    /// Position in the plane
    pub point: Point,
}

impl LabeledPoint {
    /// Create a new labeled point
    pub fn new(label: impl Into<Label>, point: Point) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }

    /// Shorthand for `LabeledPoint::new(label, Point::new(x, y))`
    pub fn at(label: impl Into<Label>, x: f64, y: f64) -> Self {
        Self::new(label, Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_point_creation() {
        let lp = LabeledPoint::at("A", 1.0, 2.0);
        assert_eq!(lp.label.as_str(), "A");
        assert_eq!(lp.point.coords(), [1.0, 2.0]);
    }
}
