//! # Metric
//!
//! Trait and implementations for the distance between two points.
//!
//! OPTICS only ever asks "how far apart?", so the metric is pluggable.
//! Euclidean is the default and the only one the reference results are
//! recorded against.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Point;

/// Trait for measuring the distance between points
///
/// Implementations must be symmetric and return a non-negative value,
/// zero for identical coordinates.
pub trait Metric: Send + Sync {
    /// Distance between two points
    fn distance(&self, a: &Point, b: &Point) -> f64;

    /// Name of this metric (for logging/config)
    fn name(&self) -> &'static str;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Euclidean distance
///
/// `sqrt(dx² + dy²)`. Computed from the squared sum rather than `hypot`
/// so results match the reference values bit for bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let (dx, dy) = a.delta(b);
        (dx * dx + dy * dy).sqrt()
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// Manhattan (L1) distance
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Metric for Manhattan {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let (dx, dy) = a.delta(b);
        dx.abs() + dy.abs()
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Chebyshev (L∞) distance
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

impl Metric for Chebyshev {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let (dx, dy) = a.delta(b);
        dx.abs().max(dy.abs())
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Metric selectable by name (CLI, config files)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl MetricKind {
    /// Instantiate the metric
    pub fn build(self) -> Arc<dyn Metric> {
        match self {
            MetricKind::Euclidean => Arc::new(Euclidean),
            MetricKind::Manhattan => Arc::new(Manhattan),
            MetricKind::Chebyshev => Arc::new(Chebyshev),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Euclidean => "euclidean",
            MetricKind::Manhattan => "manhattan",
            MetricKind::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown metric name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric '{0}' (expected euclidean, manhattan or chebyshev)")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricKind {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(MetricKind::Euclidean),
            "manhattan" | "l1" => Ok(MetricKind::Manhattan),
            "chebyshev" | "linf" => Ok(MetricKind::Chebyshev),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}
