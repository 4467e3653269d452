//! # Configuration
//!
//! Parameters of one OPTICS run.
//!
//! Everything is configurable, not hardcoded:
//! - minPts (neighbors needed for a core point, self excluded)
//! - epsilon (neighborhood radius)
//! - Distance metric
//! - Whether the distance matrix is filled up front (in parallel)

use std::fmt;
use std::sync::Arc;

use super::metric::{Euclidean, Metric};
use crate::error::{OpticsError, Result};

/// minPts of the reference dataset
pub const DEFAULT_MIN_PTS: usize = 3;

/// epsilon of the reference dataset
pub const DEFAULT_EPSILON: f64 = 100.0;

/// OPTICS run configuration
#[derive(Clone)]
pub struct OpticsConfig {
    /// Minimum number of other points within epsilon for a core point
    pub min_pts: usize,

    /// Neighborhood radius
    pub epsilon: f64,

    /// Distance metric for all pairwise distances
    pub metric: Arc<dyn Metric>,

    /// Fill every pairwise distance before the expansion loop starts
    ///
    /// Uses rayon. When false, distances are computed on first use.
    pub precompute: bool,
}

impl OpticsConfig {
    /// Create a configuration with Euclidean distance and lazy distances
    pub fn new(min_pts: usize, epsilon: f64) -> Self {
        Self {
            min_pts,
            epsilon,
            metric: Arc::new(Euclidean),
            precompute: false,
        }
    }

    /// Set a custom metric
    pub fn with_metric<M: Metric + 'static>(mut self, metric: M) -> Self {
        self.metric = Arc::new(metric);
        self
    }

    /// Set a shared metric
    pub fn with_shared_metric(mut self, metric: Arc<dyn Metric>) -> Self {
        self.metric = metric;
        self
    }

    /// Set precompute behavior
    pub fn with_precompute(mut self, precompute: bool) -> Self {
        self.precompute = precompute;
        self
    }

    /// Reject parameters that cannot define a neighborhood
    pub fn validate(&self) -> Result<()> {
        if self.min_pts == 0 {
            return Err(OpticsError::invalid_config("minPts must be at least 1"));
        }
        if !self.epsilon.is_finite() {
            return Err(OpticsError::invalid_config(format!(
                "epsilon must be finite, got {}",
                self.epsilon
            )));
        }
        if self.epsilon <= 0.0 {
            return Err(OpticsError::invalid_config(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl Default for OpticsConfig {
    /// Reference parameters: minPts 3, epsilon 100, Euclidean
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PTS, DEFAULT_EPSILON)
    }
}

impl fmt::Debug for OpticsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpticsConfig")
            .field("min_pts", &self.min_pts)
            .field("epsilon", &self.epsilon)
            .field("metric", &self.metric.name())
            .field("precompute", &self.precompute)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metric::Manhattan;

    #[test]
    fn test_default_config() {
        let config = OpticsConfig::default();
        assert_eq!(config.min_pts, 3);
        assert_eq!(config.epsilon, 100.0);
        assert_eq!(config.metric.name(), "euclidean");
        assert!(!config.precompute);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = OpticsConfig::new(5, 2.5)
            .with_metric(Manhattan)
            .with_precompute(true);

        assert_eq!(config.min_pts, 5);
        assert_eq!(config.epsilon, 2.5);
        assert_eq!(config.metric.name(), "manhattan");
        assert!(config.precompute);
    }

    #[test]
    fn test_zero_min_pts_rejected() {
        let err = OpticsConfig::new(0, 1.0).validate().unwrap_err();
        assert!(matches!(err, OpticsError::InvalidConfig { .. }));
    }

    #[test]
    fn test_bad_epsilon_rejected() {
        for eps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = OpticsConfig::new(2, eps).validate().unwrap_err();
            assert!(matches!(err, OpticsError::InvalidConfig { .. }), "epsilon {eps}");
        }
    }

    #[test]
    fn test_debug_shows_metric_name() {
        let shown = format!("{:?}", OpticsConfig::default());
        assert!(shown.contains("euclidean"));
    }
}
