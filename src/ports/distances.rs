//! # Distances Port
//!
//! Pairwise distance lookup between points of one run, addressed by their
//! position in the input.
//!
//! Implemented by `DistanceMatrix`.

/// Trait for pairwise distance lookup
///
/// Contract:
/// - `distance(a, b) == distance(b, a)`
/// - `distance(a, a)` is `f64::INFINITY`: a point is never its own neighbor
/// - each unordered pair is computed at most once
pub trait Distances {
    /// Distance between the points at positions `a` and `b`
    fn distance(&self, a: usize, b: usize) -> f64;

    /// Number of points covered
    fn len(&self) -> usize;

    /// Check if no points are covered
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
