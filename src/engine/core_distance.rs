//! # Core Distance
//!
//! Distance from a point to its minPts-th nearest neighbor within epsilon.
//! The point itself never counts as a neighbor.

use crate::ports::Distances;

/// Derives core distances from an epsilon-neighborhood
#[derive(Clone, Copy, Debug)]
pub struct CoreDistanceCalculator {
    epsilon: f64,
    min_pts: usize,
}

impl CoreDistanceCalculator {
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Core distance of the point at position `p`
    ///
    /// `None` when fewer than minPts other points lie within epsilon.
    pub fn core_distance<D: Distances + ?Sized>(&self, p: usize, distances: &D) -> Option<f64> {
        if self.min_pts == 0 {
            return None;
        }

        let mut within: Vec<f64> = (0..distances.len())
            .filter(|&q| q != p)
            .map(|q| distances.distance(p, q))
            .filter(|&d| d <= self.epsilon)
            .collect();

        if within.len() < self.min_pts {
            return None;
        }

        let rank = self.min_pts - 1;
        let (_, nth, _) = within.select_nth_unstable_by(rank, f64::total_cmp);
        Some(*nth)
    }

    /// Core distances of every point, in input order
    pub fn compute_all<D: Distances + ?Sized>(&self, distances: &D) -> Vec<Option<f64>> {
        (0..distances.len())
            .map(|p| self.core_distance(p, distances))
            .collect()
    }
}
