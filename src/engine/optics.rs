//! # OPTICS Engine
//!
//! Drives one run: load, core distances, then the expansion loop.
//!
//! ```text
//! for p in store order, unprocessed:
//!     seeds = {}
//!     process(p); if core: update(p)
//!     while q = seeds.pop():
//!         process(q); if core: update(q)
//! ```
//!
//! Each point is processed exactly once, so the loop terminates after
//! `n` emissions. Cancellation is polled only between two expansions.

use tracing::{debug, info, trace};

use super::core_distance::CoreDistanceCalculator;
use super::seeds::{Seed, SeedQueue};
use super::store::PointStore;
use crate::adapters::matrix::DistanceMatrix;
use crate::core::{ClusterOrdering, LabeledPoint, OpticsConfig, OrderedPoint};
use crate::error::{OpticsError, Result};
use crate::ports::{Cancel, Distances, Never};

/// OPTICS ordering engine
///
/// Holds only the configuration; every run gets its own `OpticsRun`.
#[derive(Clone, Debug)]
pub struct OpticsEngine {
    config: OpticsConfig,
}

impl OpticsEngine {
    /// Create an engine, rejecting invalid parameters up front
    pub fn new(config: OpticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OpticsConfig {
        &self.config
    }

    /// Compute the cluster ordering of `points`
    pub fn run(&self, points: &[LabeledPoint]) -> Result<ClusterOrdering> {
        self.run_with_cancel(points, &Never)
    }

    /// Compute the cluster ordering, stopping early if `cancel` fires
    pub fn run_with_cancel(
        &self,
        points: &[LabeledPoint],
        cancel: &dyn Cancel,
    ) -> Result<ClusterOrdering> {
        let mut run = self.prepare(points)?;
        run.execute(cancel)?;
        Ok(run.into_ordering())
    }

    /// Load points and compute core distances, without expanding yet
    pub fn prepare(&self, points: &[LabeledPoint]) -> Result<OpticsRun> {
        let mut store = PointStore::load(points)?;

        let coordinates = store.coordinates();
        let distances = if self.config.precompute {
            DistanceMatrix::precomputed(coordinates, self.config.metric.clone())
        } else {
            DistanceMatrix::lazy(coordinates, self.config.metric.clone())
        };

        let calculator = CoreDistanceCalculator::new(self.config.epsilon, self.config.min_pts);
        store.set_core_distances(calculator.compute_all(&distances));

        info!(
            points = store.len(),
            core_points = store.iter().filter(|s| s.is_core()).count(),
            min_pts = self.config.min_pts,
            epsilon = self.config.epsilon,
            metric = distances.metric_name(),
            "prepared OPTICS run"
        );

        Ok(OpticsRun {
            epsilon: self.config.epsilon,
            store,
            distances,
            ordering: ClusterOrdering::with_capacity(points.len()),
            cursor: 0,
        })
    }
}

/// State of a single run
///
/// Owns the store, the distances and the growing ordering. Nothing here
/// outlives the run.
pub struct OpticsRun {
    epsilon: f64,
    store: PointStore,
    distances: DistanceMatrix,
    ordering: ClusterOrdering,

    /// Next store position the outer loop looks at
    cursor: usize,
}

impl OpticsRun {
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Ordering emitted so far
    pub fn ordering(&self) -> &ClusterOrdering {
        &self.ordering
    }

    pub fn into_ordering(self) -> ClusterOrdering {
        self.ordering
    }

    /// Whether every point has been processed
    pub fn is_finished(&self) -> bool {
        self.ordering.len() == self.store.len()
    }

    /// Run expansions until every point is processed
    pub fn execute(&mut self, cancel: &dyn Cancel) -> Result<()> {
        loop {
            if cancel.is_cancelled() {
                info!(processed = self.ordering.len(), "OPTICS run cancelled");
                return Err(OpticsError::Cancelled {
                    processed: self.ordering.len(),
                });
            }
            if self.expand_next().is_none() {
                break;
            }
        }

        info!(
            points = self.ordering.len(),
            regions = self.ordering.region_count(),
            distance_evaluations = self.distances.computed_pairs(),
            "OPTICS run finished"
        );
        Ok(())
    }

    /// Expand from the next unprocessed point in store order
    ///
    /// Returns the number of points emitted, or `None` when nothing is left.
    pub fn expand_next(&mut self) -> Option<usize> {
        while self.cursor < self.store.len() {
            let start = self.cursor;
            self.cursor += 1;
            if self.store.get(start).is_some_and(|s| !s.is_processed()) {
                return Some(self.expand(start));
            }
        }
        None
    }

    /// Process `start` and drain its seed queue
    fn expand(&mut self, start: usize) -> usize {
        let before = self.ordering.len();
        let mut seeds = SeedQueue::new();

        self.process(start, &mut seeds);
        while let Some(seed) = seeds.pop() {
            self.process(seed.index, &mut seeds);
        }

        let emitted = self.ordering.len() - before;
        debug!(
            start = %self.store.get(start).map(|s| s.label.as_str()).unwrap_or_default(),
            emitted,
            "expanded density region"
        );
        emitted
    }

    /// Range query, mark processed, emit, then propagate if core
    fn process(&mut self, p: usize, seeds: &mut SeedQueue) {
        let neighbors = self.range_query(p);
        if !self.store.mark_processed(p) {
            return;
        }

        let Some(state) = self.store.get(p) else {
            return;
        };
        self.ordering.push(OrderedPoint::new(
            state.label.clone(),
            state.reachability(),
            state.core_distance(),
        ));

        if state.is_core() {
            self.update_reachability(p, &neighbors, seeds);
        }
    }

    /// Unprocessed points within epsilon of `p`, excluding `p`
    ///
    /// Empty for a position outside the store.
    pub fn range_query(&self, p: usize) -> Vec<usize> {
        if p >= self.store.len() {
            return Vec::new();
        }
        self.store
            .iter()
            .enumerate()
            .filter(|&(q, state)| q != p && !state.is_processed())
            .filter(|&(q, _)| self.distances.distance(p, q) <= self.epsilon)
            .map(|(q, _)| q)
            .collect()
    }

    /// Propagate reachability from core point `p` to its neighbors
    ///
    /// Does nothing if `p` is not a core point.
    pub fn update_reachability(&mut self, p: usize, neighbors: &[usize], seeds: &mut SeedQueue) {
        let Some(core) = self.store.get(p).and_then(|s| s.core_distance()) else {
            return;
        };

        for &n in neighbors {
            let candidate = core.max(self.distances.distance(p, n));
            if self.store.lower_reachability(n, candidate) {
                trace!(from = p, to = n, reachability = candidate, "lowered reachability");
            }
            let Some(reachability) = self.store.get(n).and_then(|s| s.reachability()) else {
                continue;
            };
            seeds.insert_or_update(Seed::new(n, reachability, self.store.rank(n)));
        }
    }
}
