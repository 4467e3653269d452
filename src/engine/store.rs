//! # Point Store
//!
//! Per-run state of every input point: coordinates, core distance,
//! reachability and the processed flag.
//!
//! Invariants enforced here:
//! - labels are unique (duplicates are rejected at load time)
//! - reachability only ever decreases, and is frozen once processed
//! - processed flips false -> true exactly once

use std::collections::HashMap;

use crate::core::{Label, LabeledPoint, Point};
use crate::error::{OpticsError, Result};

/// Mutable state of one point during a run
#[derive(Clone, Debug, PartialEq)]
pub struct PointState {
    pub label: Label,
    pub point: Point,
    core_distance: Option<f64>,
    reachability: Option<f64>,
    processed: bool,
}

impl PointState {
    fn new(label: Label, point: Point) -> Self {
        Self {
            label,
            point,
            core_distance: None,
            reachability: None,
            processed: false,
        }
    }

    pub fn core_distance(&self) -> Option<f64> {
        self.core_distance
    }

    pub fn reachability(&self) -> Option<f64> {
        self.reachability
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Whether the point has a defined core distance
    pub fn is_core(&self) -> bool {
        self.core_distance.is_some()
    }
}

/// All points of one run, in input order
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    states: Vec<PointState>,

    /// Position of each label in ascending label order (seed tie-break)
    ranks: Vec<u32>,

    /// Label -> input position
    positions: HashMap<Label, usize>,
}

impl PointStore {
    /// Build the store from input records
    ///
    /// Fails on a duplicate label or a non-finite coordinate.
    pub fn load(points: &[LabeledPoint]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(points.len());
        let mut states = Vec::with_capacity(points.len());

        for (index, lp) in points.iter().enumerate() {
            if !lp.point.is_finite() {
                return Err(OpticsError::NonFiniteCoordinate {
                    label: lp.label.clone(),
                });
            }
            if let Some(&first) = positions.get(&lp.label) {
                return Err(OpticsError::DuplicateLabel {
                    label: lp.label.clone(),
                    first,
                    second: index,
                });
            }
            positions.insert(lp.label.clone(), index);
            states.push(PointState::new(lp.label.clone(), lp.point));
        }

        let mut by_label: Vec<usize> = (0..states.len()).collect();
        by_label.sort_by(|&a, &b| states[a].label.cmp(&states[b].label));
        let mut ranks = vec![0u32; states.len()];
        for (rank, &index) in by_label.iter().enumerate() {
            ranks[index] = rank as u32;
        }

        Ok(Self {
            states,
            ranks,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PointState> {
        self.states.get(index)
    }

    /// Input position of a label
    pub fn position(&self, label: &Label) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Tie-break rank of the point at `index`
    pub fn rank(&self, index: usize) -> u32 {
        self.ranks[index]
    }

    /// Coordinates in input order
    pub fn coordinates(&self) -> Vec<Point> {
        self.states.iter().map(|s| s.point).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointState> {
        self.states.iter()
    }

    /// Record the core distances computed at load time
    pub fn set_core_distances(&mut self, core_distances: Vec<Option<f64>>) {
        debug_assert_eq!(core_distances.len(), self.states.len());
        for (state, core) in self.states.iter_mut().zip(core_distances) {
            state.core_distance = core;
        }
    }

    /// Lower the reachability of an unprocessed point to `candidate`
    ///
    /// Returns true if the stored value changed. A larger candidate, or any
    /// candidate for a processed point, leaves the state untouched.
    pub fn lower_reachability(&mut self, index: usize, candidate: f64) -> bool {
        let state = &mut self.states[index];
        if state.processed {
            return false;
        }
        match state.reachability {
            Some(current) if current <= candidate => false,
            _ => {
                state.reachability = Some(candidate);
                true
            }
        }
    }

    /// Mark a point as processed
    ///
    /// Returns false if it already was.
    pub fn mark_processed(&mut self, index: usize) -> bool {
        let state = &mut self.states[index];
        if state.processed {
            return false;
        }
        state.processed = true;
        true
    }

    /// Number of processed points
    pub fn processed_count(&self) -> usize {
        self.states.iter().filter(|s| s.processed).count()
    }
}
