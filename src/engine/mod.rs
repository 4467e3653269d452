//! # Engine
//!
//! The OPTICS algorithm proper, built from:
//! - `PointStore` - per-run point state
//! - `CoreDistanceCalculator` - minPts-th neighbor distance within epsilon
//! - `SeedQueue` - indexed min-heap keyed by reachability
//! - `OpticsEngine` / `OpticsRun` - the expansion loop
//!
//! Single-threaded and deterministic. The only parallel step is the
//! optional distance precompute, which finishes before the loop starts.

mod store;
mod core_distance;
mod seeds;
mod optics;

pub use store::{PointState, PointStore};
pub use core_distance::CoreDistanceCalculator;
pub use seeds::{Seed, SeedQueue};
pub use optics::{OpticsEngine, OpticsRun};
