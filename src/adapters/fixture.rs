//! # Reference Dataset
//!
//! Eleven labeled points with minPts 3 and epsilon 100. Used by the `demo`
//! command and as the golden regression run.

use crate::core::config::{DEFAULT_EPSILON, DEFAULT_MIN_PTS};
use crate::core::{LabeledPoint, OpticsConfig};

/// minPts of the reference run
pub const REFERENCE_MIN_PTS: usize = DEFAULT_MIN_PTS;

/// epsilon of the reference run
pub const REFERENCE_EPSILON: f64 = DEFAULT_EPSILON;

const REFERENCE: [(&str, f64, f64); 11] = [
    ("A", 40.00000, 69.835013),
    ("B", 78.0952367, 153.64454),
    ("C", 103.80952, 138.406443),
    ("D", 109.523813, 161.26358),
    ("E", 148.57143, 129.835013),
    ("F", 151.42857, 187.9302567),
    ("G", 94.2857167, 186.025493),
    ("H", 71.42857, 60.311203),
    ("I", 63.809523, 174.596923),
    ("J", 100.952383, 154.596913),
    ("K", 100.952383, 197.45406),
];

/// The reference points, in input order
pub fn reference_points() -> Vec<LabeledPoint> {
    REFERENCE
        .iter()
        .map(|&(label, x, y)| LabeledPoint::at(label, x, y))
        .collect()
}

/// The reference points as text records (`x y label` per line)
pub fn reference_input() -> String {
    REFERENCE
        .iter()
        .map(|(label, x, y)| format!("{x} {y} {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Configuration of the reference run
pub fn reference_config() -> OpticsConfig {
    OpticsConfig::new(REFERENCE_MIN_PTS, REFERENCE_EPSILON)
}
