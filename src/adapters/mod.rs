//! Adapters - Swappable implementations around the engine

pub mod matrix;
pub mod input;
pub mod fixture;
pub mod report;

#[cfg(feature = "python")]
pub mod python;
