//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT the engine needs
//! - Adapters define HOW it is provided
//!
//! The engine only talks to these traits.

mod distances;
mod cancel;

// Re-export traits
pub use distances::Distances;
pub use cancel::{Cancel, Never};
