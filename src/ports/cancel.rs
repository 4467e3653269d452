//! # Cancel Port
//!
//! Cooperative cancellation of a run. The engine polls it between two
//! expansions, never inside one, so a point is either fully processed
//! or not at all.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Trait for an external stop signal
pub trait Cancel {
    /// Whether the run should stop before the next expansion
    fn is_cancelled(&self) -> bool;
}

/// Signal that never fires
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancel for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl Cancel for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: Cancel + ?Sized> Cancel for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: Cancel + ?Sized> Cancel for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never() {
        assert!(!Never.is_cancelled());
    }

    #[test]
    fn test_atomic_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        assert!(!flag.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(flag.is_cancelled());
    }
}
