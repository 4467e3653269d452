//! # Seed Queue
//!
//! Min-priority queue of points awaiting expansion, keyed by reachability.
//!
//! Indexed binary heap: `slots` maps a point's input position to its heap
//! slot, so `insert_or_update` and `pop` are both O(log n).
//!
//! Pop order: smallest reachability first, ties by ascending label rank.
//! At most one entry per point.

use std::cmp::Ordering;
use std::collections::HashMap;

/// A queued point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    /// Input position of the point
    pub index: usize,

    /// Current reachability distance
    pub reachability: f64,

    /// Label rank, used to break ties
    pub rank: u32,
}

impl Seed {
    pub fn new(index: usize, reachability: f64, rank: u32) -> Self {
        Self {
            index,
            reachability,
            rank,
        }
    }

    /// Total pop order
    fn order(&self, other: &Seed) -> Ordering {
        self.reachability
            .total_cmp(&other.reachability)
            .then(self.rank.cmp(&other.rank))
    }
}

/// Priority queue with update-by-key
#[derive(Clone, Debug, Default)]
pub struct SeedQueue {
    heap: Vec<Seed>,
    slots: HashMap<usize, usize>,
}

impl SeedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a seed, or replace the queued entry for the same point
    pub fn insert_or_update(&mut self, seed: Seed) {
        match self.slots.get(&seed.index).copied() {
            Some(slot) => {
                let previous = self.heap[slot];
                self.heap[slot] = seed;
                match seed.order(&previous) {
                    Ordering::Less => self.sift_up(slot),
                    Ordering::Greater => self.sift_down(slot),
                    Ordering::Equal => {}
                }
            }
            None => {
                let slot = self.heap.len();
                self.heap.push(seed);
                self.slots.insert(seed.index, slot);
                self.sift_up(slot);
            }
        }
    }

    /// Remove and return the seed with the smallest reachability
    pub fn pop(&mut self) -> Option<Seed> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.slots.remove(&top.index);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// The seed that `pop` would return
    pub fn peek(&self) -> Option<&Seed> {
        self.heap.first()
    }

    /// The seed stored at a heap offset (inspection only, not pop order)
    pub fn peek_at(&self, offset: usize) -> Option<&Seed> {
        self.heap.get(offset)
    }

    /// Whether a point is queued
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains_key(&index)
    }

    /// The queued entry for a point
    pub fn get(&self, index: usize) -> Option<&Seed> {
        self.slots.get(&index).map(|&slot| &self.heap[slot])
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queued seeds in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, Seed> {
        self.heap.iter()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].order(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].order(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].order(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].index, a);
        self.slots.insert(self.heap[b].index, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut SeedQueue) -> Vec<usize> {
        std::iter::from_fn(|| queue.pop()).map(|s| s.index).collect()
    }

    #[test]
    fn test_pops_smallest_first() {
        let mut queue = SeedQueue::new();
        queue.insert_or_update(Seed::new(0, 5.0, 0));
        queue.insert_or_update(Seed::new(1, 1.0, 1));
        queue.insert_or_update(Seed::new(2, 3.0, 2));
        queue.insert_or_update(Seed::new(3, 0.5, 3));

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek().map(|s| s.index), Some(3));
        assert_eq!(drain(&mut queue), vec![3, 1, 2, 0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_broken_by_rank() {
        let mut queue = SeedQueue::new();
        queue.insert_or_update(Seed::new(7, 2.0, 9));
        queue.insert_or_update(Seed::new(4, 2.0, 1));
        queue.insert_or_update(Seed::new(5, 2.0, 4));

        assert_eq!(drain(&mut queue), vec![4, 5, 7]);
    }

    #[test]
    fn test_update_replaces_entry() {
        let mut queue = SeedQueue::new();
        queue.insert_or_update(Seed::new(0, 4.0, 0));
        queue.insert_or_update(Seed::new(1, 3.0, 1));
        queue.insert_or_update(Seed::new(0, 1.0, 0));

        assert_eq!(queue.len(), 2);
        assert!(queue.contains(0));
        assert_eq!(queue.get(0).map(|s| s.reachability), Some(1.0));
        assert_eq!(drain(&mut queue), vec![0, 1]);
    }

    #[test]
    fn test_update_with_larger_key_sifts_down() {
        let mut queue = SeedQueue::new();
        for i in 0..6 {
            queue.insert_or_update(Seed::new(i, i as f64, i as u32));
        }
        queue.insert_or_update(Seed::new(0, 10.0, 0));
        assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_no_duplicates_after_many_updates() {
        let mut queue = SeedQueue::new();
        for round in 0..5 {
            for i in 0..10 {
                queue.insert_or_update(Seed::new(i, (10 - i + round) as f64, i as u32));
            }
        }
        assert_eq!(queue.len(), 10);
        let popped = drain(&mut queue);
        let mut sorted = popped.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 10);
    }

    #[test]
    fn test_peek_at_and_iter() {
        let mut queue = SeedQueue::new();
        queue.insert_or_update(Seed::new(2, 2.0, 2));
        queue.insert_or_update(Seed::new(1, 1.0, 1));
        assert_eq!(queue.peek_at(0).map(|s| s.index), Some(1));
        assert!(queue.peek_at(2).is_none());
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn test_pop_empty() {
        let mut queue = SeedQueue::new();
        assert!(queue.pop().is_none());
        assert!(queue.peek().is_none());
    }
}
