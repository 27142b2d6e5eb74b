//! Binary min-heap with decrease-key, used as the search frontier.
//!
//! Unlike `std::collections::BinaryHeap` this heap can lower the priority of
//! an item already queued. An identity → slot side map is kept in step with
//! every swap, so lookups for [`update_item`](Heap::update_item) and
//! [`contains`](Heap::contains) do not scan.

use std::collections::HashMap;
use std::hash::Hash;

/// An item with its priority.
#[derive(Clone, Copy, Debug)]
struct HeapEntry<T> {
    item: T,
    priority: f64,
}

/// A min-heap keyed by `f64` priority. Each item may be queued at most once.
///
/// Items with equal priority come out in an unspecified order.
#[derive(Clone, Debug)]
pub struct Heap<T> {
    entries: Vec<HeapEntry<T>>,
    positions: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> Heap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `item` is queued.
    #[inline]
    pub fn contains(&self, item: T) -> bool {
        self.positions.contains_key(&item)
    }

    /// Current priority of `item`, if queued.
    pub fn priority_of(&self, item: T) -> Option<f64> {
        self.positions.get(&item).map(|&i| self.entries[i].priority)
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<(T, f64)> {
        self.entries.first().map(|e| (e.item, e.priority))
    }

    /// Queue `item` with `priority`.
    ///
    /// Queuing an item that is already present is a caller bug; use
    /// [`update_item`](Self::update_item) instead.
    pub fn add(&mut self, item: T, priority: f64) {
        debug_assert!(!priority.is_nan(), "heap priority is NaN");
        debug_assert!(!self.contains(item), "item queued twice");
        let idx = self.entries.len();
        self.entries.push(HeapEntry { item, priority });
        self.positions.insert(item, idx);
        self.sift_up(idx);
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let entry = self.entries.pop()?;
        self.positions.remove(&entry.item);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    /// Lower the priority of a queued item. Returns `false` if the item is not
    /// queued.
    ///
    /// Only decreases are supported: the entry is sifted up, never down, so
    /// raising a priority here leaves the heap out of order.
    pub fn update_item(&mut self, item: T, priority: f64) -> bool {
        let Some(&idx) = self.positions.get(&item) else {
            return false;
        };
        debug_assert!(
            priority <= self.entries[idx].priority,
            "update_item may only decrease a priority"
        );
        self.entries[idx].priority = priority;
        self.sift_up(idx);
        true
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].item, a);
        self.positions.insert(self.entries[b].item, b);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].priority >= self.entries[parent].priority {
                break;
            }
            self.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Copy + Eq + Hash> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn drain(heap: &mut Heap<u32>) -> Vec<f64> {
        std::iter::from_fn(|| heap.pop().map(|(_, p)| p)).collect()
    }

    #[test]
    fn pops_in_priority_order() {
        let mut h = Heap::new();
        h.add(1, 3.0);
        h.add(2, 1.0);
        h.add(3, 2.0);

        assert_eq!(h.len(), 3);
        assert_eq!(h.peek(), Some((2, 1.0)));
        assert_eq!(h.pop(), Some((2, 1.0)));
        assert_eq!(h.pop(), Some((3, 2.0)));
        assert_eq!(h.pop(), Some((1, 3.0)));
        assert_eq!(h.pop(), None);
        assert!(h.is_empty());
    }

    #[test]
    fn update_item_moves_entry_forward() {
        let mut h = Heap::new();
        for (item, p) in [(10, 5.0), (11, 6.0), (12, 7.0), (13, 8.0)] {
            h.add(item, p);
        }
        assert!(h.update_item(13, 1.0));
        assert_eq!(h.priority_of(13), Some(1.0));
        assert_eq!(h.pop(), Some((13, 1.0)));
        assert_eq!(h.pop(), Some((10, 5.0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "update_item may only decrease a priority")]
    fn update_item_rejects_an_increase() {
        let mut h = Heap::new();
        h.add(1u32, 2.0);
        h.update_item(1, 3.0);
    }

    #[test]
    fn update_missing_item_is_reported() {
        let mut h: Heap<u32> = Heap::new();
        h.add(1, 1.0);
        assert!(!h.update_item(2, 0.5));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn contains_tracks_membership() {
        let mut h = Heap::new();
        h.add(7, 1.0);
        h.add(8, 2.0);
        assert!(h.contains(7));
        assert!(h.contains(8));
        h.pop();
        assert!(!h.contains(7));
        assert!(h.contains(8));
        h.clear();
        assert!(!h.contains(8));
        assert!(h.is_empty());
    }

    #[test]
    fn draining_yields_sorted_priorities() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut h = Heap::new();
        for item in 0..500u32 {
            h.add(item, rng.random_range(0.0..1000.0));
        }
        // Lower a random subset, as a search frontier would.
        for item in (0..500u32).step_by(7) {
            let p = h.priority_of(item).unwrap();
            h.update_item(item, p * rng.random_range(0.0..1.0));
        }

        let out = drain(&mut h);
        assert_eq!(out.len(), 500);
        assert!(out.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn interleaved_pops_return_current_minimum() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut h = Heap::new();
        let mut shadow: Vec<(u32, f64)> = Vec::new();
        let mut next = 0u32;

        for _ in 0..2_000 {
            if shadow.is_empty() || rng.random_range(0..3) > 0 {
                let p = rng.random_range(-50.0..50.0);
                h.add(next, p);
                shadow.push((next, p));
                next += 1;
            } else {
                let (_, p) = h.pop().unwrap();
                let min = shadow.iter().map(|&(_, q)| q).fold(f64::INFINITY, f64::min);
                assert_eq!(p, min);
                let pos = shadow.iter().position(|&(_, q)| q == p).unwrap();
                shadow.swap_remove(pos);
            }
            assert_eq!(h.len(), shadow.len());
        }
    }
}
