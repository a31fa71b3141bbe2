//! The search frontier: a binary min-heap keyed by f-score.

use std::cmp::Ordering;

#[derive(Clone, Debug)]
struct Entry<T, K> {
    item: T,
    key: K,
    seq: u64,
}

impl<T, K: Ord> Entry<T, K> {
    /// Smaller key first; equal keys pull in insertion order.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        match self.key.cmp(&other.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.seq < other.seq,
        }
    }
}

/// A minimum-priority container of `(item, key)` pairs.
///
/// Unlike [`std::collections::BinaryHeap`], entries can be located by a
/// linear scan ([`find`](OpenSet::find)) and have their key lowered in place
/// ([`decrease_key`](OpenSet::decrease_key)).
#[derive(Clone, Debug)]
pub struct OpenSet<T, K = i32> {
    heap: Vec<Entry<T, K>>,
    next_seq: u64,
}

impl<T, K: Ord + Copy> Default for OpenSet<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Ord + Copy> OpenSet<T, K> {
    /// Create an empty open set.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            next_seq: 0,
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert `item` with priority `key`. O(log n).
    pub fn insert(&mut self, item: T, key: K) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { item, key, seq });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest key, or `None` if empty.
    pub fn pull_min(&mut self) -> Option<(T, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let Entry { item, key, .. } = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    /// The entry that [`pull_min`](OpenSet::pull_min) would return next.
    pub fn peek_min(&self) -> Option<(&T, K)> {
        self.heap.first().map(|e| (&e.item, e.key))
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, K)> + '_ {
        self.heap.iter().map(|e| (&e.item, e.key))
    }

    /// Linear scan for the slot of the first entry matching `pred`. O(n).
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<usize> {
        self.heap.iter().position(|e| pred(&e.item))
    }

    /// Whether any entry matches `pred`. O(n).
    pub fn contains(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.find(pred).is_some()
    }

    /// Lower the key of the entry at `slot` (as returned by
    /// [`find`](OpenSet::find)) and restore heap order.
    ///
    /// Returns `false` and changes nothing if `slot` is out of range or `key`
    /// is not strictly smaller than the current key.
    pub fn decrease_key(&mut self, slot: usize, key: K) -> bool {
        match self.heap.get_mut(slot) {
            Some(e) if key < e.key => e.key = key,
            _ => return false,
        }
        self.sift_up(slot);
        true
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.heap.swap(i, best);
            i = best;
        }
    }
}
