//! Array-backed binary min-heap.

use thiserror::Error;

/// Returned by [`PriorityQueue::dequeue`] and [`PriorityQueue::peek`] when
/// the queue holds no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("priority queue is empty")]
pub struct EmptyQueue;

/// A binary min-heap of `(element, priority)` pairs.
///
/// There is no decrease-key: the heap keeps no element-to-slot index, so a
/// caller that improves an element's priority enqueues it again and skips
/// the stale copy when it is popped later (see the closed set in
/// [`SearchRange::dijkstra`](crate::SearchRange::dijkstra)).
///
/// Elements with equal priority come out in no particular order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<E, P> {
    heap: Vec<(E, P)>,
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of queued entries, stale duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert `element` with `priority`. O(log n).
    pub fn enqueue(&mut self, element: E, priority: P) {
        self.heap.push((element, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the element with the smallest priority. O(log n).
    pub fn dequeue(&mut self) -> Result<E, EmptyQueue> {
        if self.heap.is_empty() {
            return Err(EmptyQueue);
        }
        // The last entry moves into the root slot.
        let (element, _) = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(element)
    }

    /// The element with the smallest priority, without removing it. O(1).
    pub fn peek(&self) -> Result<&E, EmptyQueue> {
        self.heap.first().map(|(e, _)| e).ok_or(EmptyQueue)
    }

    /// The smallest priority currently queued.
    pub fn peek_priority(&self) -> Result<&P, EmptyQueue> {
        self.heap.first().map(|(_, p)| p).ok_or(EmptyQueue)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].1 <= self.heap[i].1 {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            // Strict comparisons: on a tie between children the left wins.
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
