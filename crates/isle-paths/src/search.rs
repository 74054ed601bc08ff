use std::collections::VecDeque;

use crate::heap::PriorityQueue;
use crate::traits::{Pather, WeightedPather};

/// Sentinel predecessor meaning "no node" (the start of a path, or a node
/// the last search never reached).
pub const NO_NODE: usize = usize::MAX;

/// Sentinel distance meaning "unreachable".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Expansion order of a sweep: a stack gives DFS, a queue gives BFS.
pub(crate) trait Frontier {
    fn put(&mut self, node: usize);
    fn take(&mut self) -> Option<usize>;
    fn clear(&mut self);
}

impl Frontier for Vec<usize> {
    #[inline]
    fn put(&mut self, node: usize) {
        self.push(node);
    }
    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl Frontier for VecDeque<usize> {
    #[inline]
    fn put(&mut self, node: usize) {
        self.push_back(node);
    }
    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Search engine for a graph of `len` nodes numbered `0..len`.
///
/// `SearchRange` owns every piece of per-search state: predecessor links,
/// accumulated distances, closed flags, frontiers and the output path. All
/// of it is reset at the start of each call, so one engine can serve any
/// number of consecutive searches, but never two at once.
#[derive(Debug, Clone)]
pub struct SearchRange {
    pub(crate) len: usize,
    pub(crate) prev: Vec<usize>,
    pub(crate) dist: Vec<i32>,
    pub(crate) closed: Vec<bool>,
    pub(crate) path: Vec<usize>,
    // frontiers, kept to reuse their allocations
    pub(crate) stack: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) open: PriorityQueue<usize, i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<usize>,
}

impl SearchRange {
    /// Create an engine for nodes `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            prev: vec![NO_NODE; len],
            dist: vec![UNREACHABLE; len],
            closed: vec![false; len],
            path: Vec::new(),
            stack: Vec::new(),
            queue: VecDeque::new(),
            open: PriorityQueue::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Change the number of nodes, reallocating the scratch arrays.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.prev.clear();
        self.prev.resize(len, NO_NODE);
        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
        self.closed.clear();
        self.closed.resize(len, false);
        self.path.clear();
    }

    /// Number of nodes this engine covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `node` is a valid node index.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        node < self.len
    }

    /// Output of the last call: discovery order for traversals, the
    /// start-to-goal path for path searches, empty on failure.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Predecessor of `node` on the tree built by the last path search.
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        match self.prev.get(node) {
            Some(&p) if p != NO_NODE => Some(p),
            _ => None,
        }
    }

    /// Best known distance of `node` after the last path search.
    ///
    /// Hop count for [`bfs_path`](Self::bfs_path), accumulated cost for
    /// Dijkstra and A*. Returns [`UNREACHABLE`] for nodes the search never
    /// relaxed or for out-of-range nodes.
    pub fn distance_at(&self, node: usize) -> i32 {
        self.dist.get(node).copied().unwrap_or(UNREACHABLE)
    }

    /// Total cost of the current path: the sum of `cost` over every step.
    pub fn path_cost<P: WeightedPather>(&self, pather: &P) -> i32 {
        self.path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
    }

    // -----------------------------------------------------------------------
    // Shared skeletons
    // -----------------------------------------------------------------------

    /// Forget everything about the previous search.
    pub(crate) fn reset(&mut self) {
        self.prev.fill(NO_NODE);
        self.dist.fill(UNREACHABLE);
        self.closed.fill(false);
        self.path.clear();
    }

    /// Whether a path search between `start` and `goal` can begin at all.
    pub(crate) fn endpoints_ok<P: Pather>(&self, pather: &P, start: usize, goal: usize) -> bool {
        self.contains(start)
            && self.contains(goal)
            && pather.passable(start)
            && pather.passable(goal)
    }

    /// Fill `buf` with the neighbors of `node` that may be entered.
    pub(crate) fn expand<P: Pather>(&self, pather: &P, node: usize, buf: &mut Vec<usize>) {
        buf.clear();
        pather.neighbors(node, buf);
        buf.retain(|&n| n < self.len && pather.passable(n));
    }

    /// Visit everything reachable from `start`, recording nodes in the order
    /// they are closed. The frontier decides the order.
    pub(crate) fn sweep<P: Pather, F: Frontier>(&mut self, pather: &P, start: usize, frontier: &mut F) {
        self.reset();
        if !self.contains(start) || !pather.passable(start) {
            return;
        }

        frontier.clear();
        frontier.put(start);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = frontier.take() {
            // Duplicates are allowed in the frontier; only the first pop counts.
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;
            self.path.push(ci);

            self.expand(pather, ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if !self.closed[ni] {
                    frontier.put(ni);
                }
            }
        }

        self.nbuf = nbuf;
    }

    /// Best-first search shared by Dijkstra and A*.
    ///
    /// Open entries are keyed on `g + estimate(node)`. A node is closed the
    /// first time it is popped; later (stale) copies are skipped. The search
    /// stops as soon as `goal` is popped.
    pub(crate) fn best_first<P, H>(&mut self, pather: &P, start: usize, goal: usize, estimate: H) -> bool
    where
        P: WeightedPather,
        H: Fn(usize) -> i32,
    {
        self.reset();
        if !self.endpoints_ok(pather, start, goal) {
            return false;
        }

        let mut open = std::mem::take(&mut self.open);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        open.clear();

        self.dist[start] = 0;
        open.enqueue(start, estimate(start));

        let mut found = false;
        while let Ok(ci) = open.dequeue() {
            if self.closed[ci] {
                continue;
            }
            if ci == goal {
                found = true;
                break;
            }
            self.closed[ci] = true;
            let current_g = self.dist[ci];

            self.expand(pather, ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.closed[ni] {
                    continue;
                }
                let tentative = current_g.saturating_add(pather.cost(ci, ni));
                if tentative >= self.dist[ni] {
                    continue;
                }
                self.dist[ni] = tentative;
                self.prev[ni] = ci;
                open.enqueue(ni, tentative.saturating_add(estimate(ni)));
            }
        }

        open.clear();
        self.open = open;
        self.nbuf = nbuf;

        if found {
            self.reconstruct(goal);
        }
        found
    }

    /// Rebuild `path` by following predecessors back from `goal`.
    pub(crate) fn reconstruct(&mut self, goal: usize) {
        self.path.clear();
        let mut ci = goal;
        while ci != NO_NODE {
            self.path.push(ci);
            ci = self.prev[ci];
        }
        self.path.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::GridPather;

    #[test]
    fn new_engine_is_blank() {
        let sr = SearchRange::new(9);
        assert_eq!(sr.len(), 9);
        assert!(sr.path().is_empty());
        assert_eq!(sr.distance_at(4), UNREACHABLE);
        assert_eq!(sr.distance_at(100), UNREACHABLE);
        assert_eq!(sr.predecessor(4), None);
        assert!(!sr.contains(9));
    }

    #[test]
    fn resize_grows_scratch() {
        let mut sr = SearchRange::new(4);
        sr.resize(25);
        assert_eq!(sr.len(), 25);
        assert_eq!(sr.prev.len(), 25);
        assert_eq!(sr.dist.len(), 25);
        assert_eq!(sr.closed.len(), 25);
    }

    #[test]
    fn expand_drops_blocked_and_out_of_range() {
        let mut g = GridPather::open(3, 3);
        g.block(1);
        let sr = SearchRange::new(9);
        let mut buf = Vec::new();
        sr.expand(&g, 0, &mut buf);
        // 0 has neighbors 1 (blocked), 3, 4.
        assert_eq!(buf, vec![3, 4]);
    }

    #[test]
    fn results_do_not_leak_between_calls() {
        let g = GridPather::open(3, 3);
        let mut sr = SearchRange::new(9);
        assert!(sr.dijkstra(&g, 0, 8));
        assert!(sr.predecessor(8).is_some());
        sr.bfs(&g, 4);
        assert_eq!(sr.predecessor(8), None);
        assert_eq!(sr.distance_at(8), UNREACHABLE);
    }

    #[test]
    fn path_cost_sums_entered_nodes() {
        let mut g = GridPather::open(3, 1);
        g.set_weight(1, 4);
        g.set_weight(2, 2);
        let mut sr = SearchRange::new(3);
        assert!(sr.dijkstra(&g, 0, 2));
        assert_eq!(sr.path(), &[0, 1, 2]);
        assert_eq!(sr.path_cost(&g), 6);
    }
}
