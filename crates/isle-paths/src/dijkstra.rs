use crate::SearchRange;
use crate::traits::WeightedPather;

impl SearchRange {
    /// Minimum-cost path from `start` to `goal`.
    ///
    /// Stepping onto a node costs `pather.cost(from, to)`. Improved nodes are
    /// pushed again rather than re-keyed; a node popped after it was closed
    /// is skipped. The search ends the moment `goal` is popped, not when it
    /// is first reached.
    ///
    /// Returns `false` (empty [`path`](Self::path)) when an endpoint is out of
    /// range or impassable, or `goal` is unreachable.
    pub fn dijkstra<P: WeightedPather>(&mut self, pather: &P, start: usize, goal: usize) -> bool {
        self.best_first(pather, start, goal, |_| 0)
    }
}
