use crate::SearchRange;
use crate::traits::AstarPather;

impl SearchRange {
    /// Shortest path from `start` to `goal` using A*.
    ///
    /// Same contract as [`dijkstra`](Self::dijkstra), with open entries keyed
    /// on `g + pather.estimate(node, goal)`. The result is only guaranteed to
    /// be minimal when the estimate never overestimates; on 8-connected maps
    /// a Manhattan estimate can overestimate diagonal routes.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, start: usize, goal: usize) -> bool {
        self.best_first(pather, start, goal, |n| pather.estimate(n, goal))
    }
}
