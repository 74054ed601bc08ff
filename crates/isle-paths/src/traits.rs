/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `node` into `buf`, in the order they should be
    /// expanded. The caller clears `buf` before calling.
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>);

    /// Whether `node` may be entered or expanded at all.
    ///
    /// Searches never step onto, or expand from, a node for which this
    /// returns `false`.
    fn passable(&self, node: usize) -> bool {
        let _ = node;
        true
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: usize, to: usize) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    ///
    /// A* only returns optimal paths when this never overestimates.
    fn estimate(&self, from: usize, to: usize) -> i32;
}
