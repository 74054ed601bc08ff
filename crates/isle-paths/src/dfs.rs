use crate::SearchRange;
use crate::traits::Pather;

impl SearchRange {
    /// Iterative depth-first traversal from `start`.
    ///
    /// Returns every node reachable from `start` in discovery order. This is
    /// not a shortest path. Neighbors are pushed in adjacency order, so they
    /// are explored last-to-first. An out-of-range or impassable `start`
    /// yields an empty slice.
    pub fn dfs<P: Pather>(&mut self, pather: &P, start: usize) -> &[usize] {
        let mut stack = std::mem::take(&mut self.stack);
        self.sweep(pather, start, &mut stack);
        stack.clear();
        self.stack = stack;
        &self.path
    }

    /// Recursive depth-first traversal from `start`.
    ///
    /// Same reachable set as [`dfs`](Self::dfs), but neighbors are explored
    /// in adjacency order. Recursion depth grows with the size of the
    /// reachable component, so prefer `dfs` on very large maps.
    pub fn dfs_recursive<P: Pather>(&mut self, pather: &P, start: usize) -> &[usize] {
        self.reset();
        if self.contains(start) {
            self.descend(pather, start);
        }
        &self.path
    }

    fn descend<P: Pather>(&mut self, pather: &P, node: usize) {
        if self.closed[node] || !pather.passable(node) {
            return;
        }
        self.closed[node] = true;
        self.path.push(node);

        // One buffer per frame: the shared one is still being iterated by
        // the caller.
        let mut nbuf = Vec::with_capacity(8);
        self.expand(pather, node, &mut nbuf);
        for ni in nbuf {
            self.descend(pather, ni);
        }
    }
}
