use crate::SearchRange;
use crate::traits::Pather;

impl SearchRange {
    /// Breadth-first traversal from `start`.
    ///
    /// Returns every node reachable from `start` in level order; within a
    /// level, nodes appear in the order their parents listed them.
    pub fn bfs<P: Pather>(&mut self, pather: &P, start: usize) -> &[usize] {
        let mut queue = std::mem::take(&mut self.queue);
        self.sweep(pather, start, &mut queue);
        queue.clear();
        self.queue = queue;
        &self.path
    }

    /// Unweighted shortest path from `start` to `goal`.
    ///
    /// Expands level by level and stops the moment `goal` is dequeued.
    /// Returns `false` and leaves an empty [`path`](Self::path) when either
    /// endpoint is out of range or impassable, or `goal` is unreachable.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, start: usize, goal: usize) -> bool {
        self.reset();
        if !self.endpoints_ok(pather, start, goal) {
            return false;
        }

        let mut queue = std::mem::take(&mut self.queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();

        queue.push_back(start);
        self.closed[start] = true;
        self.dist[start] = 0;

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            if ci == goal {
                found = true;
                break;
            }
            let next_dist = self.dist[ci] + 1;

            self.expand(pather, ci, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.closed[ni] {
                    continue;
                }
                self.closed[ni] = true;
                self.prev[ni] = ci;
                self.dist[ni] = next_dist;
                queue.push_back(ni);
            }
        }

        queue.clear();
        self.queue = queue;
        self.nbuf = nbuf;

        if found {
            self.reconstruct(goal);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use crate::fixture::{GridPather, assert_valid_path, oracle_distances};
    use crate::{SearchRange, UNREACHABLE};

    #[test]
    fn bfs_is_level_order() {
        let g = GridPather::open(5, 5);
        let mut sr = SearchRange::new(25);
        let order = sr.bfs(&g, 12).to_vec();
        assert_eq!(order.len(), 25);
        assert_eq!(order[0], 12);
        // First ring in adjacency order, then the outer ring.
        assert_eq!(&order[1..9], &[6, 7, 8, 11, 13, 16, 17, 18]);
        let outer = &order[9..];
        assert!(outer.iter().all(|&i| {
            let p = g.point(i);
            (p.x - 2).abs().max((p.y - 2).abs()) == 2
        }));
    }

    #[test]
    fn bfs_skips_blocked_start() {
        let mut g = GridPather::open(2, 2);
        g.block(0);
        let mut sr = SearchRange::new(4);
        assert!(sr.bfs(&g, 0).is_empty());
    }

    #[test]
    fn corner_to_corner_on_5x5() {
        let g = GridPather::open(5, 5);
        let mut sr = SearchRange::new(25);
        assert!(sr.bfs_path(&g, 0, 24));
        assert_eq!(sr.path().len(), 5);
        assert_valid_path(&g, sr.path(), 0, 24);

        let g = GridPather::cardinal(5, 5);
        assert!(sr.bfs_path(&g, 0, 24));
        assert_eq!(sr.path().len(), 9);
        assert_valid_path(&g, sr.path(), 0, 24);
    }

    #[test]
    fn hop_count_matches_oracle() {
        let mut g = GridPather::cardinal(6, 6);
        for i in [1, 7, 13, 19, 20, 22, 27, 33] {
            g.block(i);
        }
        let start = 0;
        let oracle = oracle_distances(&g, start, true);
        let mut sr = SearchRange::new(36);
        for goal in 0..36 {
            let found = sr.bfs_path(&g, start, goal);
            if oracle[goal] == UNREACHABLE {
                assert!(!found, "goal {goal} should be unreachable");
                assert!(sr.path().is_empty());
            } else {
                assert!(found, "goal {goal} should be reachable");
                assert_eq!(sr.path().len() as i32 - 1, oracle[goal]);
                assert_eq!(sr.distance_at(goal), oracle[goal]);
                assert_valid_path(&g, sr.path(), start, goal);
            }
        }
    }

    #[test]
    fn start_equals_goal() {
        let g = GridPather::open(3, 3);
        let mut sr = SearchRange::new(9);
        assert!(sr.bfs_path(&g, 4, 4));
        assert_eq!(sr.path(), &[4]);
    }

    #[test]
    fn blocked_goal_or_missing_endpoint_fails() {
        let mut g = GridPather::open(3, 3);
        g.block(8);
        let mut sr = SearchRange::new(9);
        assert!(!sr.bfs_path(&g, 0, 8));
        assert!(sr.path().is_empty());
        assert!(!sr.bfs_path(&g, 0, 9));
        assert!(!sr.bfs_path(&g, 9, 0));
        assert!(sr.path().is_empty());
    }
}
