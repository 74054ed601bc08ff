//! Traversals and shortest paths over a [`Map`].

use isle_paths::SearchRange;

use crate::map::Map;
use crate::tile::{Tile, TileId};

/// Search engine bound to one map.
///
/// Every operation clears and refills the shared [`path`](Self::path)
/// buffer. Predecessors and distances live in the engine, never on the
/// tiles, so the map is only borrowed immutably. Ids outside the map stand
/// for "no tile": traversals from them are empty and path searches fail.
///
/// Only tiles that [`can_traverse`](Tile::can_traverse) are ever entered or
/// expanded.
#[derive(Debug, Clone)]
pub struct TileSearch<'m> {
    map: &'m Map,
    engine: SearchRange,
}

impl<'m> TileSearch<'m> {
    /// Bind a search engine to `map`.
    pub fn new(map: &'m Map) -> Self {
        Self {
            map,
            engine: SearchRange::new(map.len()),
        }
    }

    #[inline]
    pub fn map(&self) -> &'m Map {
        self.map
    }

    /// Result of the last call: discovery order after a traversal, the
    /// start-to-goal path (both inclusive) after a successful path search,
    /// empty otherwise.
    #[inline]
    pub fn path(&self) -> &[TileId] {
        self.engine.path()
    }

    /// The tiles of [`path`](Self::path).
    pub fn path_tiles(&self) -> impl Iterator<Item = &'m Tile> + '_ {
        let map = self.map;
        self.engine.path().iter().map(move |&id| &map[id])
    }

    /// Sum of the weights of every tile entered along the path, i.e. all but
    /// the first.
    pub fn path_cost(&self) -> i32 {
        self.engine.path_cost(self.map)
    }

    /// Accumulated cost (or hop count after
    /// [`path_finding_bfs`](Self::path_finding_bfs)) of reaching `id` in the
    /// last path search.
    pub fn distance_at(&self, id: TileId) -> i32 {
        self.engine.distance_at(id)
    }

    /// Manhattan distance between two tiles, the A* estimate.
    pub fn heuristic(&self, a: TileId, b: TileId) -> i32 {
        self.map.manhattan(a, b)
    }

    /// Iterative depth-first discovery order from `start`.
    pub fn dfs(&mut self, start: TileId) -> &[TileId] {
        self.engine.dfs(self.map, start)
    }

    /// Recursive depth-first discovery order from `start`.
    ///
    /// Recursion depth is bounded by the size of the reachable region.
    pub fn dfs_recursive(&mut self, start: TileId) -> &[TileId] {
        self.engine.dfs_recursive(self.map, start)
    }

    /// Breadth-first discovery order from `start`.
    pub fn bfs(&mut self, start: TileId) -> &[TileId] {
        self.engine.bfs(self.map, start)
    }

    /// Fewest-steps path from `start` to `goal`, ignoring weights.
    pub fn path_finding_bfs(&mut self, start: TileId, goal: TileId) -> bool {
        self.engine.bfs_path(self.map, start, goal)
    }

    /// Cheapest path from `start` to `goal` by accumulated tile weight.
    pub fn dijkstra(&mut self, start: TileId, goal: TileId) -> bool {
        self.engine.dijkstra(self.map, start, goal)
    }

    /// Cheapest path from `start` to `goal`, guided by the Manhattan
    /// [`heuristic`](Self::heuristic).
    ///
    /// Diagonal steps cost the same as straight ones, so the estimate can
    /// exceed the true remaining cost and the result may be slightly more
    /// expensive than the [`dijkstra`](Self::dijkstra) one.
    pub fn astar(&mut self, start: TileId, goal: TileId) -> bool {
        self.engine.astar(self.map, start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Decoration;
    use isle_core::Dir;

    fn open_map(rows: i32, cols: i32) -> Map {
        let mut map = Map::new(rows, cols).unwrap();
        for id in 0..map.len() {
            map[id].set_decoration(Decoration::GRASS);
        }
        map
    }

    fn assert_walkable(map: &Map, path: &[TileId], start: TileId, goal: TileId) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for w in path.windows(2) {
            assert!(map[w[0]].neighbors().any(|n| n == w[1]));
            assert!(map[w[1]].neighbors().any(|n| n == w[0]));
        }
        assert!(path.iter().all(|&id| map[id].can_traverse()));
    }

    /// Minimum cost by Bellman-Ford relaxation over every edge.
    fn oracle_cost(map: &Map, start: TileId, goal: TileId) -> Option<i32> {
        let mut dist = vec![i32::MAX; map.len()];
        dist[start] = 0;
        loop {
            let mut changed = false;
            for t in map.tiles() {
                if dist[t.id()] == i32::MAX || !t.can_traverse() {
                    continue;
                }
                for n in t.neighbors() {
                    let nd = dist[t.id()] + map[n].weight();
                    if map[n].can_traverse() && nd < dist[n] {
                        dist[n] = nd;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        (dist[goal] != i32::MAX).then_some(dist[goal])
    }

    #[test]
    fn open_5x5_corner_to_corner() {
        let map = open_map(5, 5);
        let mut ts = TileSearch::new(&map);
        assert!(ts.path_finding_bfs(0, 24));
        // Diagonal adjacency makes the corner-to-corner hop count 4.
        assert_eq!(ts.path().len(), 5);
        assert_walkable(&map, ts.path(), 0, 24);

        assert!(ts.dijkstra(0, 24));
        assert_eq!(ts.path_cost(), 4);
        assert!(ts.astar(0, 24));
        assert_eq!(ts.path_cost(), 4);
        assert!(ts.path_cost() <= 8);
    }

    #[test]
    fn cardinal_only_5x5_matches_manhattan() {
        // Cut every diagonal slot so movement is 4-directional.
        let mut map = open_map(5, 5);
        for id in 0..map.len() {
            for d in Dir::ALL {
                if !d.is_cardinal() {
                    map[id].adjacents[d.index()] = None;
                }
            }
        }
        let mut ts = TileSearch::new(&map);
        assert!(ts.path_finding_bfs(0, 24));
        assert_eq!(ts.path().len(), 9);
        assert!(ts.dijkstra(0, 24));
        assert_eq!(ts.path_cost(), 8);
        assert!(ts.astar(0, 24));
        assert_eq!(ts.path_cost(), 8);
        assert_walkable(&map, ts.path(), 0, 24);
    }

    #[test]
    fn heavy_center_is_avoided() {
        let mut map = open_map(5, 5);
        map[12].set_weight(10);
        let mut ts = TileSearch::new(&map);
        assert!(ts.dijkstra(0, 24));
        assert!(!ts.path().contains(&12));
        assert!(ts.path_cost() <= 8);
        assert_eq!(Some(ts.path_cost()), oracle_cost(&map, 0, 24));
        assert_walkable(&map, ts.path(), 0, 24);
    }

    #[test]
    fn dijkstra_matches_relaxation_oracle() {
        let mut map = open_map(4, 4);
        for (id, w) in [(1, 3), (5, 6), (6, 2), (9, 4), (10, 7), (13, 2)] {
            map[id].set_weight(w);
        }
        map[2].set_decoration(Decoration::EMPTY);
        let mut ts = TileSearch::new(&map);
        for goal in 0..map.len() {
            let expected = if map[goal].can_traverse() {
                oracle_cost(&map, 0, goal)
            } else {
                None
            };
            let found = ts.dijkstra(0, goal);
            assert_eq!(found, expected.is_some());
            if found {
                assert_eq!(Some(ts.path_cost()), expected, "goal {goal}");
            }
        }
    }

    #[test]
    fn water_goal_fails_everywhere() {
        let mut map = open_map(5, 5);
        map[24].set_decoration(Decoration::EMPTY);
        let mut ts = TileSearch::new(&map);
        assert!(!ts.path_finding_bfs(0, 24));
        assert!(ts.path().is_empty());
        assert!(!ts.dijkstra(0, 24));
        assert!(ts.path().is_empty());
        assert!(!ts.astar(0, 24));
        assert!(ts.path().is_empty());
    }

    #[test]
    fn missing_endpoints_are_harmless() {
        let map = open_map(3, 3);
        let mut ts = TileSearch::new(&map);
        assert!(ts.dfs(99).is_empty());
        assert!(ts.dfs_recursive(99).is_empty());
        assert!(ts.bfs(99).is_empty());
        assert!(!ts.path_finding_bfs(0, 99));
        assert!(!ts.dijkstra(99, 0));
        assert!(!ts.astar(99, 99));
    }

    #[test]
    fn traversals_skip_water() {
        let mut map = open_map(3, 3);
        for id in [2, 5, 8] {
            map[id].set_decoration(Decoration::EMPTY);
        }
        let mut ts = TileSearch::new(&map);
        for order in [ts.dfs(0).to_vec(), ts.dfs_recursive(0).to_vec(), ts.bfs(0).to_vec()] {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 3, 4, 6, 7]);
            assert_eq!(order[0], 0);
        }
        assert_eq!(ts.bfs(0), &[0, 1, 3, 4, 6, 7]);
    }

    #[test]
    fn path_tiles_follow_path() {
        let map = open_map(3, 3);
        let mut ts = TileSearch::new(&map);
        assert!(ts.astar(0, 2));
        let ids: Vec<TileId> = ts.path_tiles().map(Tile::id).collect();
        assert_eq!(ids, ts.path());
        assert_eq!(ts.heuristic(0, 8), 4);
        assert_eq!(ts.distance_at(2), 2);
    }

    #[test]
    fn generated_island_paths_are_valid() {
        use rand::SeedableRng;
        let params = crate::IslandParams::default();
        let mut rng = rand_pcg::Pcg64::seed_from_u64(9);
        let map = loop {
            let mut map = Map::new(16, 16).unwrap();
            if map.create_island(&params, &mut rng).is_ok() {
                break map;
            }
        };
        let start = map.start_tile().unwrap();
        let mut ts = TileSearch::new(&map);
        let reachable = ts.bfs(start).to_vec();
        assert_eq!(reachable[0], start);
        for &goal in &reachable {
            assert!(ts.path_finding_bfs(start, goal));
            let hops = ts.path().len();
            assert_walkable(&map, ts.path(), start, goal);
            assert!(ts.dijkstra(start, goal));
            let best = ts.path_cost();
            assert!(ts.path().len() >= hops);
            assert!(ts.astar(start, goal));
            assert!(ts.path_cost() >= best);
            assert_walkable(&map, ts.path(), start, goal);
        }
    }
}
