//! Small grid graphs and brute-force oracles for the search tests.

use crate::traits::{AstarPather, Pather, WeightedPather};
use crate::{UNREACHABLE, manhattan};
use isle_core::{Dir, Point};

/// A `w`×`h` grid with per-node weights and blocked cells.
pub(crate) struct GridPather {
    pub w: i32,
    pub h: i32,
    pub blocked: Vec<bool>,
    pub weights: Vec<i32>,
    pub diagonal: bool,
}

impl GridPather {
    /// 8-connected grid, every weight 1.
    pub fn open(w: i32, h: i32) -> Self {
        let n = (w * h) as usize;
        Self {
            w,
            h,
            blocked: vec![false; n],
            weights: vec![1; n],
            diagonal: true,
        }
    }

    /// 4-connected grid, every weight 1.
    pub fn cardinal(w: i32, h: i32) -> Self {
        Self {
            diagonal: false,
            ..Self::open(w, h)
        }
    }

    pub fn block(&mut self, i: usize) {
        self.blocked[i] = true;
    }

    pub fn set_weight(&mut self, i: usize, weight: i32) {
        self.weights[i] = weight;
    }

    pub fn len(&self) -> usize {
        (self.w * self.h) as usize
    }

    pub fn point(&self, i: usize) -> Point {
        Point::new(i as i32 % self.w, i as i32 / self.w)
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.w || p.y >= self.h {
            return None;
        }
        Some((p.y * self.w + p.x) as usize)
    }

    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        let d = self.point(a) - self.point(b);
        let (dx, dy) = (d.x.abs(), d.y.abs());
        if self.diagonal {
            dx.max(dy) == 1
        } else {
            dx + dy == 1
        }
    }
}

impl Pather for GridPather {
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        let p = self.point(node);
        for d in Dir::ALL {
            if !self.diagonal && !d.is_cardinal() {
                continue;
            }
            if let Some(n) = self.idx(p.step(d)) {
                buf.push(n);
            }
        }
    }

    fn passable(&self, node: usize) -> bool {
        !self.blocked[node]
    }
}

impl WeightedPather for GridPather {
    fn cost(&self, _from: usize, to: usize) -> i32 {
        self.weights[to]
    }
}

impl AstarPather for GridPather {
    fn estimate(&self, from: usize, to: usize) -> i32 {
        manhattan(self.point(from), self.point(to))
    }
}

/// Bellman-Ford relaxation from `start` until nothing changes.
///
/// With `unit` set every step costs 1 (hop distances).
pub(crate) fn oracle_distances(g: &GridPather, start: usize, unit: bool) -> Vec<i32> {
    let n = g.len();
    let mut dist = vec![UNREACHABLE; n];
    if g.blocked[start] {
        return dist;
    }
    dist[start] = 0;
    let mut buf = Vec::new();
    loop {
        let mut changed = false;
        for u in 0..n {
            if dist[u] == UNREACHABLE || g.blocked[u] {
                continue;
            }
            buf.clear();
            g.neighbors(u, &mut buf);
            for &v in &buf {
                if g.blocked[v] {
                    continue;
                }
                let step = if unit { 1 } else { g.cost(u, v) };
                if dist[u] + step < dist[v] {
                    dist[v] = dist[u] + step;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Assert that `path` is a walk from `start` to `goal` over passable,
/// adjacent nodes.
pub(crate) fn assert_valid_path(g: &GridPather, path: &[usize], start: usize, goal: usize) {
    assert!(!path.is_empty());
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), goal);
    for w in path.windows(2) {
        assert!(g.adjacent(w[0], w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    assert!(path.iter().all(|&n| !g.blocked[n]));
}
