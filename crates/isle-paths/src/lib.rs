//! Graph-search algorithms over tile grids.
//!
//! This crate provides the traversal and shortest-path algorithms used on
//! island maps. Nodes are flat indices (a map's tile ids):
//!
//! - **DFS** discovery order, iterative ([`SearchRange::dfs`]) and
//!   recursive ([`SearchRange::dfs_recursive`])
//! - **BFS** discovery order ([`SearchRange::bfs`]) and unweighted
//!   shortest paths ([`SearchRange::bfs_path`])
//! - **Dijkstra** weighted shortest paths ([`SearchRange::dijkstra`])
//! - **A\*** weighted shortest paths with a heuristic ([`SearchRange::astar`])
//!
//! All algorithms operate through [`SearchRange`], which owns the scratch
//! arrays (predecessors, distances, closed flags) and the output path, so
//! nothing is ever written onto the nodes themselves.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod heap;
mod search;
mod traits;

#[cfg(test)]
mod fixture;

pub use distance::{chebyshev, manhattan};
pub use heap::{EmptyQueue, PriorityQueue};
pub use search::{NO_NODE, SearchRange, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
