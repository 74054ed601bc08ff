//! Fog of war.
//!
//! A tile is either revealed (`visited`) or hidden. Hidden tiles next to
//! revealed ones carry a fog border code so the renderer can draw a soft
//! edge; see [`Tile::fog`](crate::Tile::fog).

use isle_core::{Dir, Range};

use crate::map::Map;
use crate::tile::TileId;

impl Map {
    /// Reveal the square of Chebyshev `radius` around `center`.
    ///
    /// Marks those tiles visited, then refreshes the fog code of everything
    /// up to `radius + 1` away. Returns the ids whose visited flag or fog
    /// code changed, in row-major order. A negative `radius` reveals nothing.
    pub fn reveal(&mut self, center: TileId, radius: i32) -> Vec<TileId> {
        if !self.contains(center) || radius < 0 {
            return Vec::new();
        }
        let c = self.position(center);
        let bounds = self.bounds();
        let mut changed = Vec::new();

        for p in Range::around(c, radius).intersect(bounds) {
            let Some(id) = self.id_at(p) else { continue };
            if !self.tiles[id].visited {
                self.tiles[id].visited = true;
                changed.push(id);
            }
        }

        for p in Range::around(c, radius + 1).intersect(bounds) {
            let Some(id) = self.id_at(p) else { continue };
            if self.refresh_fog(id) && !changed.contains(&id) {
                changed.push(id);
            }
        }

        changed.sort_unstable();
        changed
    }

    /// Recompute the fog code of `id` from its cardinal neighbours' visited
    /// flags. Grid positions are used rather than adjacency slots so that
    /// water tiles get fog borders too. Returns whether the code changed.
    pub(crate) fn refresh_fog(&mut self, id: TileId) -> bool {
        let p = self.position(id);
        let mut fog = 0u8;
        for (i, d) in Dir::CARDINAL.iter().enumerate() {
            let revealed = self.id_at(p.step(*d)).is_some_and(|n| self.tiles[n].visited);
            if revealed {
                fog |= 1 << i;
            }
        }
        let old = std::mem::replace(&mut self.tiles[id].fog, fog);
        old != fog
    }

    /// Hide every tile again.
    pub fn cover(&mut self) {
        for t in self.tiles.iter_mut() {
            t.visited = false;
            t.fog = 0;
        }
    }
}
