//! The tile grid and its adjacency graph.

use std::ops::{Index, IndexMut};

use isle_core::{Dir, Point, Range};
use isle_paths::{AstarPather, Pather, WeightedPather, chebyshev, manhattan};

use crate::error::MapError;
use crate::tile::{Decoration, Tile, TileId};

/// A `rows`×`cols` island map.
///
/// Tiles are stored row-major, so a tile's id is `row * cols + col`. The
/// start and castle tiles are chosen by
/// [`create_island`](Map::create_island).
#[derive(Debug, Clone)]
pub struct Map {
    rows: i32,
    cols: i32,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) start: Option<TileId>,
    pub(crate) castle: Option<TileId>,
}

impl Map {
    /// Allocate a `rows`×`cols` grid with every in-bounds neighbour slot
    /// wired, then derive each tile's initial coast/grass code and fog code
    /// from its position.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MapError> {
        if rows <= 0 || cols <= 0 {
            return Err(MapError::InvalidSize { rows, cols });
        }
        let len = (rows as usize) * (cols as usize);
        let mut map = Self {
            rows,
            cols,
            tiles: (0..len).map(Tile::new).collect(),
            start: None,
            castle: None,
        };

        let bounds = map.bounds();
        for p in bounds.iter() {
            let id = map.id_of(p);
            for d in Dir::ALL {
                let np = p.step(d);
                if bounds.contains(np) {
                    map.tiles[id].adjacents[d.index()] = Some(map.id_of(np));
                }
            }
        }

        for id in 0..len {
            map.tiles[id].update_auto_tile();
            map.refresh_fog(id);
        }
        Ok(map)
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The grid as a range of points (`x` = column, `y` = row).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    #[inline]
    pub fn contains(&self, id: TileId) -> bool {
        id < self.tiles.len()
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Mutable access for collaborators that reveal tiles or adjust weights.
    pub fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    /// Tile id at grid position `p`, or `None` off the grid.
    pub fn id_at(&self, p: Point) -> Option<TileId> {
        self.bounds().contains(p).then(|| self.id_of(p))
    }

    /// Grid position of `id`.
    #[inline]
    pub fn position(&self, id: TileId) -> Point {
        let cols = self.cols as usize;
        Point::new((id % cols) as i32, (id / cols) as i32)
    }

    #[inline]
    fn id_of(&self, p: Point) -> TileId {
        (p.y * self.cols + p.x) as TileId
    }

    /// The tile the player starts on, once an island has been created.
    pub fn start_tile(&self) -> Option<TileId> {
        self.start
    }

    /// The castle site picked during generation.
    pub fn castle_tile(&self) -> Option<TileId> {
        self.castle
    }

    /// Ids of every tile below the land threshold: coast codes and water.
    ///
    /// This is the pool erosion samples from, so carved tiles stay in it.
    pub fn coast_tiles(&self) -> Vec<TileId> {
        self.ids_where(|t| t.decoration.value() < Decoration::GRASS.value())
    }

    /// Ids of every grass or biome tile.
    pub fn land_tiles(&self) -> Vec<TileId> {
        self.ids_where(|t| t.decoration.is_land())
    }

    /// Ids of every tile decorated with `d`.
    pub fn tiles_with(&self, d: Decoration) -> Vec<TileId> {
        self.ids_where(|t| t.decoration == d)
    }

    /// Number of tiles decorated with `d`.
    pub fn count(&self, d: Decoration) -> usize {
        self.tiles.iter().filter(|t| t.decoration == d).count()
    }

    pub(crate) fn ids_where(&self, f: impl Fn(&Tile) -> bool) -> Vec<TileId> {
        self.tiles.iter().filter(|t| f(t)).map(|t| t.id).collect()
    }

    /// Manhattan distance between two tiles' grid positions.
    pub fn manhattan(&self, a: TileId, b: TileId) -> i32 {
        manhattan(self.position(a), self.position(b))
    }

    /// Tiles at Chebyshev distance exactly `radius` from `center`, clipped to
    /// the grid, in row-major order.
    pub fn ring(&self, center: TileId, radius: i32) -> Vec<TileId> {
        let c = self.position(center);
        Range::around(c, radius)
            .intersect(self.bounds())
            .iter()
            .filter(|&p| chebyshev(p, c) == radius)
            .map(|p| self.id_of(p))
            .collect()
    }

    /// Clear the neighbour slots of `id`.
    ///
    /// Former neighbours keep pointing at it and keep their codes; searches
    /// never enter it because it is no longer traversable once carved.
    pub(crate) fn detach(&mut self, id: TileId) {
        self.tiles[id].adjacents = [None; 8];
    }
}

impl Index<TileId> for Map {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Tile {
        &self.tiles[id]
    }
}

impl IndexMut<TileId> for Map {
    fn index_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id]
    }
}

// ---------------------------------------------------------------------------
// Search capabilities
// ---------------------------------------------------------------------------

impl Pather for Map {
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        if let Some(t) = self.tiles.get(node) {
            buf.extend(t.neighbors());
        }
    }

    fn passable(&self, node: usize) -> bool {
        self.tiles.get(node).is_some_and(Tile::can_traverse)
    }
}

impl WeightedPather for Map {
    fn cost(&self, _from: usize, to: usize) -> i32 {
        self.tiles[to].weight
    }
}

impl AstarPather for Map {
    fn estimate(&self, from: usize, to: usize) -> i32 {
        self.manhattan(from, to)
    }
}
