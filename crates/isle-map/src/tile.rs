//! Tiles and their decoration codes.
//!
//! [`Decoration`] is a newtype over `i32`. Codes `0..=14` are coast
//! auto-tiles, [`Decoration::GRASS`] (15) is the base land code, codes above
//! it are biomes, and [`Decoration::EMPTY`] (-1) is water.

use isle_core::Dir;

/// Row-major index of a tile: `row * cols + col`.
pub type TileId = usize;

/// Terrain classification of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoration(pub i32);

impl Decoration {
    /// Water: not land, never traversable.
    pub const EMPTY: Decoration = Decoration(-1);
    /// Land with all four cardinal neighbours. Codes below this are coast.
    pub const GRASS: Decoration = Decoration(15);
    pub const TREE: Decoration = Decoration(16);
    pub const HILLS: Decoration = Decoration(17);
    pub const MOUNTAINS: Decoration = Decoration(18);
    pub const TOWN: Decoration = Decoration(19);
    pub const CASTLE: Decoration = Decoration(20);
    pub const MONSTER: Decoration = Decoration(21);

    /// Create a decoration from its raw code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw code.
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Coast auto-tile: land missing at least one cardinal neighbour.
    #[inline]
    pub const fn is_coast(self) -> bool {
        self.0 >= 0 && self.0 < Self::GRASS.0
    }

    /// Grass or any biome.
    #[inline]
    pub const fn is_land(self) -> bool {
        self.0 >= Self::GRASS.0
    }

    /// Codes that are derived from the neighbour mask (coast and grass).
    #[inline]
    pub const fn is_auto_tile(self) -> bool {
        self.0 >= 0 && self.0 <= Self::GRASS.0
    }

    /// Everything but water can be walked on.
    #[inline]
    pub const fn can_traverse(self) -> bool {
        !self.is_empty()
    }

    /// Cost of entering a tile with this decoration.
    pub const fn default_weight(self) -> i32 {
        match self {
            Self::TREE => 2,
            Self::HILLS => 3,
            Self::MOUNTAINS => 4,
            Self::MONSTER => 5,
            _ => 1,
        }
    }
}

impl From<i32> for Decoration {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Decoration> for i32 {
    fn from(d: Decoration) -> Self {
        d.0
    }
}

/// One grid cell and graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub(crate) id: TileId,
    pub(crate) adjacents: [Option<TileId>; 8],
    pub(crate) decoration: Decoration,
    pub(crate) weight: i32,
    pub(crate) visited: bool,
    pub(crate) fog: u8,
}

impl Tile {
    pub(crate) fn new(id: TileId) -> Self {
        Self {
            id,
            adjacents: [None; 8],
            decoration: Decoration::GRASS,
            weight: 1,
            visited: false,
            fog: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Neighbour slots in [`Dir::ALL`] order; `None` off the grid or once
    /// either side has been carved away.
    #[inline]
    pub fn adjacents(&self) -> &[Option<TileId>; 8] {
        &self.adjacents
    }

    #[inline]
    pub fn adjacent(&self, d: Dir) -> Option<TileId> {
        self.adjacents[d.index()]
    }

    /// Populated neighbour ids in slot order.
    pub fn neighbors(&self) -> impl Iterator<Item = TileId> + '_ {
        self.adjacents.iter().flatten().copied()
    }

    /// Number of populated neighbour slots.
    pub fn neighbor_count(&self) -> usize {
        self.adjacents.iter().filter(|a| a.is_some()).count()
    }

    #[inline]
    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Set the decoration and reset the weight to its default.
    pub fn set_decoration(&mut self, d: Decoration) {
        self.decoration = d;
        self.weight = d.default_weight();
    }

    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Override the cost of entering this tile. Clamped to at least 1.
    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight.max(1);
    }

    #[inline]
    pub fn can_traverse(&self) -> bool {
        self.decoration.can_traverse()
    }

    /// Whether the tile has been revealed.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Fog border code: bit `i` is set when the neighbour in
    /// `Dir::CARDINAL[i]` has been revealed.
    #[inline]
    pub fn fog(&self) -> u8 {
        self.fog
    }

    /// Bit `i` is set when the slot of `Dir::CARDINAL[i]` is populated.
    pub fn auto_tile_mask(&self) -> i32 {
        Dir::CARDINAL
            .iter()
            .enumerate()
            .filter(|(_, d)| self.adjacent(**d).is_some())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Recompute a coast/grass code from the current neighbour slots.
    pub(crate) fn update_auto_tile(&mut self) {
        self.set_decoration(Decoration(self.auto_tile_mask()));
    }
}
