//! Island generation.
//!
//! [`Map::create_island`] runs a fixed pipeline over a freshly allocated
//! map:
//!
//! 1. carve lakes out of the land,
//! 2. erode the coast a number of times,
//! 3. scatter trees, hills, mountains, towns and monster zones over the
//!    land (later passes may overwrite earlier ones),
//! 4. pick the start tile among the towns,
//! 5. pick the castle site among coast and grass tiles.
//!
//! Every stage shuffles its candidate pool with [`shuffle`] and converts a
//! prefix of it.

use log::debug;
use rand::Rng;

use crate::config::IslandParams;
use crate::error::IslandError;
use crate::map::Map;
use crate::tile::{Decoration, TileId};

/// In-place uniform Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

impl Map {
    /// Carve and decorate the island, then pick the start and castle tiles.
    ///
    /// On error the map is left partially decorated and must be discarded;
    /// generate a fresh one with [`Map::new`] and try again.
    pub fn create_island<R: Rng>(
        &mut self,
        params: &IslandParams,
        rng: &mut R,
    ) -> Result<(), IslandError> {
        let lakes = self.decorate_tiles(self.land_tiles(), params.lake_percent, Decoration::EMPTY, rng);
        debug!("carved {lakes} lake tiles");

        for i in 0..params.erode_iterations {
            let eroded =
                self.decorate_tiles(self.coast_tiles(), params.erode_percent, Decoration::EMPTY, rng);
            debug!("erosion pass {}: removed {eroded} coast tiles", i + 1);
        }

        let biomes = [
            (params.tree_percent, Decoration::TREE),
            (params.hill_percent, Decoration::HILLS),
            (params.mountain_percent, Decoration::MOUNTAINS),
            (params.town_percent, Decoration::TOWN),
            (params.monster_percent, Decoration::MONSTER),
        ];
        for (percent, d) in biomes {
            let n = self.decorate_tiles(self.land_tiles(), percent, d, rng);
            debug!("decorated {n} tiles with {d:?}");
        }

        let start = self.pick_start(rng)?;
        let castle = self.pick_castle(rng)?;
        debug!("start tile {start}, castle site {castle}");
        Ok(())
    }

    /// Shuffle `candidates` and set the decoration of the first
    /// `floor(len * percent)` of them to `d`. Returns how many were changed.
    ///
    /// Decorating with [`Decoration::EMPTY`] also clears the tile's own
    /// neighbour slots. Its neighbours are left untouched.
    pub fn decorate_tiles<R: Rng>(
        &mut self,
        mut candidates: Vec<TileId>,
        percent: f32,
        d: Decoration,
        rng: &mut R,
    ) -> usize {
        let total = ((candidates.len() as f32 * percent).floor() as usize).min(candidates.len());
        shuffle(&mut candidates, rng);

        for &id in &candidates[..total] {
            if d.is_empty() {
                self.detach(id);
            }
            self.tiles[id].set_decoration(d);
        }
        total
    }

    /// Choose the start tile uniformly among the towns.
    pub fn pick_start<R: Rng>(&mut self, rng: &mut R) -> Result<TileId, IslandError> {
        let mut towns = self.tiles_with(Decoration::TOWN);
        if towns.is_empty() {
            return Err(IslandError::NoTowns);
        }
        shuffle(&mut towns, rng);
        self.start = Some(towns[0]);
        Ok(towns[0])
    }

    /// Choose the castle site uniformly among coast and grass tiles.
    pub fn pick_castle<R: Rng>(&mut self, rng: &mut R) -> Result<TileId, IslandError> {
        let sites = self.ids_where(|t| t.decoration().is_auto_tile());
        if sites.is_empty() {
            return Err(IslandError::NoCastleSite);
        }
        let castle = sites[rng.random_range(0..sites.len())];
        self.castle = Some(castle);
        Ok(castle)
    }
}
