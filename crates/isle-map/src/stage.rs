//! A playable session over a generated island.
//!
//! [`Stage`] owns the map, the random source and the player's position. It
//! regenerates islands until one is usable, turns a reachable town into the
//! castle, answers move requests and walks the player along the resulting
//! path while lifting the fog. Nothing here draws; a front-end reads the map
//! and the last path to render them.

use log::{debug, info, warn};
use rand::Rng;

use crate::config::StageConfig;
use crate::error::StageError;
use crate::map::Map;
use crate::search::TileSearch;
use crate::tile::{Decoration, TileId};

/// Game session state.
#[derive(Debug, Clone)]
pub struct Stage<R> {
    config: StageConfig,
    rng: R,
    map: Map,
    current: TileId,
    castle: Option<TileId>,
    last_path: Vec<TileId>,
}

impl<R: Rng> Stage<R> {
    /// Validate `config` and generate the first island.
    pub fn new(config: StageConfig, mut rng: R) -> Result<Self, StageError> {
        config.validate()?;
        let (map, start) = generate(&config, &mut rng)?;
        let mut stage = Self {
            config,
            rng,
            map,
            current: start,
            castle: None,
            last_path: Vec::new(),
        };
        stage.settle(start);
        Ok(stage)
    }

    /// Throw the current island away and generate a new one.
    ///
    /// On error the previous island is kept.
    pub fn reset(&mut self) -> Result<(), StageError> {
        let (map, start) = generate(&self.config, &mut self.rng)?;
        self.map = map;
        self.settle(start);
        Ok(())
    }

    fn settle(&mut self, start: TileId) {
        self.current = start;
        self.last_path.clear();
        self.castle = self.promote_castle();
        self.map.reveal(start, self.config.reveal_radius);
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// The tile the player stands on.
    #[inline]
    pub fn current_tile(&self) -> TileId {
        self.current
    }

    /// The town promoted to castle, if any town was reachable.
    #[inline]
    pub fn castle(&self) -> Option<TileId> {
        self.castle
    }

    /// Path stored by the last successful [`request_move`](Self::request_move)
    /// that has not been walked yet.
    #[inline]
    pub fn last_path(&self) -> &[TileId] {
        &self.last_path
    }

    // -------------------------------------------------------------------
    // Castle
    // -------------------------------------------------------------------

    /// Turn a random town reachable from the start tile into the castle.
    ///
    /// The start town itself is a candidate.
    pub fn promote_castle(&mut self) -> Option<TileId> {
        let start = self.map.start_tile()?;
        let towns: Vec<TileId> = {
            let mut ts = TileSearch::new(&self.map);
            self.map
                .tiles_with(Decoration::TOWN)
                .into_iter()
                .filter(|&t| ts.astar(start, t))
                .collect()
        };
        if towns.is_empty() {
            warn!("no town reachable from tile {start}, no castle this time");
            return None;
        }
        let castle = towns[self.rng.random_range(0..towns.len())];
        self.map[castle].set_decoration(Decoration::CASTLE);
        info!("town {castle} promoted to castle ({} candidates)", towns.len());
        Some(castle)
    }

    // -------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------

    /// Every tile reachable from `start` over traversable tiles, in
    /// breadth-first order.
    pub fn reachable_tiles(&self, start: TileId) -> Vec<TileId> {
        TileSearch::new(&self.map).bfs(start).to_vec()
    }

    /// The candidate with the smallest Manhattan distance to `target`. Ties
    /// go to the earliest candidate.
    pub fn closest_to(&self, target: TileId, candidates: &[TileId]) -> Option<TileId> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| self.map.manhattan(target, c))
    }

    /// Where a click on `clicked` should lead: the tile itself when it can be
    /// walked on, otherwise the closest traversable tile on the nearest ring
    /// around it within `target_search_radius`.
    pub fn best_reachable_target(&self, clicked: TileId) -> Option<TileId> {
        let tile = self.map.tile(clicked)?;
        if tile.can_traverse() {
            return Some(clicked);
        }
        (1..=self.config.target_search_radius).find_map(|r| {
            let ring: Vec<TileId> = self
                .map
                .ring(clicked, r)
                .into_iter()
                .filter(|&id| self.map[id].can_traverse())
                .collect();
            self.closest_to(clicked, &ring)
        })
    }

    /// Plan a move from the current tile towards `clicked`.
    ///
    /// Searches with A* towards [`best_reachable_target`]. When that fails
    /// the goal becomes the tile reachable from the player that is closest
    /// to the click. The path is cut at its first impassable tile and
    /// stored for [`walk_last_path`](Self::walk_last_path).
    ///
    /// [`best_reachable_target`]: Self::best_reachable_target
    pub fn request_move(&mut self, clicked: TileId) -> Option<&[TileId]> {
        self.last_path.clear();
        let Some(target) = self.best_reachable_target(clicked) else {
            warn!("no walkable tile near {clicked}");
            return None;
        };

        let from = self.current;
        let mut ts = TileSearch::new(&self.map);
        let path = if ts.astar(from, target) {
            ts.path().to_vec()
        } else {
            debug!("no path {from} -> {target}, falling back to the closest reachable tile");
            let reachable = ts.bfs(from).to_vec();
            match self.closest_to(clicked, &reachable) {
                Some(best) if ts.astar(from, best) => ts.path().to_vec(),
                _ => {
                    warn!("no path from {from} towards {clicked}");
                    return None;
                }
            }
        };

        let walkable: Vec<TileId> = path
            .into_iter()
            .take_while(|&id| self.map[id].can_traverse())
            .collect();
        if walkable.is_empty() {
            warn!("path from {from} has no walkable prefix");
            return None;
        }
        self.last_path = walkable;
        Some(&self.last_path)
    }

    /// Move the player along the stored path, revealing the fog around every
    /// tile stepped on. Returns the summed weight of the tiles entered.
    ///
    /// The stored path is consumed.
    pub fn walk_last_path(&mut self) -> i32 {
        let path = std::mem::take(&mut self.last_path);
        let mut total = 0;
        for (i, &id) in path.iter().enumerate() {
            if !self.map[id].can_traverse() {
                continue;
            }
            if i > 0 {
                total += self.map[id].weight();
            }
            self.current = id;
            self.map.reveal(id, self.config.reveal_radius);
        }
        if !path.is_empty() {
            info!("walked {} tiles to {}, cost {total}", path.len(), self.current);
        }
        total
    }
}

/// Generate islands until one has a start tile, up to `max_attempts` times.
fn generate<R: Rng>(config: &StageConfig, rng: &mut R) -> Result<(Map, TileId), StageError> {
    for attempt in 1..=config.max_attempts {
        let mut map = Map::new(config.rows, config.cols)?;
        if let Err(e) = map.create_island(&config.island, rng) {
            debug!("generation attempt {attempt} failed: {e}");
            continue;
        }
        let Some(start) = map.start_tile() else {
            continue;
        };
        info!(
            "generated {}x{} island after {attempt} attempt(s), start tile {start}",
            config.rows, config.cols
        );
        return Ok((map, start));
    }
    Err(StageError::GenerationExhausted {
        attempts: config.max_attempts,
    })
}
