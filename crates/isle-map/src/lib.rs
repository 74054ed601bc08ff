//! Island tile maps for *isle*: procedural generation, fog of war and
//! tile searches.
//!
//! A [`Map`] owns a row-major grid of [`Tile`]s wired into an 8-direction
//! adjacency graph. [`Map::create_island`] carves and decorates it,
//! [`TileSearch`] runs traversals and shortest-path queries over it, and
//! [`Stage`] ties both together into a playable session (regeneration,
//! move requests, fog reveal) without any rendering.

pub mod config;
pub mod error;
pub mod fog;
pub mod island;
pub mod map;
pub mod search;
pub mod stage;
pub mod tile;

pub use config::{IslandParams, StageConfig};
pub use error::{ConfigError, IslandError, MapError, StageError};
pub use island::shuffle;
pub use map::Map;
pub use search::TileSearch;
pub use stage::Stage;
pub use tile::{Decoration, Tile, TileId};
