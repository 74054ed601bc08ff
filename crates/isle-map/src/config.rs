//! Generation and session parameters.

use crate::error::ConfigError;

/// Parameters of [`Map::create_island`](crate::Map::create_island).
///
/// Every `*_percent` is the fraction of the current candidate pool that a
/// stage converts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IslandParams {
    /// Fraction of the coast removed on each erosion pass.
    pub erode_percent: f32,
    /// Number of erosion passes.
    pub erode_iterations: u32,
    /// Fraction of land carved into lakes before erosion.
    pub lake_percent: f32,
    pub tree_percent: f32,
    pub hill_percent: f32,
    pub mountain_percent: f32,
    pub town_percent: f32,
    pub monster_percent: f32,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self {
            erode_percent: 0.5,
            erode_iterations: 2,
            lake_percent: 0.1,
            tree_percent: 0.1,
            hill_percent: 0.1,
            mountain_percent: 0.1,
            town_percent: 0.1,
            monster_percent: 0.1,
        }
    }
}

impl IslandParams {
    /// Check every fraction lies within `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percents = [
            ("erode_percent", self.erode_percent),
            ("lake_percent", self.lake_percent),
            ("tree_percent", self.tree_percent),
            ("hill_percent", self.hill_percent),
            ("mountain_percent", self.mountain_percent),
            ("town_percent", self.town_percent),
            ("monster_percent", self.monster_percent),
        ];
        for (name, value) in percents {
            // NaN fails the range check too.
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::PercentOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration of a [`Stage`](crate::Stage).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StageConfig {
    pub rows: i32,
    pub cols: i32,
    pub island: IslandParams,
    /// Radius of the square revealed around the player on every step.
    pub reveal_radius: i32,
    /// How many rings around an impassable click are searched for a
    /// walkable target.
    pub target_search_radius: i32,
    /// Generation attempts before [`Stage::reset`](crate::Stage::reset)
    /// gives up.
    pub max_attempts: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            island: IslandParams::default(),
            reveal_radius: 1,
            target_search_radius: 5,
            max_attempts: 100,
        }
    }
}

impl StageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(ConfigError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (name, value) in [
            ("reveal_radius", self.reveal_radius),
            ("target_search_radius", self.target_search_radius),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeRadius { name, value });
            }
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        self.island.validate()
    }
}
