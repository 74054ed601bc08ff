//! Error types.

use thiserror::Error;

/// Failure to allocate a map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map size must be positive, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },
}

/// A generation run that produced an unusable island.
///
/// The map is left half-decorated and must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IslandError {
    #[error("no town tile left to start from")]
    NoTowns,
    #[error("no coast or grass tile left for the castle")]
    NoCastleSite,
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    PercentOutOfRange { name: &'static str, value: f32 },
    #[error("stage size must be positive, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },
    #[error("{name} must not be negative, got {value}")]
    NegativeRadius { name: &'static str, value: i32 },
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Errors raised while setting up or resetting a [`Stage`](crate::Stage).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("no valid island after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}
