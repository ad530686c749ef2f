//! Terrain grid: coordinates, terrain kinds and the read-only map queried by the pathfinder.

pub mod types;
pub mod error;
pub mod map;

pub use types::*;
pub use error::GridError;
pub use map::GridMap;
