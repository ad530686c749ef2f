//! Maze generation.

pub mod generator;

pub use generator::{MazeError, MazeGenerator, CARVE_START};
