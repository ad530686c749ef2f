//! Maze generation configuration constants.
//!
//! This module defines the default and allowed dimensions of generated mazes.
//! Both dimensions must also be odd; the generator enforces that.

/// Number of rows used when the request omits `rows`.
pub const DEFAULT_ROWS: usize = 21;

/// Number of columns used when the request omits `cols`.
pub const DEFAULT_COLS: usize = 21;

/// Smallest accepted dimension. The carving start (1, 1) and the forced
/// end (rows - 2, cols - 2) both need an interior cell.
pub const MIN_DIMENSION: usize = 3;

/// Largest accepted dimension.
pub const MAX_DIMENSION: usize = 201;
