//! Request and response bodies of the HTTP API.

use serde::{Serialize, Deserialize};

use crate::config::maze::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::grid::{Coordinate, Grid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub grid: Grid,
    pub start: Coordinate,
    pub end: Coordinate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub path: Vec<Coordinate>,
    pub visited: Vec<Coordinate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMazeRequest {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Fixed seed for a reproducible maze. Omitted means a fresh random maze.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMazeResponse {
    pub grid: Grid,
    pub start: Coordinate,
    pub end: Coordinate,
}
