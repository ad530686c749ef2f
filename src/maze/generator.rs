//! Maze carving by randomized depth-first backtracking.
//!
//! Rooms sit on odd (row, col) indices. The walk starts at (1, 1), knocks down
//! the wall between the current room and a random unvisited room two cells
//! away, and backtracks through an explicit stack when it runs out of choices.
//! The carved cells always form a tree; the outer border is never touched.
//! Both dimensions must be odd so that (rows - 2, cols - 2) is a room.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::config::maze::{MAX_DIMENSION, MIN_DIMENSION};
use crate::grid::{Coordinate, Direction, Grid, TerrainType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions {rows}x{cols} are invalid: each side must be between {min} and {max}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },

    #[error("maze dimensions {rows}x{cols} are invalid: both sides must be odd")]
    EvenDimensions {
        rows: usize,
        cols: usize,
    },
}

/// Cell where carving starts.
pub const CARVE_START: Coordinate = Coordinate::new(1, 1);

pub struct MazeGenerator<R: Rng> {
    rng: R,
}

impl MazeGenerator<StdRng> {
    /// Reproducible generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `rows` x `cols` maze. Cells not carved stay [`TerrainType::Wall`].
    pub fn generate_dfs(&mut self, rows: usize, cols: usize) -> Result<Grid, MazeError> {
        let valid = |n: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&n);
        if !valid(rows) || !valid(cols) {
            return Err(MazeError::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(MazeError::EvenDimensions { rows, cols });
        }

        let mut grid: Grid = vec![vec![TerrainType::Wall; cols]; rows];
        let (max_row, max_col) = (rows as i32 - 1, cols as i32 - 1);
        let is_interior = |c: Coordinate| c.row > 0 && c.row < max_row && c.col > 0 && c.col < max_col;

        carve(&mut grid, CARVE_START);
        let mut stack = vec![CARVE_START];
        let mut carved_rooms = 1usize;

        while let Some(&current) = stack.last() {
            let candidates: Vec<(Coordinate, Coordinate)> = Direction::ALL
                .iter()
                .filter_map(|dir| {
                    let (dr, dc) = dir.delta();
                    let room = current.offset(dr * 2, dc * 2);
                    if is_interior(room) && cell(&grid, room) == TerrainType::Wall {
                        Some((current.offset(dr, dc), room))
                    } else {
                        None
                    }
                })
                .collect();

            match candidates.choose(&mut self.rng) {
                Some(&(between, room)) => {
                    carve(&mut grid, between);
                    carve(&mut grid, room);
                    stack.push(room);
                    carved_rooms += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!("[Maze] carved {} rooms in a {}x{} grid", carved_rooms, rows, cols);
        Ok(grid)
    }
}

fn cell(grid: &Grid, c: Coordinate) -> TerrainType {
    grid[c.row as usize][c.col as usize]
}

fn carve(grid: &mut Grid, c: Coordinate) {
    grid[c.row as usize][c.col as usize] = TerrainType::Empty;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};
    use crate::grid::GridMap;

    fn open_cells(grid: &Grid) -> Vec<Coordinate> {
        grid.iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter().enumerate().filter_map(move |(c, cell)| {
                    (*cell == TerrainType::Empty).then(|| Coordinate::new(r as i32, c as i32))
                })
            })
            .collect()
    }

    fn assert_border_is_wall(grid: &Grid) {
        let rows = grid.len();
        let cols = grid[0].len();
        for r in 0..rows {
            for c in 0..cols {
                if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                    assert_eq!(grid[r][c], TerrainType::Wall, "border cell ({r}, {c}) was carved");
                }
            }
        }
    }

    /// Open cells reachable from (1, 1), and the number of open-open adjacencies.
    fn connectivity(grid: &Grid) -> (HashSet<Coordinate>, usize) {
        let map = GridMap::new(grid.clone()).unwrap();
        let mut seen = HashSet::from([CARVE_START]);
        let mut queue = VecDeque::from([CARVE_START]);
        let mut edges = 0;
        while let Some(node) = queue.pop_front() {
            for n in map.neighbors(node) {
                if n > node {
                    edges += 1;
                }
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        (seen, edges)
    }

    fn assert_perfect_maze(grid: &Grid) {
        let open = open_cells(grid);
        let (reachable, edges) = connectivity(grid);
        assert_eq!(reachable.len(), open.len(), "some open cells are disconnected");
        assert_eq!(edges, open.len() - 1, "open cells contain a cycle");
    }

    #[test]
    fn test_default_size_is_perfect_maze() {
        let grid = MazeGenerator::seeded(7).generate_dfs(21, 21).unwrap();
        assert_eq!(grid.len(), 21);
        assert!(grid.iter().all(|row| row.len() == 21));
        assert_border_is_wall(&grid);
        assert_perfect_maze(&grid);
    }

    #[test]
    fn test_odd_dimensions_carve_every_room() {
        for seed in 0..5 {
            let grid = MazeGenerator::seeded(seed).generate_dfs(11, 15).unwrap();
            for r in (1..11).step_by(2) {
                for c in (1..15).step_by(2) {
                    assert_eq!(grid[r][c], TerrainType::Empty);
                }
            }
            // Even-even cells are pillars and never carved.
            for r in (2..10).step_by(2) {
                for c in (2..14).step_by(2) {
                    assert_eq!(grid[r][c], TerrainType::Wall);
                }
            }
            assert_eq!(grid[9][13], TerrainType::Empty);
            assert_perfect_maze(&grid);
        }
    }

    #[test]
    fn test_rejects_even_dimensions() {
        let mut generator = MazeGenerator::seeded(1);
        for (rows, cols) in [(10, 10), (4, 5), (20, 21), (13, 6)] {
            assert_eq!(
                generator.generate_dfs(rows, cols).unwrap_err(),
                MazeError::EvenDimensions { rows, cols }
            );
        }
    }

    #[test]
    fn test_far_corner_is_always_carved() {
        for (rows, cols) in [(3, 5), (5, 3), (9, 21), (21, 9)] {
            let grid = MazeGenerator::seeded(1).generate_dfs(rows, cols).unwrap();
            assert_eq!(grid[rows - 2][cols - 2], TerrainType::Empty);
            assert_perfect_maze(&grid);
        }
    }

    #[test]
    fn test_smallest_maze() {
        let grid = MazeGenerator::seeded(0).generate_dfs(3, 3).unwrap();
        assert_eq!(open_cells(&grid), vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeGenerator::seeded(42).generate_dfs(25, 31).unwrap();
        let b = MazeGenerator::seeded(42).generate_dfs(25, 31).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = MazeGenerator::seeded(1).generate_dfs(31, 31).unwrap();
        let b = MazeGenerator::seeded(2).generate_dfs(31, 31).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut generator = MazeGenerator::seeded(0);
        for (rows, cols) in [(2, 21), (21, 0), (1, 1), (21, MAX_DIMENSION + 1)] {
            assert_eq!(
                generator.generate_dfs(rows, cols).unwrap_err(),
                MazeError::InvalidDimensions { rows, cols, min: MIN_DIMENSION, max: MAX_DIMENSION }
            );
        }
    }

    #[test]
    fn test_os_seeded_generator() {
        let grid = MazeGenerator::from_os_rng().generate_dfs(9, 9).unwrap();
        assert_border_is_wall(&grid);
        assert_perfect_maze(&grid);
    }
}
