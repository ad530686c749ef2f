//! Read-only view over a terrain grid.
//!
//! Answers the questions the pathfinder asks: bounds, walkability,
//! entry cost and 4-directional neighbors.

use super::error::GridError;
use super::types::{Coordinate, Direction, Grid, TerrainType};

#[derive(Debug, Clone)]
pub struct GridMap {
    cells: Grid,
    rows: usize,
    cols: usize,
}

impl GridMap {
    /// Build a map from raw rows, rejecting empty or non-rectangular input.
    pub fn new(cells: Grid) -> Result<Self, GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = cells
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged { row, expected: cols, found });
        }

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_within_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, r: i32, c: i32) -> bool {
        self.is_within_bounds(r, c) && self.cells[r as usize][c as usize] != TerrainType::Wall
    }

    /// Cost of entering (r, c).
    ///
    /// # Panics
    /// If (r, c) lies outside the grid. Callers only ask about cells returned
    /// by [`GridMap::neighbors`] or validated with [`GridMap::check_in_bounds`].
    pub fn cost(&self, r: i32, c: i32) -> u32 {
        assert!(
            self.is_within_bounds(r, c),
            "cost queried at ({r}, {c}) outside the {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[r as usize][c as usize].movement_cost()
    }

    /// Walkable cells adjacent to `coord`, always in up, down, left, right order.
    pub fn neighbors(&self, coord: Coordinate) -> Vec<Coordinate> {
        Direction::ALL
            .iter()
            .map(|dir| {
                let (dr, dc) = dir.delta();
                coord.offset(dr, dc)
            })
            .filter(|n| self.is_walkable(n.row, n.col))
            .collect()
    }

    pub fn check_in_bounds(&self, coord: Coordinate) -> Result<(), GridError> {
        if self.is_within_bounds(coord.row, coord.col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coordinate: coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::types::TerrainType::{Empty as E, Wall as W, Water as A};

    fn sample() -> GridMap {
        GridMap::new(vec![
            vec![E, W, E],
            vec![E, A, E],
            vec![W, E, E],
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(GridMap::new(vec![]).unwrap_err(), GridError::Empty);
        assert_eq!(GridMap::new(vec![vec![]]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn test_rejects_ragged_grid() {
        let err = GridMap::new(vec![vec![E, E], vec![E, E], vec![E]]).unwrap_err();
        assert_eq!(err, GridError::Ragged { row: 2, expected: 2, found: 1 });
    }

    #[test]
    fn test_bounds() {
        let map = sample();
        assert_eq!((map.rows(), map.cols()), (3, 3));
        assert!(map.is_within_bounds(0, 0));
        assert!(map.is_within_bounds(2, 2));
        assert!(!map.is_within_bounds(-1, 0));
        assert!(!map.is_within_bounds(0, 3));
        assert!(!map.is_within_bounds(3, 0));
    }

    #[test]
    fn test_walls_are_not_walkable() {
        let map = sample();
        assert!(!map.is_walkable(0, 1));
        assert!(!map.is_walkable(2, 0));
        assert!(map.is_walkable(1, 1));
        assert!(!map.is_walkable(5, 5));
    }

    #[test]
    fn test_cost_by_terrain() {
        let map = sample();
        assert_eq!(map.cost(0, 0), 1);
        assert_eq!(map.cost(1, 1), 5);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_cost_out_of_bounds_panics() {
        sample().cost(3, 0);
    }

    #[test]
    fn test_neighbors_order_and_filtering() {
        let map = sample();
        assert_eq!(
            map.neighbors(Coordinate::new(1, 1)),
            vec![Coordinate::new(2, 1), Coordinate::new(1, 0), Coordinate::new(1, 2)]
        );
        assert_eq!(map.neighbors(Coordinate::new(0, 0)), vec![Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_check_in_bounds() {
        let map = sample();
        assert!(map.check_in_bounds(Coordinate::new(2, 2)).is_ok());
        assert_eq!(
            map.check_in_bounds(Coordinate::new(0, -1)).unwrap_err(),
            GridError::OutOfBounds { coordinate: Coordinate::new(0, -1), rows: 3, cols: 3 }
        );
    }
}
