use serde::{Serialize, Deserialize};

use crate::config::terrain::{DEFAULT_MOVEMENT_COST, WATER_MOVEMENT_COST};

/// A cell position on the grid. Travels over the wire as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: &Coordinate) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn offset(&self, dr: i32, dc: i32) -> Coordinate {
        Coordinate::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four moves allowed on the grid, in the order neighbors are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) step for one move in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Kind of terrain stored in a cell.
///
/// The integer codes are part of the wire format: 0 = Empty, 1 = Wall, 2 = Water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TerrainType {
    Empty,
    Wall,
    Water,
}

impl TerrainType {
    /// Cost of stepping into a cell of this terrain.
    /// Walls are never entered; they report the default cost.
    pub fn movement_cost(self) -> u32 {
        match self {
            TerrainType::Water => WATER_MOVEMENT_COST,
            TerrainType::Empty | TerrainType::Wall => DEFAULT_MOVEMENT_COST,
        }
    }
}

impl TryFrom<u8> for TerrainType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TerrainType::Empty),
            1 => Ok(TerrainType::Wall),
            2 => Ok(TerrainType::Water),
            other => Err(format!("unknown terrain code {other} (expected 0, 1 or 2)")),
        }
    }
}

impl From<TerrainType> for u8 {
    fn from(terrain: TerrainType) -> Self {
        match terrain {
            TerrainType::Empty => 0,
            TerrainType::Wall => 1,
            TerrainType::Water => 2,
        }
    }
}

/// Raw row-major terrain, as received from clients or produced by the maze generator.
pub type Grid = Vec<Vec<TerrainType>>;
