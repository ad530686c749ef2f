//! Shortest paths over weighted terrain.

pub mod astar;

pub use astar::AStarSolver;
