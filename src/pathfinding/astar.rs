//! A* search over a [`GridMap`].
//!
//! The frontier is a binary min-heap keyed on `(f, sequence)`. The sequence is a
//! monotonic insertion counter, so cells with equal `f` come out in the order they
//! were discovered and two runs over the same input expand cells identically.
//! There is no decrease-key: an improved cell gets a fresh entry and the
//! outdated one is skipped when it surfaces, so each cell is expanded once.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use log::debug;

use crate::grid::{Coordinate, GridMap};

/// Result of a search: the path (empty if the end is unreachable) and every
/// cell in the order it was expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub path: Vec<Coordinate>,
    pub visited: Vec<Coordinate>,
}

impl SolveOutcome {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Sum of entry costs along the path. The start cell is not paid for.
    pub fn path_cost(&self, map: &GridMap) -> u32 {
        self.path
            .iter()
            .skip(1)
            .map(|c| map.cost(c.row, c.col))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeStatus {
    Open,
    Closed,
}

/// Everything known about a discovered cell.
#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    best_cost: u32,
    predecessor: Option<Coordinate>,
    status: NodeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    sequence: u64,
    coord: Coordinate,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct AStarSolver<'a> {
    map: &'a GridMap,
}

impl<'a> AStarSolver<'a> {
    pub fn new(map: &'a GridMap) -> Self {
        Self { map }
    }

    fn heuristic(a: Coordinate, b: Coordinate) -> u32 {
        a.manhattan(&b)
    }

    /// Find a cheapest path from `start` to `end`.
    ///
    /// Both coordinates must lie inside the map. An unreachable end is not an
    /// error: the outcome carries an empty path and everything that was expanded.
    pub fn solve(&self, start: Coordinate, end: Coordinate) -> SolveOutcome {
        let mut records: HashMap<Coordinate, NodeRecord> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
        let mut visited: Vec<Coordinate> = Vec::new();
        let mut sequence: u64 = 0;

        records.insert(start, NodeRecord {
            best_cost: 0,
            predecessor: None,
            status: NodeStatus::Open,
        });
        frontier.push(Reverse(FrontierEntry {
            f: Self::heuristic(start, end),
            sequence,
            coord: start,
        }));

        while let Some(Reverse(entry)) = frontier.pop() {
            let current = entry.coord;
            let current_cost = match records.get_mut(&current) {
                Some(record) if record.status == NodeStatus::Open => {
                    record.status = NodeStatus::Closed;
                    record.best_cost
                }
                _ => continue,
            };
            visited.push(current);

            if current == end {
                let path = Self::reconstruct_path(&records, end);
                debug!(
                    "[Solve] reached {} after expanding {} cells, {} steps",
                    end,
                    visited.len(),
                    path.len() - 1
                );
                return SolveOutcome { path, visited };
            }

            for neighbor in self.map.neighbors(current) {
                let tentative = current_cost + self.map.cost(neighbor.row, neighbor.col);
                match records.get_mut(&neighbor) {
                    Some(record) if record.status == NodeStatus::Closed => continue,
                    Some(record) if tentative >= record.best_cost => continue,
                    Some(record) => {
                        record.best_cost = tentative;
                        record.predecessor = Some(current);
                    }
                    None => {
                        records.insert(neighbor, NodeRecord {
                            best_cost: tentative,
                            predecessor: Some(current),
                            status: NodeStatus::Open,
                        });
                    }
                }
                sequence += 1;
                frontier.push(Reverse(FrontierEntry {
                    f: tentative + Self::heuristic(neighbor, end),
                    sequence,
                    coord: neighbor,
                }));
            }
        }

        debug!("[Solve] {} unreachable, expanded {} cells", end, visited.len());
        SolveOutcome { path: Vec::new(), visited }
    }

    fn reconstruct_path(records: &HashMap<Coordinate, NodeRecord>, end: Coordinate) -> Vec<Coordinate> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(prev) = records.get(&current).and_then(|r| r.predecessor) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}
