/// Movement cost constants.
///
/// Cost paid when entering a cell. Both must stay >= 1 so the Manhattan
/// heuristic never overestimates.
pub const DEFAULT_MOVEMENT_COST: u32 = 1;

/// Cost of entering a water cell.
pub const WATER_MOVEMENT_COST: u32 = 5;
