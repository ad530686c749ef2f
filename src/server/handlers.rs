//! HTTP handlers. Each request builds its own grid, solver or generator;
//! nothing is shared between requests.

use actix_web::{web, HttpResponse};
use log::info;

use crate::grid::{Coordinate, GridMap, TerrainType};
use crate::maze::{MazeGenerator, CARVE_START};
use crate::pathfinding::AStarSolver;
use crate::server::error::ApiError;
use crate::server::messages::{GenerateMazeRequest, GenerateMazeResponse, SolveRequest, SolveResponse};

/// `POST /solve`: run A* over the submitted grid.
pub async fn solve(body: web::Json<SolveRequest>) -> Result<HttpResponse, ApiError> {
    let SolveRequest { grid, start, end } = body.into_inner();

    let map = GridMap::new(grid)?;
    map.check_in_bounds(start)?;
    map.check_in_bounds(end)?;

    let outcome = AStarSolver::new(&map).solve(start, end);
    if outcome.is_found() {
        info!(
            "[Solve] {}x{} grid, {} -> {}: {} steps, cost {}, {} cells expanded",
            map.rows(),
            map.cols(),
            start,
            end,
            outcome.path.len() - 1,
            outcome.path_cost(&map),
            outcome.visited.len()
        );
    } else {
        info!(
            "[Solve] {}x{} grid, {} -> {}: unreachable, {} cells expanded",
            map.rows(),
            map.cols(),
            start,
            end,
            outcome.visited.len()
        );
    }

    Ok(HttpResponse::Ok().json(SolveResponse {
        path: outcome.path,
        visited: outcome.visited,
    }))
}

/// `POST /generate_maze`: carve a new maze and open its conventional endpoints.
///
/// The generator only accepts odd sizes, so both endpoints are carved rooms
/// already; forcing them open keeps the response contract explicit.
pub async fn generate_maze(body: web::Json<GenerateMazeRequest>) -> Result<HttpResponse, ApiError> {
    let GenerateMazeRequest { rows, cols, seed } = body.into_inner();

    let mut grid = match seed {
        Some(seed) => MazeGenerator::seeded(seed).generate_dfs(rows, cols)?,
        None => MazeGenerator::from_os_rng().generate_dfs(rows, cols)?,
    };

    let start = CARVE_START;
    let end = Coordinate::new(rows as i32 - 2, cols as i32 - 2);
    for c in [start, end] {
        grid[c.row as usize][c.col as usize] = TerrainType::Empty;
    }

    info!("[Maze] generated {}x{} maze (seed: {:?})", rows, cols, seed);
    Ok(HttpResponse::Ok().json(GenerateMazeResponse { grid, start, end }))
}
