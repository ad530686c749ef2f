//! Main entry point for the backend server.
//!
//! Initializes logging and launches the HTTP server exposing the A* solver
//! and the maze generator.

use actix_web::{App, HttpServer};
use log::info;

use config::server::{HOST, PORT};

pub mod config;
mod grid;
mod maze;
mod pathfinding;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    info!("[Server] listening on http://{}:{}", HOST, PORT);

    HttpServer::new(|| {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .configure(crate::server::router::config)
    })
    .bind((HOST, PORT))?
    .run()
    .await
}
