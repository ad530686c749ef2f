//! HTTP routing configuration.
//!
//! Defines the pathfinding and maze generation endpoints.

use actix_web::web;

use crate::config::server::JSON_PAYLOAD_LIMIT;
use crate::server::error::json_error_handler;
use crate::server::handlers::{generate_maze, solve};

/// Configure the application's HTTP routes.
///
/// JSON bodies are size-limited and extraction errors use the API's error format.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_PAYLOAD_LIMIT)
            .error_handler(json_error_handler),
    )
    .service(web::resource("/solve").route(web::post().to(solve)))
    .service(web::resource("/generate_maze").route(web::post().to(generate_maze)));
}
