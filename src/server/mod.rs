// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP boundary around the core algorithms:
//! - Routing
//! - Request handlers (input validation, solver and generator invocation)
//! - Request/response bodies
//! - Error responses

pub mod router;
pub mod handlers;
pub mod messages;
pub mod error;
