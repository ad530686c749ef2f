/// HTTP server configuration constants.
///
/// This module defines where the backend listens and how much request data it accepts.
pub const HOST: &str = "127.0.0.1";

/// Port the HTTP server binds to.
pub const PORT: u16 = 8080;

/// Maximum accepted JSON body size in bytes.
/// A 500x500 grid of single-digit cells fits comfortably.
pub const JSON_PAYLOAD_LIMIT: usize = 2 * 1024 * 1024;
