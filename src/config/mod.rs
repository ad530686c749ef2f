/// Main configuration module.
/// 
/// Re-exports submodules for server, maze generation and terrain cost configuration.
pub mod server;
pub mod maze;
pub mod terrain;
