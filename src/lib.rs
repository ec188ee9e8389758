//! Grid-based Snake: a self-contained game engine plus a terminal front end.
//!
//! The engine (`engine`, `grid`, `snake`, `food`) performs no I/O and is
//! driven one `tick` at a time by an external clock. The remaining modules
//! render it with ratatui and feed it crossterm key events.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
