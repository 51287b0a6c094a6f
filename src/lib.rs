//! Row-streaming maze generation with Eller's algorithm.
//!
//! Mazes are produced one row at a time from a seeded keystream PRNG, so a
//! given seed and configuration always reproduce the same maze, finite or
//! endless. Only the row being built is kept in memory.

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod rng;

pub use error::MazeError;
pub use generators::{EllerConfig, EllerMaze, Step};
pub use maze::{Cell, Row};
pub use render::row_to_ascii;
pub use rng::Arc4Rng;
