//! Conway's Game of Life on fixed-size boolean grids.
//!
//! Two engines share the [`Engine`](engine::Engine) contract: [`SequentialEngine`] treats
//! cells outside the grid as dead, while [`ParallelEngine`] spreads rows over a rayon pool
//! and wraps around the edges. The difference in boundary handling is intentional and
//! preserved: both engines agree only as long as nothing interacts with the border.

// LIFE
pub mod boundary;
pub mod config;
pub mod engine;
pub mod error;
pub mod game_of_life;
pub mod grid;
pub mod projector;

pub use engine::{Engine, ParallelEngine, SequentialEngine};
pub use error::{LifeError, Result};
pub use grid::{Grid, Position2D, Size2D};
pub use projector::TextProjector;
