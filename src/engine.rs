// External libraries
use rand::Rng;
use tracing::debug;

// LIFE
pub mod parallel;
pub mod sequential;
pub use parallel::ParallelEngine;
pub use sequential::SequentialEngine;

use crate::error::Result;
use crate::grid::{Grid, Size2D};

/// Engine

/// Contract shared by every Game of Life engine.
///
/// Engines are usable indefinitely once constructed: none of these operations can fail.
/// They are not internally synchronized, so callers sharing an engine must serialize access.
pub trait Engine {
    /// Copy of the current generation. Mutating it never affects the engine.
    fn current_generation(&self) -> Grid;

    /// Number of advances since construction or the last restart.
    fn generation(&self) -> u64;

    /// Goes back to the grid captured at construction and resets the generation to 0.
    fn restart(&mut self);

    /// Advances by exactly one generation.
    fn next_generation(&mut self);

    fn size(&self) -> Size2D;

    fn advance(&mut self, nb_gens: u64) {
        for _ in 0..nb_gens {
            self.next_generation();
        }
    }
}

/// EngineState

/// The two grids and the counter owned by an engine.
#[derive(Debug, Clone)]
pub struct EngineState {
    initial: Grid,
    current: Grid,
    generation: u64,
}

impl EngineState {
    pub fn new(initial: Grid) -> Self {
        debug!(
            rows = initial.rows(),
            columns = initial.columns(),
            alive = initial.alive_count(),
            "engine state created"
        );
        Self {
            current: initial.clone(),
            initial,
            generation: 0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Self> {
        let size = Size2D::new(rows, columns)?;
        Ok(Self::new(Grid::random(size, rng)))
    }

    #[inline]
    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn size(&self) -> Size2D {
        *self.current.size()
    }

    /// Installs a fully computed generation and bumps the counter.
    pub(crate) fn swap(&mut self, next: Grid) {
        debug_assert_eq!(next.size(), self.current.size());
        self.current = next;
        self.generation += 1;
    }

    pub fn restart(&mut self) {
        debug!(from_generation = self.generation, "restarting");
        self.current.clone_from(&self.initial);
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position2D;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn swap_and_restart() {
        let mut initial = Grid::new(Size2D::new(2, 3).unwrap());
        initial.set(Position2D(0, 1), true);
        let mut state = EngineState::new(initial.clone());
        assert_eq!(state.generation(), 0);

        state.swap(Grid::new(*initial.size()));
        state.swap(Grid::new(*initial.size()));
        assert_eq!(state.generation(), 2);
        assert_eq!(state.current().alive_count(), 0);
        assert_eq!(state.initial(), &initial);

        state.restart();
        assert_eq!(state.generation(), 0);
        assert_eq!(state.current(), &initial);
    }

    #[test]
    fn random_state_validates_dimensions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(EngineState::random(0, 5, &mut rng)
            .unwrap_err()
            .is_invalid_argument());
        let state = EngineState::random(3, 7, &mut rng).unwrap();
        assert_eq!(state.size(), Size2D::new(3, 7).unwrap());
        assert_eq!(state.current(), state.initial());
    }
}
