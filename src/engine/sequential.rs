//! Single-threaded engine. Cells outside the grid count as dead.

// External libraries
use rand::Rng;
use tracing::{instrument, trace};

// LIFE
use super::{Engine, EngineState};
use crate::boundary::Open;
use crate::error::Result;
use crate::game_of_life;
use crate::grid::{Grid, Position2D, Size2D};

#[derive(Debug, Clone)]
pub struct SequentialEngine {
    state: EngineState,
}

impl SequentialEngine {
    /// Random initial grid drawn from the thread-local generator.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_rng(rows, columns, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Self> {
        Ok(Self {
            state: EngineState::random(rows, columns, rng)?,
        })
    }

    pub fn from_grid(initial: &Grid) -> Self {
        Self {
            state: EngineState::new(initial.clone()),
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        Ok(Self {
            state: EngineState::new(Grid::from_rows(rows)?),
        })
    }

    pub fn initial_generation(&self) -> &Grid {
        self.state.initial()
    }
}

impl Engine for SequentialEngine {
    fn current_generation(&self) -> Grid {
        self.state.current().clone()
    }

    fn generation(&self) -> u64 {
        self.state.generation()
    }

    fn restart(&mut self) {
        self.state.restart();
    }

    #[instrument(level = "trace", skip_all)]
    fn next_generation(&mut self) {
        let grid = self.state.current();
        let size = *grid.size();
        let mut new_data = Vec::with_capacity(size.total());
        for row in 0..size.rows() {
            for column in 0..size.columns() {
                new_data.push(game_of_life::evolve_cell::<Open>(grid, Position2D(row, column)));
            }
        }

        let next = Grid::from_raw(size, new_data);
        trace!(
            generation = self.state.generation() + 1,
            alive = next.alive_count(),
            "sequential sweep done"
        );
        self.state.swap(next);
    }

    fn size(&self) -> Size2D {
        self.state.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{blinker, block, glider, is_blinker};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn construction_rejects_bad_dimensions() {
        assert!(SequentialEngine::new(0, 5).unwrap_err().is_invalid_argument());
        assert!(SequentialEngine::new(5, 0).unwrap_err().is_invalid_argument());
        assert!(SequentialEngine::new(usize::MAX / 2 + 1, 2)
            .unwrap_err()
            .is_invalid_argument());
        assert!(SequentialEngine::from_rows(vec![])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn fresh_engine_has_requested_size() {
        let engine = SequentialEngine::new(4, 9).unwrap();
        assert_eq!(engine.generation(), 0);
        let grid = engine.current_generation();
        assert_eq!((grid.rows(), grid.columns()), (4, 9));
        assert_eq!(&grid, engine.initial_generation());
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let a = SequentialEngine::with_rng(8, 8, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = SequentialEngine::with_rng(8, 8, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.current_generation(), b.current_generation());
    }

    #[test]
    fn lonely_cell_dies() {
        let mut engine = SequentialEngine::from_rows(vec![
            vec![false, false, false],
            vec![false, true, false],
            vec![false, false, false],
        ])
        .unwrap();
        engine.next_generation();
        assert_eq!(engine.current_generation().alive_count(), 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn blinker_oscillates() {
        let mut engine = SequentialEngine::from_grid(&blinker());
        engine.next_generation();
        assert!(is_blinker(&engine.current_generation(), true));
        engine.next_generation();
        assert!(is_blinker(&engine.current_generation(), false));
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn block_is_still() {
        let size = Size2D::new(4, 4).unwrap();
        let initial = block(size, Position2D(1, 1));
        let mut engine = SequentialEngine::from_grid(&initial);
        engine.advance(5);
        assert_eq!(engine.current_generation(), initial);
    }

    #[test]
    fn block_in_a_corner_survives_the_open_edge() {
        let size = Size2D::new(3, 3).unwrap();
        let initial = block(size, Position2D(0, 0));
        let mut engine = SequentialEngine::from_grid(&initial);
        engine.next_generation();
        assert_eq!(engine.current_generation(), initial);
    }

    #[test]
    fn glider_translates_diagonally() {
        let size = Size2D::new(10, 10).unwrap();
        let mut engine = SequentialEngine::from_grid(&glider(size, Position2D(1, 1)));
        engine.advance(4);
        assert_eq!(engine.current_generation(), glider(size, Position2D(2, 2)));
    }

    #[test]
    fn glider_stops_at_the_open_edge() {
        let size = Size2D::new(6, 6).unwrap();
        let mut engine = SequentialEngine::from_grid(&glider(size, Position2D(0, 0)));
        engine.advance(40);
        // The glider runs into the corner and settles as a block
        assert_eq!(engine.current_generation(), block(size, Position2D(4, 4)));
    }

    #[test]
    fn snapshot_is_detached() {
        let engine = SequentialEngine::from_grid(&blinker());
        let mut snapshot = engine.current_generation();
        snapshot.set(Position2D(0, 0), true);
        assert!(is_blinker(&engine.current_generation(), false));
    }

    #[test]
    fn restart_restores_initial_grid() {
        let mut engine = SequentialEngine::with_rng(12, 7, &mut StdRng::seed_from_u64(3)).unwrap();
        let initial = engine.current_generation();
        engine.advance(9);
        engine.restart();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.current_generation(), initial);
    }
}
