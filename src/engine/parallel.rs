//! Engine that evaluates rows concurrently on a rayon pool. Neighbor lookup wraps around the
//! edges of the grid, which makes it diverge from [`SequentialEngine`](super::SequentialEngine)
//! on border cells.

// Standard library
use std::fmt;

// External libraries
use rand::Rng;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, instrument, trace};

// LIFE
use super::{Engine, EngineState};
use crate::boundary::Toroidal;
use crate::error::{LifeError, Result};
use crate::game_of_life;
use crate::grid::{Grid, Size2D};

pub struct ParallelEngine {
    state: EngineState,
    // `None` runs on rayon's global pool
    pool: Option<ThreadPool>,
}

impl ParallelEngine {
    /// Random initial grid drawn from the thread-local generator.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Self::with_rng(rows, columns, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Result<Self> {
        Ok(Self {
            state: EngineState::random(rows, columns, rng)?,
            pool: None,
        })
    }

    pub fn from_grid(initial: &Grid) -> Self {
        Self {
            state: EngineState::new(initial.clone()),
            pool: None,
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        Ok(Self {
            state: EngineState::new(Grid::from_rows(rows)?),
            pool: None,
        })
    }

    /// Runs sweeps on a dedicated pool of `nb_threads` workers instead of the global one.
    ///
    /// Besides `InvalidArgument` for a zero worker count, this is the one constructor that can
    /// fail for another reason: [`LifeError::ThreadPool`] when rayon cannot spawn the pool.
    pub fn with_threads(mut self, nb_threads: usize) -> Result<Self> {
        if nb_threads == 0 {
            return Err(LifeError::invalid("worker count must be positive"));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(nb_threads)
            .thread_name(|idx| format!("life-worker-{}", idx))
            .build()?;
        debug!(nb_threads, "dedicated worker pool built");
        self.pool = Some(pool);
        Ok(self)
    }

    pub fn initial_generation(&self) -> &Grid {
        self.state.initial()
    }

    pub fn nb_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Engine for ParallelEngine {
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
        let mut new_data = vec![false; size.total()];

        // Each task owns one row of the new buffer and only reads the old grid
        let mut sweep = || {
            new_data
                .par_chunks_mut(size.columns())
                .enumerate()
                .for_each(|(row, out)| game_of_life::evolve_row::<Toroidal>(grid, row, out));
        };
        match &self.pool {
            Some(pool) => pool.install(sweep),
            None => sweep(),
        }

        let next = Grid::from_raw(size, new_data);
        trace!(
            generation = self.state.generation() + 1,
            alive = next.alive_count(),
            "parallel sweep joined"
        );
        self.state.swap(next);
    }

    fn size(&self) -> Size2D {
        self.state.size()
    }
}

impl fmt::Debug for ParallelEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelEngine")
            .field("state", &self.state)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}
