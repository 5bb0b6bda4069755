// External libraries
use clap::{ArgAction, Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};

// LIFE
use crate::engine::{Engine, ParallelEngine, SequentialEngine};
use crate::error::{LifeError, Result};
use crate::projector::TextProjector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Single-threaded, cells outside the grid are dead
    Sequential,
    /// Row-parallel, the grid wraps around like a torus
    Parallel,
}

/// Runs Conway's Game of Life on a random grid and prints every generation.
#[derive(Parser, Debug, Clone)]
#[command(name = "life", version, about)]
pub struct SimulationConfig {
    /// Number of rows in the grid
    #[arg(short, long, default_value_t = 20, value_name = "NUM")]
    pub rows: usize,

    /// Number of columns in the grid
    #[arg(short, long, default_value_t = 40, value_name = "NUM")]
    pub columns: usize,

    /// Number of generations to print
    #[arg(short, long, default_value_t = 10, value_name = "NUM")]
    pub generations: u64,

    #[arg(short, long, value_enum, default_value_t = EngineKind::Sequential)]
    pub engine: EngineKind,

    /// Worker threads for the parallel engine. Defaults to the number of logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Seed for the initial grid. Unseeded runs draw from system entropy.
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Character printed for alive cells
    #[arg(long, default_value_t = '#')]
    pub alive: char,

    /// Character printed for dead cells
    #[arg(long, default_value_t = '.')]
    pub dead: char,

    /// Color the output with terminal escape sequences
    #[arg(long)]
    pub styled: bool,

    /// Compute generations on a separate thread while printing
    #[arg(long = "async")]
    pub run_async: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LifeError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.generations == 0 {
            return Err(LifeError::invalid("number of generations must be positive"));
        }
        if self.threads == Some(0) {
            return Err(LifeError::invalid("worker count must be positive"));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn build_engine(&self) -> Result<Box<dyn Engine + Send>> {
        self.validate()?;
        let mut rng = self.rng();
        Ok(match self.engine {
            EngineKind::Sequential => Box::new(SequentialEngine::with_rng(
                self.rows,
                self.columns,
                &mut rng,
            )?),
            EngineKind::Parallel => {
                let engine = ParallelEngine::with_rng(self.rows, self.columns, &mut rng)?;
                match self.threads {
                    Some(nb_threads) => Box::new(engine.with_threads(nb_threads)?),
                    None => Box::new(engine),
                }
            }
        })
    }

    pub fn projector(&self) -> TextProjector {
        let projector = TextProjector::new(self.alive, self.dead);
        if self.styled {
            projector.styled()
        } else {
            projector
        }
    }
}
