// Standard library
use std::io::Write;
use std::sync::mpsc;
use std::thread;

// External libraries
use crossterm::queue;
use crossterm::style::{style, Attribute, Color, Print, PrintStyledContent, Stylize};
use tracing::{debug, instrument};

// LIFE
use crate::engine::Engine;
use crate::error::{LifeError, Result};
use crate::grid::Grid;

// Snapshots the compute thread may get ahead of the renderer by
const ASYNC_BACKLOG: usize = 4;

/// TextProjector

/// Renders generations as text, one line per row and one character per cell, followed by a
/// generation banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextProjector {
    alive: char,
    dead: char,
    styled: bool,
}

impl Default for TextProjector {
    fn default() -> Self {
        Self::new('#', '·')
    }
}

impl TextProjector {
    pub fn new(alive: char, dead: char) -> Self {
        Self {
            alive,
            dead,
            styled: false,
        }
    }

    /// Colors cells with terminal escape sequences.
    pub fn styled(mut self) -> Self {
        self.styled = true;
        self
    }

    pub fn render<W: Write>(&self, out: &mut W, grid: &Grid, generation: u64) -> Result<()> {
        if self.styled {
            for row in grid.iter_rows() {
                for alive in row {
                    let cell = if *alive {
                        style(self.alive)
                            .with(Color::Green)
                            .attribute(Attribute::Bold)
                    } else {
                        style(self.dead).with(Color::Grey)
                    };
                    queue!(out, PrintStyledContent(cell))?;
                }
                queue!(out, Print('\n'))?;
            }
        } else {
            let mut line = String::with_capacity(grid.columns());
            for row in grid.iter_rows() {
                line.clear();
                line.extend(row.iter().map(|alive| self.char_for(*alive)));
                writeln!(out, "{}", line)?;
            }
        }
        writeln!(out, "Generation {}", generation)?;
        writeln!(out)?;
        Ok(())
    }

    /// Renders the current generation then advances the engine, `generations` times.
    #[instrument(level = "debug", skip(self, engine, out))]
    pub fn simulate<E, W>(&self, engine: &mut E, out: &mut W, generations: u64) -> Result<()>
    where
        E: Engine + ?Sized,
        W: Write,
    {
        check_generations(generations)?;
        for _ in 0..generations {
            self.render(out, &engine.current_generation(), engine.generation())?;
            engine.next_generation();
        }
        out.flush()?;
        Ok(())
    }

    /// Same as [`simulate`](Self::simulate), but the engine runs on its own thread and hands
    /// snapshots over a channel while this thread renders them.
    #[instrument(level = "debug", skip(self, engine, out))]
    pub fn simulate_async<E, W>(&self, engine: &mut E, out: &mut W, generations: u64) -> Result<()>
    where
        E: Engine + Send + ?Sized,
        W: Write,
    {
        check_generations(generations)?;
        let (tx, rx) = mpsc::sync_channel::<(u64, Grid)>(ASYNC_BACKLOG);

        thread::scope(|scope| -> Result<()> {
            scope.spawn(move || {
                for _ in 0..generations {
                    if tx
                        .send((engine.generation(), engine.current_generation()))
                        .is_err()
                    {
                        debug!("renderer hung up, stopping compute thread");
                        break;
                    }
                    engine.next_generation();
                }
            });

            // Dropping `rx` on error makes the compute thread stop at its next send
            for (generation, grid) in rx {
                self.render(out, &grid, generation)?;
            }
            out.flush()?;
            Ok(())
        })
    }

    #[inline]
    fn char_for(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

fn check_generations(generations: u64) -> Result<()> {
    if generations == 0 {
        return Err(LifeError::invalid("number of generations must be positive"));
    }
    Ok(())
}
