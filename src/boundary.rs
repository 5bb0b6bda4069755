//! Neighbor lookup policies at the edges of a grid.
//!
//! The sequential engine uses [`Open`] and the parallel engine uses [`Toroidal`], so the two
//! engines can disagree on cells along the border.

// LIFE
use crate::grid::{Neighbor2D, Position2D, Size2D};

pub trait Boundary: Send + Sync + 'static {
    /// Maps `pos + nbor` onto the grid, or `None` when the neighbor counts as dead.
    fn resolve(size: &Size2D, pos: Position2D, nbor: Neighbor2D) -> Option<Position2D>;
}

/// Positions outside the grid are dead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Open;

impl Boundary for Open {
    #[inline]
    fn resolve(size: &Size2D, pos: Position2D, nbor: Neighbor2D) -> Option<Position2D> {
        let row = offset(pos.row(), nbor.row())?;
        let column = offset(pos.column(), nbor.column())?;
        let resolved = Position2D(row, column);
        if size.contains(resolved) {
            Some(resolved)
        } else {
            None
        }
    }
}

/// Positions outside the grid wrap around modulo the grid's dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Toroidal;

impl Boundary for Toroidal {
    #[inline]
    fn resolve(size: &Size2D, pos: Position2D, nbor: Neighbor2D) -> Option<Position2D> {
        Some(Position2D(
            wrap(pos.row(), nbor.row(), size.rows()),
            wrap(pos.column(), nbor.column(), size.columns()),
        ))
    }
}

#[inline]
fn offset(base: usize, delta: i32) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(delta.unsigned_abs() as usize)
    } else {
        base.checked_add(delta as usize)
    }
}

#[inline]
fn wrap(base: usize, delta: i32, len: usize) -> usize {
    (base as i64 + delta as i64).rem_euclid(len as i64) as usize
}
