// External libraries
use cascade::cascade;

// LIFE
use crate::boundary::Boundary;
use crate::grid::{Grid, Position2D, Size2D, MOORE_NEIGHBORHOOD};

/// Counts the alive cells among the 8 neighbors of `pos`, resolving edges with `B`.
pub fn alive_neighbors<B: Boundary>(grid: &Grid, pos: Position2D) -> u32 {
    let size = grid.size();
    let mut n_alive_neighbors = 0;
    for nbor in MOORE_NEIGHBORHOOD.iter() {
        if let Some(nbor_pos) = B::resolve(size, pos, *nbor) {
            if grid.get(nbor_pos) {
                n_alive_neighbors += 1;
            }
        }
    }
    n_alive_neighbors
}

/// B3/S23.
#[inline]
pub fn next_state(alive: bool, n_alive_neighbors: u32) -> bool {
    if alive {
        n_alive_neighbors == 2 || n_alive_neighbors == 3
    } else {
        n_alive_neighbors == 3
    }
}

#[inline]
pub fn evolve_cell<B: Boundary>(grid: &Grid, pos: Position2D) -> bool {
    next_state(grid.get(pos), alive_neighbors::<B>(grid, pos))
}

/// Computes every column of `row` of the next generation into `out`.
pub fn evolve_row<B: Boundary>(grid: &Grid, row: usize, out: &mut [bool]) {
    debug_assert_eq!(out.len(), grid.columns());
    for (column, cell) in out.iter_mut().enumerate() {
        *cell = evolve_cell::<B>(grid, Position2D(row, column));
    }
}

/// Horizontal blinker in the middle of a 5x5 grid.
pub fn blinker() -> Grid {
    let mut blinker = Grid::new(fixed_size(5, 5));
    blinker.set(Position2D(2, 1), true);
    blinker.set(Position2D(2, 2), true);
    blinker.set(Position2D(2, 3), true);
    blinker
}

/// Checks a 5x5 grid against the blinker in its original (horizontal) or flipped
/// (vertical) phase.
pub fn is_blinker(grid: &Grid, flipped: bool) -> bool {
    let cell_is_valid = |pos: Position2D, alive: bool| {
        let on_blinker = if flipped {
            pos.column() == 2 && pos.row() >= 1 && pos.row() <= 3
        } else {
            pos.row() == 2 && pos.column() >= 1 && pos.column() <= 3
        };
        alive == on_blinker
    };

    grid.rows() == 5
        && grid.columns() == 5
        && grid.iter().all(|(pos, alive)| cell_is_valid(pos, alive))
}

/// Still life: a 2x2 square at `origin`.
pub fn block(size: Size2D, origin: Position2D) -> Grid {
    let (r, c) = (origin.row(), origin.column());
    let mut grid = Grid::new(size);
    grid = cascade!(
        grid;
        ..set(Position2D(r, c), true);
        ..set(Position2D(r, c + 1), true);
        ..set(Position2D(r + 1, c), true);
        ..set(Position2D(r + 1, c + 1), true);
    );
    grid
}

/// Glider heading down and to the right, its 3x3 bounding box anchored at `origin`.
/// It moves by one row and one column every 4 generations.
pub fn glider(size: Size2D, origin: Position2D) -> Grid {
    let (r, c) = (origin.row(), origin.column());
    let mut grid = Grid::new(size);
    grid = cascade!(
        grid;
        ..set(Position2D(r, c + 1), true);
        ..set(Position2D(r + 1, c + 2), true);
        ..set(Position2D(r + 2, c), true);
        ..set(Position2D(r + 2, c + 1), true);
        ..set(Position2D(r + 2, c + 2), true);
    );
    grid
}

const PENTA_DECATHLON_ALIVE_SET: [Position2D; 12] = [
    Position2D(6, 9),
    Position2D(6, 14),
    Position2D(7, 7),
    Position2D(7, 8),
    Position2D(7, 10),
    Position2D(7, 11),
    Position2D(7, 12),
    Position2D(7, 13),
    Position2D(7, 15),
    Position2D(7, 16),
    Position2D(8, 9),
    Position2D(8, 14),
];

/// Period 15 oscillator, with enough room on a 15x24 grid that it never touches the border.
pub fn penta_decathlon() -> Grid {
    let mut penta_decathlon = Grid::new(fixed_size(15, 24));
    for pos in PENTA_DECATHLON_ALIVE_SET.iter() {
        penta_decathlon.set(*pos, true);
    }
    penta_decathlon
}

pub fn is_penta_decathlon(grid: &Grid) -> bool {
    *grid == penta_decathlon()
}

fn fixed_size(rows: usize, columns: usize) -> Size2D {
    match Size2D::new(rows, columns) {
        Ok(size) => size,
        Err(_) => unreachable!("pattern sizes are positive"),
    }
}
