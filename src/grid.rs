// External libraries
use rand::Rng;

// LIFE
use crate::error::{LifeError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size2D {
    rows: usize,
    columns: usize,
}

impl Size2D {
    /// Both dimensions must be strictly positive, and the cell count must fit in one buffer.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, columns
            )));
        }
        match rows.checked_mul(columns) {
            Some(total) if total <= isize::MAX as usize => Ok(Self { rows, columns }),
            _ => Err(LifeError::invalid(format!(
                "grid dimensions {}x{} exceed the addressable cell count",
                rows, columns
            ))),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn contains(&self, pos: Position2D) -> bool {
        pos.row() < self.rows && pos.column() < self.columns
    }

    pub fn position(&self, idx: usize) -> Position2D {
        if idx >= self.total() {
            panic!("Index should be less than {}, got {}.", self.total(), idx);
        }
        Position2D(idx / self.columns, idx % self.columns)
    }
}

/// A `(row, column)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position2D(pub usize, pub usize);

impl Position2D {
    #[inline]
    pub fn row(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.1
    }

    pub fn idx(&self, size: &Size2D) -> usize {
        if !size.contains(*self) {
            panic!("Position2D ({:?}) not within Size2D ({:?}).", *self, *size);
        }
        self.0 * size.columns() + self.1
    }
}

impl From<(usize, usize)> for Position2D {
    fn from(tuple: (usize, usize)) -> Self {
        Position2D(tuple.0, tuple.1)
    }
}

/// Relative `(row, column)` offset of a neighbor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Neighbor2D(pub i32, pub i32);

impl Neighbor2D {
    #[inline]
    pub fn row(&self) -> i32 {
        self.0
    }

    #[inline]
    pub fn column(&self) -> i32 {
        self.1
    }
}

pub const MOORE_NEIGHBORHOOD: [Neighbor2D; 8] = [
    Neighbor2D(-1, 0),
    Neighbor2D(-1, 1),
    Neighbor2D(0, 1),
    Neighbor2D(1, 1),
    Neighbor2D(1, 0),
    Neighbor2D(1, -1),
    Neighbor2D(0, -1),
    Neighbor2D(-1, -1),
];

/// Grid

/// Fixed-size, row-major grid of cells where `true` means alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: Size2D,
    data: Vec<bool>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    pub fn new(size: Size2D) -> Self {
        Self {
            size,
            data: vec![false; size.total()],
        }
    }

    pub fn from_data(size: Size2D, data: Vec<bool>) -> Result<Self> {
        if data.len() != size.total() {
            return Err(LifeError::invalid(format!(
                "expected {} cells for a {}x{} grid, got {}",
                size.total(),
                size.rows(),
                size.columns(),
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Builds a grid from nested rows. An empty outer vector, an empty row or ragged rows
    /// are rejected.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let nb_rows = rows.len();
        let nb_cols = match rows.first() {
            Some(first) => first.len(),
            None => return Err(LifeError::invalid(ERR_NO_ROWS)),
        };
        let size = Size2D::new(nb_rows, nb_cols)?;

        let mut data = Vec::with_capacity(size.total());
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != nb_cols {
                return Err(LifeError::invalid(format!(
                    "row {} has {} cells, expected {}",
                    idx,
                    row.len(),
                    nb_cols
                )));
            }
            data.extend(row);
        }
        Ok(Self { size, data })
    }

    /// Every cell is independently alive with probability 1/2.
    pub fn random<R: Rng + ?Sized>(size: Size2D, rng: &mut R) -> Self {
        let data = (0..size.total()).map(|_| rng.gen::<bool>()).collect();
        Self { size, data }
    }

    pub(crate) fn from_raw(size: Size2D, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), size.total());
        Self { size, data }
    }

    #[inline]
    pub fn size(&self) -> &Size2D {
        &self.size
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.size.rows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.size.columns()
    }

    #[inline]
    pub fn get(&self, pos: Position2D) -> bool {
        self.data[pos.idx(&self.size)]
    }

    #[inline]
    pub fn set(&mut self, pos: Position2D, alive: bool) {
        let idx = pos.idx(&self.size);
        self.data[idx] = alive;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        if row >= self.rows() {
            panic!("{}", ERR_ROW);
        }
        let start = row * self.columns();
        &self.data[start..start + self.columns()]
    }

    pub fn iter_rows(&self) -> std::slice::Chunks<'_, bool> {
        self.data.chunks(self.columns())
    }

    /// Iterates over all cells in row-major order along with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Position2D, bool)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, alive)| (size.position(idx), *alive))
    }

    pub fn alive_count(&self) -> usize {
        self.data.iter().filter(|alive| **alive).count()
    }
}

const ERR_NO_ROWS: &str = "initial grid is absent (no rows)";
const ERR_ROW: &str = "Row not within grid.";

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn size_rejects_zero_dimensions() {
        assert!(Size2D::new(0, 5).unwrap_err().is_invalid_argument());
        assert!(Size2D::new(5, 0).unwrap_err().is_invalid_argument());
        assert!(Size2D::new(1, 1).is_ok());
    }

    #[test]
    fn size_rejects_overflowing_cell_count() {
        assert!(Size2D::new(usize::MAX, 2).unwrap_err().is_invalid_argument());
        assert!(Size2D::new(usize::MAX / 2 + 1, 2).unwrap_err().is_invalid_argument());
        assert!(Size2D::new(1, isize::MAX as usize + 1)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn positions_are_row_major() {
        let size = Size2D::new(3, 4).unwrap();
        assert_eq!(Position2D(1, 2).idx(&size), 6);
        assert_eq!(size.position(6), Position2D(1, 2));
        assert_eq!(size.position(11), Position2D(2, 3));
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let grid = Grid::new(Size2D::new(2, 2).unwrap());
        grid.get(Position2D(2, 0));
    }

    #[test]
    fn from_rows_copies_cells() {
        let grid = Grid::from_rows(vec![vec![true, false, false], vec![false, false, true]])
            .unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert!(grid.get(Position2D(0, 0)));
        assert!(grid.get(Position2D(1, 2)));
        assert_eq!(grid.alive_count(), 2);
        assert_eq!(grid.row(1), &[false, false, true]);
    }

    #[test]
    fn from_rows_rejects_absent_and_malformed_input() {
        assert!(Grid::from_rows(vec![]).unwrap_err().is_invalid_argument());
        assert!(Grid::from_rows(vec![vec![]]).unwrap_err().is_invalid_argument());
        assert!(Grid::from_rows(vec![vec![true], vec![true, false]])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn from_data_checks_length() {
        let size = Size2D::new(2, 2).unwrap();
        assert!(Grid::from_data(size, vec![false; 3]).is_err());
        assert!(Grid::from_data(size, vec![false; 4]).is_ok());
    }

    #[test]
    fn random_is_reproducible_with_a_seeded_source() {
        let size = Size2D::new(16, 16).unwrap();
        let a = Grid::random(size, &mut StdRng::seed_from_u64(7));
        let b = Grid::random(size, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        // 256 fair coin flips landing all on one side would be astronomically unlikely
        assert!(a.alive_count() > 0 && a.alive_count() < size.total());
    }
}
