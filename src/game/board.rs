use crate::error::GameError;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 2;

/// A (row, column) reference to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }
}

/// Square grid of tile exponents. 0 is empty, k > 0 is the tile 2^k.
///
/// Cells are stored row-major in a flat buffer; the edge length is fixed
/// for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

/// Displayed number for a stored exponent. Saturates past `u64::MAX`.
pub fn tile_value(exponent: u8) -> u64 {
    if exponent == 0 {
        return 0;
    }
    1u64.checked_shl(u32::from(exponent)).unwrap_or(u64::MAX)
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_SIZE {
            return Err(GameError::BoardTooSmall {
                size,
                min: MIN_SIZE,
            });
        }
        Ok(Board {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from explicit rows. Every row must be as long as there are rows.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, GameError> {
        let mut board = Board::new(rows.len())?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != board.size {
                return Err(GameError::CellCountMismatch {
                    expected: board.size,
                    actual: values.len(),
                });
            }
            let start = row * board.size;
            board.cells[start..start + board.size].copy_from_slice(values);
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Exponent at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write an exponent at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), GameError> {
        let i = self.index(row, col).ok_or(GameError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Empty cells in row-major order. Recomputed on every call.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| Coordinate::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// True iff every cell matches `other`
    pub fn structurally_equal(&self, other: &Board) -> bool {
        self == other
    }

    pub fn contains(&self, exponent: u8) -> bool {
        self.cells.contains(&exponent)
    }

    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Check whether any horizontally or vertically adjacent cells hold the same value
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && self.cells[row * n + col + 1] == v {
                    return true;
                }
                if row + 1 < n && self.cells[(row + 1) * n + col] == v {
                    return true;
                }
            }
        }
        false
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Owned copy of the grid, one `Vec` per row
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(board.get(row, col), Some(0));
            }
        }
        assert_eq!(board.count_empty(), 16);
    }

    #[test]
    fn test_rejects_small_boards() {
        assert_eq!(
            Board::new(1).unwrap_err(),
            GameError::BoardTooSmall { size: 1, min: 2 }
        );
        assert!(Board::new(0).is_err());
        assert!(Board::new(2).is_ok());
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut board = Board::new(3).unwrap();
        board.set(2, 1, 5).unwrap();
        assert_eq!(board.get(2, 1), Some(5));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert_eq!(
            board.set(0, 3, 1),
            Err(GameError::OutOfBounds {
                row: 0,
                col: 3,
                size: 3
            })
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(&[&[1, 0], &[0, 2]]).unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]
        );
    }

    #[test]
    fn test_empty_cells_follow_mutation() {
        let mut board = Board::new(2).unwrap();
        assert_eq!(board.empty_cells().len(), 4);
        board.set(0, 0, 1).unwrap();
        assert_eq!(board.empty_cells().len(), 3);
        assert!(!board.empty_cells().contains(&Coordinate::new(0, 0)));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert_eq!(
            Board::from_rows(&[&[1, 2], &[3]]).unwrap_err(),
            GameError::CellCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = Board::from_rows(&[&[1, 2], &[3, 4]]).unwrap();
        let mut b = a.clone();
        assert!(a.structurally_equal(&b));
        b.set(1, 1, 0).unwrap();
        assert!(!a.structurally_equal(&b));
    }

    #[test]
    fn test_adjacent_pairs() {
        let checker = Board::from_rows(&[&[1, 2, 1], &[2, 1, 2], &[1, 2, 1]]).unwrap();
        assert!(!checker.has_adjacent_pair());

        let horizontal = Board::from_rows(&[&[1, 1], &[2, 3]]).unwrap();
        assert!(horizontal.has_adjacent_pair());

        let vertical = Board::from_rows(&[&[1, 2], &[3, 2]]).unwrap();
        assert!(vertical.has_adjacent_pair());
    }

    #[test]
    fn test_snapshot_and_rows() {
        let board = Board::from_rows(&[&[1, 0], &[0, 3]]).unwrap();
        assert_eq!(board.snapshot(), vec![vec![1, 0], vec![0, 3]]);
        assert_eq!(board.rows().count(), 2);
        assert_eq!(board.max_exponent(), 3);
        assert!(board.contains(3));
        assert!(!board.contains(2));
    }

    #[test]
    fn test_tile_value() {
        assert_eq!(tile_value(0), 0);
        assert_eq!(tile_value(1), 2);
        assert_eq!(tile_value(11), 2048);
        assert_eq!(tile_value(63), 1 << 63);
        assert_eq!(tile_value(64), u64::MAX);
        assert_eq!(tile_value(255), u64::MAX);
    }
}
