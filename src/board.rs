use std::fmt;

use crate::error::{QueensError, MIN_BOARD_SIZE};

/// A queen's square on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An N×N occupancy grid with cells packed row-major into `u64` words.
///
/// The enumeration strategies maintain the invariant "exactly one occupied
/// cell per row"; the accessors that derive queen positions surface a
/// violation as [`QueensError::InvariantViolation`] rather than guessing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    n: usize,
    cells: Vec<u64>,
}

impl Board {
    /// An empty board. Fails with [`QueensError::InvalidSize`] for n < 4.
    pub fn new(n: usize) -> Result<Self, QueensError> {
        if n < MIN_BOARD_SIZE {
            return Err(QueensError::InvalidSize {
                n,
                min: MIN_BOARD_SIZE,
            });
        }
        let words = (n * n + 63) / 64;
        Ok(Self {
            n,
            cells: vec![0; words],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.n && col < self.n,
            "cell ({row}, {col}) out of range for a {0}x{0} board",
            self.n
        );
        row * self.n + col
    }

    /// Whether the cell holds a queen. Out-of-range indices panic.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        let i = self.index(row, col);
        (self.cells[i >> 6] >> (i & 63)) & 1 == 1
    }

    /// Place or clear a queen on a single cell. Out-of-range indices panic.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let i = self.index(row, col);
        if occupied {
            self.cells[i >> 6] |= 1u64 << (i & 63);
        } else {
            self.cells[i >> 6] &= !(1u64 << (i & 63));
        }
    }

    /// The single occupied column of `row`.
    pub fn queen_in_row(&self, row: usize) -> Result<usize, QueensError> {
        let mut found = None;
        let mut queens = 0;
        for col in 0..self.n {
            if self.get(row, col) {
                queens += 1;
                found = Some(col);
            }
        }
        match (found, queens) {
            (Some(col), 1) => Ok(col),
            _ => Err(QueensError::InvariantViolation { row, queens }),
        }
    }

    /// All queen squares in row order, one per row.
    pub fn queen_positions(&self) -> Result<Vec<Position>, QueensError> {
        let mut positions = Vec::with_capacity(self.n);
        for row in 0..self.n {
            positions.push(Position::new(row, self.queen_in_row(row)?));
        }
        Ok(positions)
    }

    /// Rewrite the whole grid in one step: clear everything, then occupy
    /// exactly the given squares.
    pub fn reset_to(&mut self, positions: &[Position]) {
        self.cells.fill(0);
        for p in positions {
            self.set(p.row, p.col, true);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.get(row, col) { "Q" } else { "." })?;
            }
            if row + 1 < self.n {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_sizes_below_four() {
        for n in [0, 1, 2, 3] {
            assert_eq!(
                Board::new(n),
                Err(QueensError::InvalidSize { n, min: 4 })
            );
        }
        assert!(Board::new(4).is_ok());
    }

    #[test]
    fn set_get_roundtrip_across_word_boundaries() {
        // 9x9 = 81 cells spans two u64 words.
        let mut board = Board::new(9).unwrap();
        assert!(!board.get(8, 8));
        board.set(8, 8, true);
        board.set(0, 0, true);
        assert!(board.get(8, 8));
        assert!(board.get(0, 0));
        board.set(8, 8, false);
        assert!(!board.get(8, 8));
        assert!(board.get(0, 0));
    }

    #[test]
    fn queen_in_row_reports_invariant_violations() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(
            board.queen_in_row(2),
            Err(QueensError::InvariantViolation { row: 2, queens: 0 })
        );
        board.set(2, 0, true);
        board.set(2, 3, true);
        assert_eq!(
            board.queen_in_row(2),
            Err(QueensError::InvariantViolation { row: 2, queens: 2 })
        );
        board.set(2, 3, false);
        assert_eq!(board.queen_in_row(2), Ok(0));
    }

    #[test]
    fn reset_to_replaces_previous_contents() {
        let mut board = Board::new(4).unwrap();
        board.set(0, 0, true);
        board.reset_to(&[
            Position::new(0, 1),
            Position::new(1, 3),
            Position::new(2, 0),
            Position::new(3, 2),
        ]);
        assert!(!board.get(0, 0));
        assert_eq!(
            board.queen_positions().unwrap(),
            vec![
                Position::new(0, 1),
                Position::new(1, 3),
                Position::new(2, 0),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn display_renders_queens_and_empty_cells() {
        let mut board = Board::new(4).unwrap();
        board.reset_to(&[
            Position::new(0, 1),
            Position::new(1, 3),
            Position::new(2, 0),
            Position::new(3, 2),
        ]);
        assert_eq!(
            board.to_string(),
            ". Q . .\n. . . Q\nQ . . .\n. . Q ."
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access_panics() {
        let board = Board::new(4).unwrap();
        board.get(4, 0);
    }
}
