use thiserror::Error;

/// Smallest board that can hold N mutually non-attacking queens in the
/// classic sense; smaller boards are rejected at construction.
pub const MIN_BOARD_SIZE: usize = 4;

/// Structured errors returned by board construction and enumeration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueensError {
    /// Requested board size cannot hold a classic N-queens solution.
    #[error("board size must be at least {min}, got {n}")]
    InvalidSize { n: usize, min: usize },
    /// A row was observed holding other than exactly one queen where the
    /// one-queen-per-row invariant was assumed. Internal defect: both
    /// enumeration strategies maintain the invariant by construction.
    #[error("row {row} holds {queens} queens, expected exactly one")]
    InvariantViolation { row: usize, queens: usize },
}
