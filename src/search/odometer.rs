//! Mixed-radix advancement over one-queen-per-row boards.
//!
//! The board is read as an N-digit base-N counter: row 0 is the least
//! significant digit and a row's digit is its queen's column. Advancing
//! bumps row 0 and carries into higher rows, covering the full N^N space
//! of one-queen-per-row boards. Columns may repeat, so the validator's
//! column check is load-bearing under this strategy.

use crate::board::{Board, Position};
use crate::error::QueensError;

/// Reset every row's queen to column 0, the counter's initial state.
pub fn reset_to_origin(board: &mut Board) {
    let origin: Vec<Position> = (0..board.size()).map(|row| Position::new(row, 0)).collect();
    board.reset_to(&origin);
}

/// True when every row's queen sits in the last column, the terminal
/// all-digits-maxed state.
pub fn is_end_state(board: &Board) -> Result<bool, QueensError> {
    let last = board.size() - 1;
    for row in 0..board.size() {
        if board.queen_in_row(row)? != last {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Advance the counter by one, in place.
///
/// Carry is an explicit loop over rows, not recursion; a carry out of the
/// last row cannot happen because the terminal state is checked up front,
/// making advancement past it a no-op that returns `Ok(false)`.
pub fn advance(board: &mut Board) -> Result<bool, QueensError> {
    if is_end_state(board)? {
        return Ok(false);
    }
    let n = board.size();
    for row in 0..n {
        let col = board.queen_in_row(row)?;
        board.set(row, col, false);
        if col + 1 < n {
            board.set(row, col + 1, true);
            return Ok(true);
        }
        // Digit maxed: wrap to 0 and carry into the next row.
        board.set(row, 0, true);
    }
    unreachable!("a non-terminal counter always has a row left to bump");
}
