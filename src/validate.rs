//! The non-attacking predicate.
//!
//! Both enumeration strategies place exactly one queen per row, so row
//! conflicts cannot occur and validation reduces to three board-wide
//! duplicate checks: columns, `row - col` keys (left diagonals) and
//! `row + col` keys (right diagonals). One pass, O(N) per candidate.

use rustc_hash::FxHashSet;

use crate::board::{Board, Position};
use crate::error::QueensError;

/// True iff no two queens on the board attack each other.
///
/// Derives the queen positions first, so a board violating the
/// one-queen-per-row invariant surfaces as an error instead of a bogus
/// verdict.
pub fn is_valid(board: &Board) -> Result<bool, QueensError> {
    let positions = board.queen_positions()?;
    Ok(conflict_free(&positions))
}

/// Duplicate-freedom check over an arbitrary set of queen squares.
///
/// Exposed separately from [`is_valid`] so degenerate boards (below the
/// minimum construction size) can still be checked.
pub fn conflict_free(positions: &[Position]) -> bool {
    let mut cols: FxHashSet<usize> = FxHashSet::default();
    let mut left: FxHashSet<i64> = FxHashSet::default();
    let mut right: FxHashSet<usize> = FxHashSet::default();

    for p in positions {
        if !cols.insert(p.col) {
            return false;
        }
        if !left.insert(p.row as i64 - p.col as i64) {
            return false;
        }
        if !right.insert(p.row + p.col) {
            return false;
        }
    }
    true
}
