//! Run driver: feeds candidates from a strategy to the validator and
//! tallies the results.
//!
//! Both strategies run to exhaustion; there are no partial runs. Every
//! candidate examined bumps the counter whether or not it is accepted.

pub mod odometer;
pub mod permutations;

use std::fmt;
use std::time::{Duration, Instant};

use crate::board::{Board, Position};
use crate::error::QueensError;
use crate::validate;

use crate::search::permutations::Permutations;

/// Candidate generation strategy.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// One candidate per permutation of columns: N! candidates, columns
    /// distinct by construction. The authoritative strategy for solution
    /// counts.
    Permutations,
    /// Mixed-radix advancement over the full N^N one-queen-per-row space;
    /// columns may repeat.
    Odometer,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Permutations => f.write_str("permutations"),
            Strategy::Odometer => f.write_str("odometer"),
        }
    }
}

/// Summary of one exhaustive run, owned by the caller.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub n: usize,
    pub strategy: Strategy,
    pub solutions: u64,
    pub candidates: u64,
    pub elapsed: Duration,
}

/// Enumerate every candidate under `strategy`, validate each one, and
/// report the tallies. `on_solution` fires for each accepted board.
pub fn run(
    strategy: Strategy,
    n: usize,
    mut on_solution: impl FnMut(&Board),
) -> Result<RunReport, QueensError> {
    let mut board = Board::new(n)?;
    log::info!("enumerating {n}x{n} boards with the {strategy} strategy");

    let start = Instant::now();
    let (solutions, candidates) = match strategy {
        Strategy::Permutations => run_permutations(&mut board, &mut on_solution)?,
        Strategy::Odometer => run_odometer(&mut board, &mut on_solution)?,
    };
    let elapsed = start.elapsed();

    log::info!("{solutions} solutions among {candidates} candidates in {elapsed:?}");
    Ok(RunReport {
        n,
        strategy,
        solutions,
        candidates,
        elapsed,
    })
}

fn run_permutations(
    board: &mut Board,
    on_solution: &mut impl FnMut(&Board),
) -> Result<(u64, u64), QueensError> {
    let n = board.size();
    let mut solutions = 0u64;
    let mut candidates = 0u64;
    let mut positions: Vec<Position> = Vec::with_capacity(n);

    for cols in Permutations::new(n) {
        positions.clear();
        positions.extend(
            cols.iter()
                .enumerate()
                .map(|(row, &col)| Position::new(row, col)),
        );
        board.reset_to(&positions);
        candidates += 1;
        if validate::is_valid(board)? {
            solutions += 1;
            log::debug!("solution {solutions} at columns {cols:?}");
            on_solution(board);
        }
    }
    Ok((solutions, candidates))
}

fn run_odometer(
    board: &mut Board,
    on_solution: &mut impl FnMut(&Board),
) -> Result<(u64, u64), QueensError> {
    odometer::reset_to_origin(board);
    let mut solutions = 0u64;
    let mut candidates = 0u64;

    loop {
        candidates += 1;
        if validate::is_valid(board)? {
            solutions += 1;
            log::debug!("solution {solutions} after {candidates} candidates");
            on_solution(board);
        }
        if !odometer::advance(board)? {
            return Ok((solutions, candidates));
        }
    }
}
