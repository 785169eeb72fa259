//! Exhaustive N-queens enumeration: generate every candidate board under a
//! chosen strategy, validate each after the fact, and tally the results.

pub mod board;
pub mod error;
pub mod search;
pub mod validate;
