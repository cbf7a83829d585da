//! Core Tower of Hanoi logic: the three-rod board and the recursive solver
//! that generates the canonical move sequence.

mod board;
mod solver;

pub use board::{Board, Disk, MoveError, NUM_RODS};
pub use solver::{move_count, solve, MoveObserver};
