use crate::error::SolveError;

use super::board::{Board, Disk};

/// Collaborator notified after every single-disk move. The UI presents a
/// frame and paces the animation here; tests record moves and check board
/// invariants instead.
pub trait MoveObserver {
    fn disk_moved(
        &mut self,
        disk: Disk,
        from: usize,
        to: usize,
        board: &Board,
    ) -> Result<(), SolveError>;
}

/// Move the top `n` disks of `source` onto `target`, using `auxiliary` as
/// scratch space.
///
/// `n` must be at least 1, `source` must hold at least `n` disks, and each
/// of them must be smaller than anything already on `target`. The only
/// caller starts from a freshly initialized board, which satisfies all of
/// this; a violation surfaces as [`MoveError`](super::MoveError) from the
/// board rather than a corrupted stack.
///
/// Performs exactly `2^n − 1` single-disk moves, notifying `observer` after
/// each one.
pub fn solve(
    n: Disk,
    source: usize,
    target: usize,
    auxiliary: usize,
    board: &mut Board,
    observer: &mut dyn MoveObserver,
) -> Result<(), SolveError> {
    if n == 1 {
        // The only point at which the board actually changes
        let disk = board.move_top(source, target)?;
        observer.disk_moved(disk, source, target, board)?;
    } else {
        solve(n - 1, source, auxiliary, target, board, observer)?;
        solve(1, source, target, auxiliary, board, observer)?;
        solve(n - 1, auxiliary, target, source, board, observer)?;
    }
    Ok(())
}

/// Number of single-disk moves [`solve`] performs for `n` disks: `2^n − 1`.
pub fn move_count(n: Disk) -> u64 {
    (1u64 << n) - 1
}
