/// Number of rods on the board.
pub const NUM_RODS: usize = 3;

/// A disk, identified by its size. Size 1 is the smallest.
pub type Disk = u32;

/// An illegal disk move. The solver never produces one; this exists so
/// [`Board::move_top`] can reject a bad call instead of corrupting a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("rod index {0} is out of range")]
    InvalidRod(usize),

    #[error("cannot move a disk from empty rod {0}")]
    EmptyRod(usize),

    #[error("cannot place disk {disk} on top of smaller disk {top}")]
    LargerOntoSmaller { disk: Disk, top: Disk },
}

/// Complete puzzle state: three rods, each an ordered stack of disks stored
/// bottom-to-top. Every rod is strictly decreasing in disk size, and the
/// disks across all rods are exactly `1..=disk_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rods: [Vec<Disk>; NUM_RODS],
    disk_count: Disk,
}

impl Board {
    /// Create a board with all `disk_count` disks stacked on rod 0, largest
    /// at the bottom.
    pub fn new(disk_count: Disk) -> Self {
        let mut rods: [Vec<Disk>; NUM_RODS] = [Vec::new(), Vec::new(), Vec::new()];
        rods[0] = (1..=disk_count).rev().collect();
        Board { rods, disk_count }
    }

    /// Total number of disks on the board.
    pub fn disk_count(&self) -> Disk {
        self.disk_count
    }

    /// The disks on a rod, bottom-to-top.
    pub fn rod(&self, index: usize) -> &[Disk] {
        &self.rods[index]
    }

    /// Pop the top disk of `from` and push it onto the top of `to`,
    /// returning the moved disk.
    pub fn move_top(&mut self, from: usize, to: usize) -> Result<Disk, MoveError> {
        if from >= NUM_RODS {
            return Err(MoveError::InvalidRod(from));
        }
        if to >= NUM_RODS {
            return Err(MoveError::InvalidRod(to));
        }

        let disk = *self.rods[from].last().ok_or(MoveError::EmptyRod(from))?;
        if let Some(&top) = self.rods[to].last() {
            if disk > top {
                return Err(MoveError::LargerOntoSmaller { disk, top });
            }
        }

        self.rods[from].pop();
        self.rods[to].push(disk);
        Ok(disk)
    }

    /// Check that every rod is strictly decreasing bottom-to-top.
    pub fn is_consistent(&self) -> bool {
        self.rods
            .iter()
            .all(|rod| rod.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// Check whether every disk sits on the given rod.
    pub fn is_solved(&self, target: usize) -> bool {
        self.rods[target].len() as Disk == self.disk_count
    }
}
