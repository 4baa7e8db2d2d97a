//! Head sweep direction.

use serde::{Deserialize, Serialize};

/// Direction the head sweeps in, used by the SCAN/LOOK policy family.
///
/// `Up` moves toward higher cylinder indices, `Down` toward lower ones.
/// A closed enum rather than a `+1`/`-1` sentinel integer, so an
/// out-of-range direction is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward higher cylinder indices (`+1`).
    #[default]
    Up,
    /// Toward lower cylinder indices (`-1`).
    Down,
}

impl Direction {
    /// The conventional signed representation: `+1` for `Up`, `-1` for `Down`.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction of a move from one cylinder to another.
    ///
    /// Returns `None` for a zero-distance move, which carries no
    /// directional information.
    pub fn of_travel(from: u32, to: u32) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}
