//! Code for working with [`Location`]s and compass [`Direction`]s on the board.

use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// Letters used to label board columns, left to right.
pub(crate) const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A location on the board, in 0-indexed (column, row) coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

/// One of the 8 compass directions a capture ray can follow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

/// Every compass direction: {-1, 0, 1} x {-1, 0, 1} minus the null step.
/// The order is fixed so capture scans are deterministic.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: -1, dy: -1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: 0, dy: -1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: 1, dy: 1 },
];

impl Location {
    /// Construct from column and row coordinates.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move one cell along `dir` within a `width` x `height` board.
    /// Returns None if the step would leave the board.
    pub fn step(self, dir: Direction, width: usize, height: usize) -> Option<Self> {
        let x = self.x as isize + dir.dx;
        let y = self.y as isize + dir.dy;
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            None
        } else {
            Some(Self::new(x as usize, y as usize))
        }
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col = COLUMN_LETTERS.chars().nth(self.x).ok_or(fmt::Error)?;
        f.write_char(col)?;
        write!(f, "{}", self.y + 1)
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from string notation ("A4"; rows past 9 use two
/// digits, e.g. "C12"). Fails on anything else.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let x = COLUMN_LETTERS.find(col_str).ok_or(ParseLocationError)?;
        let row: usize = chars.as_str().parse().map_err(|_| ParseLocationError)?;

        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(x, row - 1))
    }
}
