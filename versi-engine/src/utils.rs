//! Miscellaneous project utilities.

use crate::location::COLUMN_LETTERS;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format characters into a pretty grid with lettered columns and numbered
/// rows. `piece_iter` must yield exactly `width * height` items, row-major.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    width: usize,
    height: usize,
    f: &mut Formatter,
) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..width {
        let letter = COLUMN_LETTERS.chars().nth(col).ok_or(fmt::Error)?;
        write!(f, "{} ", letter)?;
    }

    for row in 0..height {
        write!(f, "\n{:>2} ", row + 1)?;
        for _ in 0..width {
            write!(f, "{} ", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
