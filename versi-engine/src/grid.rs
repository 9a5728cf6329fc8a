//! The board itself: a dense grid of [`Cell`]s addressed by [`Location`].
//!
//! The grid knows about bounds, rays, and corners, but not about the rules of
//! play; capture resolution lives in `capture.rs` and turn order in `game.rs`.

use crate::location::{Direction, Location};
use crate::utils::format_grid;
use derive_more::{Display, Error};
use std::fmt;
use std::ops::Not;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Default for Player {
    /// Gets the starting player.
    fn default() -> Self {
        Self::One
    }
}

impl Not for Player {
    type Output = Self;

    /// Gets the enemy player.
    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A single cell on the board: empty, or holding one player's disc.
///
/// A disc may change owner when captured; an occupied cell is never
/// re-emptied for the rest of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Get the disc's owner, if the cell holds one.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns whether the cell holds no disc.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.owner().is_none()
    }
}

/// A coordinate outside the board was dereferenced. This is a caller bug,
/// not a recoverable game condition: in-rules engine operations never build
/// out-of-bounds coordinates.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "location {} is outside the {}x{} board", location, width, height)]
pub struct OutOfBounds {
    pub location: Location,
    pub width: usize,
    pub height: usize,
}

/// A rectangular board of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `width` x `height` grid of empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Look up the cell at `loc`.
    pub fn cell_at(&self, loc: Location) -> Result<Cell, OutOfBounds> {
        self.index(loc)
            .map(|i| self.cells[i])
            .ok_or(self.out_of_bounds(loc))
    }

    /// Overwrite the cell at `loc`.
    ///
    /// The grid does not enforce the rules of play here; in particular the
    /// engine never re-empties an occupied cell through this method.
    pub fn set_cell(&mut self, loc: Location, cell: Cell) -> Result<(), OutOfBounds> {
        match self.index(loc) {
            Some(i) => {
                self.cells[i] = cell;
                Ok(())
            }
            None => Err(self.out_of_bounds(loc)),
        }
    }

    /// Every location on the board, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Location::new(x, y)))
    }

    /// Every cell with its location, in row-major order: the read-only
    /// snapshot a renderer draws from.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.locations().zip(self.cells.iter().copied())
    }

    /// Walk outward from `start` along `dir`, yielding each in-bounds cell
    /// with its location. The walk excludes `start` itself and ends at the
    /// board edge. Each call builds a fresh iterator.
    pub fn ray(&self, start: Location, dir: Direction) -> Ray<'_> {
        Ray {
            grid: self,
            cursor: start,
            dir,
        }
    }

    /// Returns whether `loc` is one of the four corner cells.
    pub fn is_corner(&self, loc: Location) -> bool {
        (loc.x == 0 || loc.x == self.width - 1) && (loc.y == 0 || loc.y == self.height - 1)
    }

    /// Count the discs on the board owned by `player`.
    pub fn count_discs(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Count the occupied cells on the board.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[inline]
    fn index(&self, loc: Location) -> Option<usize> {
        if loc.x < self.width && loc.y < self.height {
            Some(loc.y * self.width + loc.x)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, loc: Location) -> OutOfBounds {
        OutOfBounds {
            location: loc,
            width: self.width,
            height: self.height,
        }
    }
}

/// Iterator over the cells extending from a start cell in one compass
/// direction, produced by [`Grid::ray`].
#[derive(Clone, Copy, Debug)]
pub struct Ray<'a> {
    grid: &'a Grid,
    cursor: Location,
    dir: Direction,
}

impl<'a> Iterator for Ray<'a> {
    type Item = (Location, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.cursor.step(self.dir, self.grid.width, self.grid.height)?;
        self.cursor = next;
        // In bounds by construction of `step`.
        let cell = self.grid.cells[self.grid.index(next)?];
        Some((next, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces = self.cells.iter().map(|cell| match cell {
            Cell::Empty => '.',
            Cell::Occupied(Player::One) => '#',
            Cell::Occupied(Player::Two) => 'O',
        });
        format_grid(pieces, self.width, self.height, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::DIRECTIONS;

    #[test]
    fn enemy_of_each_player() {
        assert_eq!(!Player::One, Player::Two);
        assert_eq!(!Player::Two, Player::One);
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(5, 5);
        assert!(grid.locations().all(|loc| grid.cell_at(loc).unwrap().is_empty()));
        assert_eq!(grid.count_occupied(), 0);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let grid = Grid::new(4, 4);
        let err = grid.cell_at(Location::new(4, 0)).unwrap_err();
        assert_eq!(err.location, Location::new(4, 0));
        assert!(grid.cell_at(Location::new(0, 17)).is_err());
    }

    #[test]
    fn set_cell_overwrites() {
        let mut grid = Grid::new(4, 4);
        let loc = Location::new(2, 1);
        grid.set_cell(loc, Cell::Occupied(Player::Two)).unwrap();
        assert_eq!(grid.cell_at(loc), Ok(Cell::Occupied(Player::Two)));
        grid.set_cell(loc, Cell::Occupied(Player::One)).unwrap();
        assert_eq!(grid.cell_at(loc), Ok(Cell::Occupied(Player::One)));
        assert!(grid.set_cell(Location::new(9, 9), Cell::Empty).is_err());
    }

    #[test]
    fn locations_are_row_major() {
        let grid = Grid::new(3, 2);
        let all: Vec<Location> = grid.locations().collect();
        assert_eq!(
            all,
            vec![
                Location::new(0, 0),
                Location::new(1, 0),
                Location::new(2, 0),
                Location::new(0, 1),
                Location::new(1, 1),
                Location::new(2, 1),
            ]
        );
    }

    #[test]
    fn ray_excludes_start_and_stops_at_edge() {
        let grid = Grid::new(8, 8);
        let east = Direction { dx: 1, dy: 0 };
        let locs: Vec<Location> = grid
            .ray(Location::new(5, 3), east)
            .map(|(loc, _)| loc)
            .collect();
        assert_eq!(locs, vec![Location::new(6, 3), Location::new(7, 3)]);

        let northwest = Direction { dx: -1, dy: -1 };
        assert_eq!(grid.ray(Location::new(0, 0), northwest).count(), 0);
    }

    #[test]
    fn ray_is_restartable() {
        let grid = Grid::new(6, 6);
        let south = Direction { dx: 0, dy: 1 };
        let first: Vec<_> = grid.ray(Location::new(2, 2), south).collect();
        let second: Vec<_> = grid.ray(Location::new(2, 2), south).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn rays_cover_every_direction() {
        // From the center of a 5x5 grid, each ray has exactly two cells.
        let grid = Grid::new(5, 5);
        for &dir in &DIRECTIONS {
            assert_eq!(grid.ray(Location::new(2, 2), dir).count(), 2);
        }
    }

    #[test]
    fn corners_of_a_square_grid() {
        let grid = Grid::new(8, 8);
        let corners: Vec<Location> = grid
            .locations()
            .filter(|&loc| grid.is_corner(loc))
            .collect();
        assert_eq!(
            corners,
            vec![
                Location::new(0, 0),
                Location::new(7, 0),
                Location::new(0, 7),
                Location::new(7, 7),
            ]
        );
    }

    #[test]
    fn disc_counts() {
        let mut grid = Grid::new(4, 4);
        grid.set_cell(Location::new(0, 0), Cell::Occupied(Player::One))
            .unwrap();
        grid.set_cell(Location::new(1, 0), Cell::Occupied(Player::One))
            .unwrap();
        grid.set_cell(Location::new(2, 0), Cell::Occupied(Player::Two))
            .unwrap();
        assert_eq!(grid.count_discs(Player::One), 2);
        assert_eq!(grid.count_discs(Player::Two), 1);
        assert_eq!(grid.count_occupied(), 3);
    }
}
