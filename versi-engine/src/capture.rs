//! The capture engine: which discs a placement flips, and which moves are
//! therefore legal.
//!
//! A placement captures along a ray when the ray's contiguous occupied prefix
//! starts with a solid run of enemy discs immediately followed by one of the
//! mover's own discs. Run-length grouping over the prefix finds both runs in
//! a single linear scan.

use crate::grid::{Cell, Grid, Player};
use crate::location::{Direction, Location, DIRECTIONS};
use itertools::Itertools;

impl Grid {
    /// All discs `player` would capture by placing a disc at `target`, over
    /// every compass direction. Directions are scanned in the fixed
    /// [`DIRECTIONS`] order, so the result is deterministic; an empty result
    /// means the placement is not a legal move.
    pub fn captured_by(&self, player: Player, target: Location) -> Vec<Location> {
        // A move must land on an empty cell of the board.
        match self.cell_at(target) {
            Ok(Cell::Empty) => {}
            _ => return Vec::new(),
        }

        DIRECTIONS
            .iter()
            .flat_map(|&dir| self.captured_in_direction(player, target, dir))
            .collect()
    }

    /// The enemy discs captured along a single direction from `target`.
    fn captured_in_direction(
        &self,
        player: Player,
        target: Location,
        dir: Direction,
    ) -> Vec<Location> {
        // Only the contiguous occupied prefix of the ray matters: an empty
        // cell or the board edge ends the scan.
        let prefix = self
            .ray(target, dir)
            .map_while(|(loc, cell)| cell.owner().map(|owner| (loc, owner)));

        let grouped = prefix.group_by(|&(_, owner)| owner);
        let mut runs = grouped.into_iter();

        // Bind both lookups before matching: the groups borrow `grouped`,
        // and must be dropped before it.
        let first = runs.next();
        let second = runs.next();
        let captured = match (first, second) {
            (Some((first_owner, first_run)), Some((second_owner, _)))
                if first_owner == !player && second_owner == player =>
            {
                first_run.map(|(loc, _)| loc).collect()
            }
            _ => Vec::new(),
        };
        captured
    }

    /// Returns whether placing at `target` is a legal move for `player`.
    pub fn is_legal_move(&self, player: Player, target: Location) -> bool {
        !self.captured_by(player, target).is_empty()
    }

    /// Every legal placement for `player`, in row-major scan order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        self.locations()
            .filter(|&loc| self.is_legal_move(player, loc))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(grid: &mut Grid, player: Player, locs: &[(usize, usize)]) {
        for &(x, y) in locs {
            grid.set_cell(Location::new(x, y), Cell::Occupied(player))
                .unwrap();
        }
    }

    #[test]
    fn captures_a_bounded_enemy_run() {
        // . O O O # . on one row; placing at A1 captures all three.
        let mut grid = Grid::new(8, 8);
        occupy(&mut grid, Player::Two, &[(1, 0), (2, 0), (3, 0)]);
        occupy(&mut grid, Player::One, &[(4, 0)]);

        let mut captured = grid.captured_by(Player::One, Location::new(0, 0));
        captured.sort();
        assert_eq!(
            captured,
            vec![
                Location::new(1, 0),
                Location::new(2, 0),
                Location::new(3, 0),
            ]
        );
    }

    #[test]
    fn captures_only_the_run_adjacent_to_the_placement() {
        // . O O # O # on one row: both runs past the closing disc stay put,
        // and the first run is still intact after the scan looked ahead to
        // find its closer.
        let mut grid = Grid::new(8, 8);
        occupy(&mut grid, Player::Two, &[(1, 0), (2, 0), (4, 0)]);
        occupy(&mut grid, Player::One, &[(3, 0), (5, 0)]);

        let mut captured = grid.captured_by(Player::One, Location::new(0, 0));
        captured.sort();
        assert_eq!(captured, vec![Location::new(1, 0), Location::new(2, 0)]);
    }

    #[test]
    fn no_capture_without_a_closing_disc() {
        // An enemy run that reaches the edge captures nothing.
        let mut grid = Grid::new(5, 5);
        occupy(&mut grid, Player::Two, &[(1, 2), (2, 2), (3, 2), (4, 2)]);
        assert!(grid.captured_by(Player::One, Location::new(0, 2)).is_empty());
    }

    #[test]
    fn no_capture_through_an_empty_gap() {
        // O . # leaves the run unclosed: the gap ends the scan.
        let mut grid = Grid::new(8, 8);
        occupy(&mut grid, Player::Two, &[(1, 0)]);
        occupy(&mut grid, Player::One, &[(3, 0)]);
        assert!(grid.captured_by(Player::One, Location::new(0, 0)).is_empty());
    }

    #[test]
    fn no_capture_past_an_own_disc() {
        // An adjacent own disc means the first run is the mover's, not the
        // enemy's; nothing is captured even with enemies beyond it.
        let mut grid = Grid::new(8, 8);
        occupy(&mut grid, Player::One, &[(1, 0)]);
        occupy(&mut grid, Player::Two, &[(2, 0)]);
        occupy(&mut grid, Player::One, &[(3, 0)]);
        assert!(grid.captured_by(Player::One, Location::new(0, 0)).is_empty());
    }

    #[test]
    fn no_capture_onto_an_occupied_cell() {
        let mut grid = Grid::new(8, 8);
        occupy(&mut grid, Player::Two, &[(1, 0), (0, 0)]);
        occupy(&mut grid, Player::One, &[(2, 0)]);
        assert!(grid.captured_by(Player::One, Location::new(0, 0)).is_empty());
        assert!(grid.captured_by(Player::One, Location::new(2, 0)).is_empty());
    }

    #[test]
    fn off_board_target_captures_nothing() {
        let grid = Grid::new(4, 4);
        assert!(grid.captured_by(Player::One, Location::new(4, 4)).is_empty());
    }

    #[test]
    fn captures_union_over_directions() {
        // Placing in the middle of a cross of bounded enemy runs captures
        // along every arm at once.
        let mut grid = Grid::new(7, 7);
        occupy(
            &mut grid,
            Player::Two,
            &[(2, 3), (4, 3), (3, 2), (3, 4), (2, 2), (4, 4)],
        );
        occupy(
            &mut grid,
            Player::One,
            &[(1, 3), (5, 3), (3, 1), (3, 5), (1, 1), (5, 5)],
        );

        let captured = grid.captured_by(Player::One, Location::new(3, 3));
        assert_eq!(captured.len(), 6);
        for &(x, y) in &[(2, 3), (4, 3), (3, 2), (3, 4), (2, 2), (4, 4)] {
            assert!(captured.contains(&Location::new(x, y)));
        }
    }

    #[test]
    fn legality_matches_nonempty_capture() {
        let mut grid = Grid::new(6, 6);
        occupy(&mut grid, Player::One, &[(2, 2), (3, 3)]);
        occupy(&mut grid, Player::Two, &[(3, 2), (2, 3)]);

        for player in [Player::One, Player::Two] {
            for loc in grid.locations().collect::<Vec<_>>() {
                assert_eq!(
                    grid.is_legal_move(player, loc),
                    !grid.captured_by(player, loc).is_empty()
                );
            }
        }
    }

    #[test]
    fn legal_moves_in_scan_order() {
        let mut grid = Grid::new(6, 6);
        occupy(&mut grid, Player::One, &[(2, 2), (3, 3)]);
        occupy(&mut grid, Player::Two, &[(3, 2), (2, 3)]);

        let moves = grid.legal_moves(Player::One);
        assert_eq!(
            moves,
            vec![
                Location::new(3, 1),
                Location::new(4, 2),
                Location::new(1, 3),
                Location::new(2, 4),
            ]
        );
    }
}
