//! Implements game-level Versi logic: the opening position, move
//! application, turn order with automatic passes, and scoring.

use crate::grid::{Cell, Grid, Player};
use crate::location::{Location, COLUMN_LETTERS};
use crate::utils::format_grid;
use crate::{DEFAULT_EDGE_LENGTH, DEFAULT_SYMBOLS};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Tie,
}

/// Whether the game is still being played, and if so whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress(Player),
    Ended(Outcome),
}

/// A move the rules reject: the target captures nothing, lands on an
/// occupied or off-board cell, or the game is already over. Rejection never
/// changes the game state.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "{} is not a legal move", location)]
pub struct IllegalMove {
    pub location: Location,
}

/// The cells changed by one applied move: the placement itself plus every
/// flipped disc. Renderers use this for flip highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub placed: Location,
    pub flipped: Vec<Location>,
}

impl MoveReport {
    /// Every cell whose appearance changed.
    pub fn changed(&self) -> impl Iterator<Item = Location> + '_ {
        std::iter::once(self.placed).chain(self.flipped.iter().copied())
    }
}

/// Configuration for a new game: board size and the two disc symbols, in
/// turn order.
///
/// `edge_length` must be at least 4 (room for the seed block) and at most
/// 26 (one column letter per column); [`Game::new`] rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub edge_length: usize,
    pub symbols: [char; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
            symbols: DEFAULT_SYMBOLS,
        }
    }
}

/// The complete state of a Versi game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    status: Status,
    symbols: [char; 2],
}

impl Default for Game {
    /// Start a game with the default configuration.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Start a new game: an empty board seeded with four discs in the 2x2
    /// block at the board's center, the first player's discs on the block's
    /// main diagonal.
    ///
    /// Panics if the board is too small to hold the seed block, or too wide
    /// for its columns to be lettered.
    pub fn new(config: GameConfig) -> Self {
        assert!(config.edge_length >= 4, "board too small to seed");
        assert!(
            config.edge_length <= COLUMN_LETTERS.len(),
            "board too wide for column letters"
        );

        let mut grid = Grid::new(config.edge_length, config.edge_length);
        let (x, y) = (config.edge_length / 2 - 1, config.edge_length / 2 - 1);
        seed(&mut grid, Location::new(x, y), Player::One);
        seed(&mut grid, Location::new(x + 1, y + 1), Player::One);
        seed(&mut grid, Location::new(x + 1, y), Player::Two);
        seed(&mut grid, Location::new(x, y + 1), Player::Two);

        Self {
            grid,
            status: Status::InProgress(Player::One),
            symbols: config.symbols,
        }
    }

    /// Resume play from an arbitrary position with `to_move` next to act.
    /// Runs the turn-advance check once: if `to_move` has no legal move the
    /// turn passes, and if neither player does the game ends immediately.
    pub fn resume(grid: Grid, to_move: Player, symbols: [char; 2]) -> Self {
        let mut game = Self {
            grid,
            status: Status::InProgress(to_move),
            symbols,
        };
        game.status = game.next_status(!to_move);
        game
    }

    /// Play `target` for the active player: place a disc, flip every
    /// captured disc to the mover, and advance the turn. A player whose
    /// enemy has no reply moves again (an automatic pass); when neither side
    /// can move, the game ends on disc count.
    ///
    /// Fails with [`IllegalMove`] when `target` captures nothing or the game
    /// is already over; the game state is untouched on failure.
    pub fn apply_move(&mut self, target: Location) -> Result<MoveReport, IllegalMove> {
        let player = match self.status {
            Status::InProgress(player) => player,
            Status::Ended(_) => return Err(IllegalMove { location: target }),
        };

        let captured = self.grid.captured_by(player, target);
        if captured.is_empty() {
            return Err(IllegalMove { location: target });
        }

        // Everything below is in bounds: captured_by only visits board cells.
        for &loc in &captured {
            self.grid
                .set_cell(loc, Cell::Occupied(player))
                .expect("captured disc on the board");
        }
        self.grid
            .set_cell(target, Cell::Occupied(player))
            .expect("move target on the board");

        self.status = self.next_status(player);
        debug!(?player, %target, flipped = captured.len(), "applied move");

        Ok(MoveReport {
            placed: target,
            flipped: captured,
        })
    }

    /// Decide who acts after `player` has just moved: the enemy if they have
    /// a reply, `player` again if only they do, otherwise nobody.
    fn next_status(&self, player: Player) -> Status {
        let enemy = !player;
        if !self.grid.legal_moves(enemy).is_empty() {
            Status::InProgress(enemy)
        } else if !self.grid.legal_moves(player).is_empty() {
            // The enemy passes and `player` keeps the turn.
            Status::InProgress(player)
        } else {
            let outcome = self.outcome();
            debug!(?outcome, "game over");
            Status::Ended(outcome)
        }
    }

    /// Compare disc counts to settle a finished game.
    fn outcome(&self) -> Outcome {
        match self.score(Player::One).cmp(&self.score(Player::Two)) {
            Ordering::Greater => Outcome::Win(Player::One),
            Ordering::Less => Outcome::Win(Player::Two),
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// Count the discs `player` currently holds. Recomputed on demand.
    pub fn score(&self, player: Player) -> usize {
        self.grid.count_discs(player)
    }

    /// The board, for capture queries and rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player whose turn it is, if the game is still in progress.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            Status::InProgress(player) => Some(player),
            Status::Ended(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    /// The winner of a finished game, or None while in progress or tied.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Ended(Outcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    /// The symbol drawn for `player`'s discs.
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::One => self.symbols[0],
            Player::Two => self.symbols[1],
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces = self.grid.cells().map(|(_, cell)| match cell.owner() {
            None => '.',
            Some(player) => self.symbol(player),
        });
        format_grid(pieces, self.grid.width(), self.grid.height(), f)?;

        write!(
            f,
            "\n\n{}  score: {:3}    {}  score: {:3}",
            self.symbol(Player::One),
            self.score(Player::One),
            self.symbol(Player::Two),
            self.score(Player::Two),
        )?;

        match self.status {
            Status::InProgress(player) => write!(f, "\n{} to move", self.symbol(player)),
            Status::Ended(Outcome::Win(player)) => write!(f, "\n{} wins!", self.symbol(player)),
            Status::Ended(Outcome::Tie) => write!(f, "\nThe game was a tie!"),
        }
    }
}

fn seed(grid: &mut Grid, loc: Location, player: Player) {
    grid.set_cell(loc, Cell::Occupied(player))
        .expect("seed location on the board");
}
