//! `versi-engine` is a rules library for Versi, a Reversi variant played on
//! square boards of any size.
//!
//! The library has two levels of abstraction:
//!
//!  - [`Grid`] holds the raw cells and implements ray traversal, capture
//!    resolution, and legal-move enumeration. It enforces bounds but not the
//!    rules of play.
//!  - [`Game`] is the full turn-based state machine: it seeds the opening
//!    position, validates and applies moves, handles automatic passes, and
//!    detects the end of the game.
//!
//! Rendering and input handling are deliberately left to callers; the engine
//! exposes a row-major snapshot of the board and a changed-cell report per
//! move for them to draw from.

mod capture;
mod game;
mod grid;
mod location;
mod utils;

pub use game::*;
pub use grid::*;
pub use location::*;

/// The default number of cells on one edge of a Versi board.
pub const DEFAULT_EDGE_LENGTH: usize = 12;

/// The default disc symbols for the two players, in turn order.
pub const DEFAULT_SYMBOLS: [char; 2] = ['▣', '⎔'];
