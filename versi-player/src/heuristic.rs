//! The built-in automated player: corners first, then greatest capture.

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use versi_engine::{Game, Location, Player};

/// Pick a move for `player`: a corner if one is available (corner discs can
/// never be recaptured), otherwise the placement flipping the most discs.
/// Exact ties are broken at random.
///
/// Panics if `player` has no legal move; callers only ask for a move when
/// one exists.
pub fn choose_move<R: Rng>(rng: &mut R, game: &Game, player: Player) -> Location {
    let grid = game.grid();
    let mut moves = grid.legal_moves(player);
    assert!(!moves.is_empty(), "no legal moves to choose from");

    // Shuffle before the stable sort so equal keys come out in random order.
    if moves.len() > 1 {
        moves.shuffle(rng);
    }
    moves.sort_by_key(|&loc| {
        (
            !grid.is_corner(loc),
            Reverse(grid.captured_by(player, loc).len()),
        )
    });

    moves[0]
}
