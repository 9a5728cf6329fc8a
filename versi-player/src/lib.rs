//! `versi-player` provides an automated opponent for the `versi-engine`
//! rules library, plus a line-mode terminal front-end binary.

mod heuristic;

pub use heuristic::choose_move;
