//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a single board.
//! Rules are separated from board storage so the timeline can evaluate
//! any snapshot in its history, not just the latest one.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner, winning_line};
