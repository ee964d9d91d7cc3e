//! A human-versus-machine game of Connect 4
//!
//! The machine opponent picks its moves with a depth-limited minimax
//! search with alpha-beta pruning over whole-board snapshots.
//!
//! # Basic Usage
//!
//! ```
//! use fourinarow::game::{Game, GameState};
//! use fourinarow::search::SearchMode;
//!
//! // shallow search keeps the example fast
//! let mut game = Game::with_search(4, SearchMode::Alternating);
//!
//! assert!(game.apply_human_move(3));
//! let reply = game.apply_automated_move();
//!
//! assert!(reply.is_some());
//! assert!(matches!(game.state(), GameState::Playing));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod search;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// a four-in-a-row must fit on the board in every orientation
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
