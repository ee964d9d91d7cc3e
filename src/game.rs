//! The live game: the session-lifetime position and turn application

use crate::board::{Board, Player};
use crate::search::{SearchMode, Searcher, DEFAULT_DEPTH};
use crate::WIDTH;

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    MachineWin,
    Draw,
}

/// A game in progress: the current position plus the machine's search
/// configuration
///
/// The position is only ever changed here: in place by a human drop, or
/// replaced wholesale by the searcher's chosen successor. Collaborators
/// (rendering, input) get a read-only view via [`board`](Self::board).
pub struct Game {
    board: Board,
    max_depth: u32,
    mode: SearchMode,
}

impl Game {
    pub fn new() -> Self {
        Self::with_search(DEFAULT_DEPTH, SearchMode::default())
    }

    pub fn with_search(max_depth: u32, mode: SearchMode) -> Self {
        Self {
            board: Board::new(),
            max_depth,
            mode,
        }
    }

    /// Resumes from an existing position
    pub fn from_position(board: Board, max_depth: u32, mode: SearchMode) -> Self {
        Self {
            board,
            max_depth,
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        match self.board.four_in_a_row() {
            Some(Player::Human) => GameState::HumanWin,
            Some(Player::Machine) => GameState::MachineWin,
            None if self.board.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }

    /// Drops a human piece into `column`.
    ///
    /// Returns `false` and leaves the position unchanged if the column is
    /// full; the caller must not advance the turn in that case.
    pub fn apply_human_move(&mut self, column: usize) -> bool {
        self.board.drop_piece(column, Player::Human)
    }

    /// Lets the machine take its turn: generates its candidate moves,
    /// searches for the best one, and replaces the live position with it.
    ///
    /// Returns the column the machine dropped into, or `None` (position
    /// unchanged) when no move exists.
    pub fn apply_automated_move(&mut self) -> Option<usize> {
        let candidates = self.board.possible_moves(Player::Machine);

        let mut searcher = Searcher::new(self.mode);
        let best = searcher.select_best_move(&candidates, self.max_depth)?;

        let column = (0..WIDTH).find(|&c| best.height(c) != self.board.height(c));
        self.board = best;
        column
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
