//! The board model: cell grid, move generation and terminal scoring

use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

/// The terminal score of a position the machine has won
pub const MACHINE_WIN: i32 = 1;
/// The terminal score of a position the human has won
pub const HUMAN_WIN: i32 = -1;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Human,
    Machine,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Machine => Cell::Machine,
        }
    }
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }
}

/// One snapshot of the 7x6 game grid
///
/// Non-empty cells in a column always form a contiguous run from the
/// bottom row; every placement goes through the lowest-empty-row rule,
/// so the invariant holds by construction and is never re-checked.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Builds a board from move notation: one digit per move,
    /// columns 1 to 7, players alternating with the human moving first.
    ///
    /// Unlike a live game this accepts moves past a finished position, so
    /// terminal boards can be set up directly.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::Human;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if !board.drop_piece(column - 1, player) {
                        return Err(anyhow!("Invalid move, column {} full", column));
                    }
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `row` (0 = bottom) and `column` (0 = leftmost)
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// The number of pieces stacked in `column`
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    /// Drops a piece of `player` into `column`, filling the lowest empty
    /// row. Returns `false` and leaves the board unchanged if the column
    /// is full.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> bool {
        if !self.playable(column) {
            return false;
        }
        self.cells[column + WIDTH * self.heights[column]] = player.cell();
        self.heights[column] += 1;
        true
    }

    /// Every legal successor of this position for `player`, one per
    /// non-full column.
    ///
    /// Ascending column order is the search's tie-break order.
    pub fn possible_moves(&self, player: Player) -> Vec<Board> {
        let mut successors = Vec::with_capacity(WIDTH);

        for column in 0..WIDTH {
            let mut successor = *self;
            if successor.drop_piece(column, player) {
                successors.push(successor);
            }
        }
        successors
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.four_in_a_row().is_some()
    }

    /// Scans for a run of four identical non-empty cells: horizontal
    /// windows first, then vertical, then both diagonal orientations.
    /// The first run found wins; two simultaneous runs are unreachable
    /// under alternating play.
    pub fn four_in_a_row(&self) -> Option<Player> {
        for row in 0..HEIGHT {
            for column in 0..=WIDTH - 4 {
                if let Some(player) = self.run_of_four(row, column, 0, 1) {
                    return Some(player);
                }
            }
        }

        for column in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                if let Some(player) = self.run_of_four(row, column, 1, 0) {
                    return Some(player);
                }
            }
        }

        for column in 0..=WIDTH - 4 {
            // rising: up and to the right
            for row in 0..=HEIGHT - 4 {
                if let Some(player) = self.run_of_four(row, column, 1, 1) {
                    return Some(player);
                }
            }
            // falling: down and to the right
            for row in 3..HEIGHT {
                if let Some(player) = self.run_of_four(row, column, -1, 1) {
                    return Some(player);
                }
            }
        }

        None
    }

    fn run_of_four(&self, row: usize, column: usize, dy: i32, dx: i32) -> Option<Player> {
        let player = match self.cell(row, column) {
            Cell::Human => Player::Human,
            Cell::Machine => Player::Machine,
            Cell::Empty => return None,
        };

        for step in 1..4i32 {
            let r = (row as i32 + dy * step) as usize;
            let c = (column as i32 + dx * step) as usize;
            if self.cell(r, c) != player.cell() {
                return None;
            }
        }
        Some(player)
    }

    /// The ground-truth score of a terminal position, or the heuristic
    /// placeholder for a non-terminal one.
    ///
    /// A line on a full board counts as the win, not the draw.
    pub fn score(&self) -> i32 {
        match self.four_in_a_row() {
            Some(Player::Machine) => MACHINE_WIN,
            Some(Player::Human) => HUMAN_WIN,
            None if self.is_full() => 0,
            None => self.heuristic(),
        }
    }

    // TODO: score open three-alignments instead of always returning neutral
    fn heuristic(&self) -> i32 {
        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
