//! Minimax with alpha-beta pruning over board snapshots

use crate::board::{Board, Player};

/// The default search depth in plies
pub const DEFAULT_DEPTH: u32 = 8;

/// Which player's moves are expanded at each ply of the search
///
/// The minimizing plies of a two-player search normally expand the
/// opponent's replies; `FixedMachine` instead expands the machine's own
/// moves at every ply, so the search never anticipates the human at all.
/// It mostly exists so tests can pin down how different the two
/// behaviors are; live games use `Alternating`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SearchMode {
    Alternating,
    FixedMachine,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Alternating
    }
}

/// An agent that picks the machine's move by adversarial tree search
///
/// # Notes
/// The search is exact minimax up to the depth limit: pruning only skips
/// subtrees that cannot change the selected move. Positions at the depth
/// limit score as neutral (the evaluator has no positional heuristic), so
/// the engine plays for reachable wins and blocks reachable losses but
/// has no opinion between quiet moves; those ties break to the lowest
/// column index.
pub struct Searcher {
    mode: SearchMode,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            node_count: 0,
        }
    }

    /// Picks the best candidate among the machine's possible moves.
    ///
    /// Each candidate is already one ply deep (the machine's piece
    /// placed), so it is scored by minimizing over the opponent's replies
    /// with the remaining search depth. The running best is only replaced
    /// by a strictly greater value, so ties go to the first-encountered
    /// candidate, i.e. the lowest column.
    ///
    /// Returns `None` only for an empty candidate list (a full board).
    pub fn select_best_move(&mut self, candidates: &[Board], max_depth: u32) -> Option<Board> {
        let mut alpha = i32::MIN;
        let mut best = None;

        for candidate in candidates {
            let score = self.search(
                candidate,
                max_depth.saturating_sub(1),
                alpha,
                i32::MAX,
                false,
            );
            if score > alpha {
                alpha = score;
                best = Some(*candidate);
            }
        }
        best
    }

    /// One ply of the search: a maximizing or minimizing step depending
    /// on `maximizing`, folding successor scores into the running
    /// `alpha`/`beta` bounds and pruning once they cross.
    fn search(
        &mut self,
        node: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        if depth == 0 || node.is_terminal() {
            return node.score();
        }

        let mover = match self.mode {
            SearchMode::FixedMachine => Player::Machine,
            SearchMode::Alternating => {
                if maximizing {
                    Player::Machine
                } else {
                    Player::Human
                }
            }
        };
        // successors are plain values; the whole list drops with this frame
        let successors = node.possible_moves(mover);

        if maximizing {
            for successor in &successors {
                let score = self.search(successor, depth - 1, alpha, beta, false);
                if score > alpha {
                    alpha = score;
                }
                // a perfect opponent will not let the game reach this node
                if alpha >= beta {
                    break;
                }
            }
            alpha
        } else {
            for successor in &successors {
                let score = self.search(successor, depth - 1, alpha, beta, true);
                if score < beta {
                    beta = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            beta
        }
    }
}
