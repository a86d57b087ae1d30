//! Minimax chess engine
//!
//! Fixed-depth minimax with alpha-beta pruning, quiescence search at the
//! horizon, heuristic move ordering, and a cached static evaluation.

mod cache;
mod eval;
mod order;
mod search;

use chesskit_core::{Engine, Position, SearchLimits, SearchResult};

/// The computer player. Owns the evaluation cache and a node counter;
/// everything else is recomputed per search.
#[derive(Debug, Default)]
pub struct MinimaxEngine {
    nodes: u64,
    eval: Evaluator,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            eval: Evaluator::new(),
        }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(pos, limits.depth, &mut self.eval, &mut self.nodes);
        match outcome {
            Some((mv, score)) => {
                log::debug!(
                    "depth {} best {mv} score {score} nodes {}",
                    limits.depth,
                    self.nodes
                );
            }
            None => log::debug!("no legal moves at depth {}", limits.depth),
        }

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.eval.clear_cache();
    }
}

// Re-export for direct use without going through the trait
pub use eval::{evaluate_position, piece_value, Evaluator};
pub use search::{pick_best_move, INF, MATE_SCORE};
