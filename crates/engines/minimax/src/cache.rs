//! Bounded exact-match evaluation cache with round-robin replacement.

use chesskit_core::{Color, Piece, Position};

const SLOTS: usize = 64;

#[derive(Clone, Debug)]
struct Slot {
    board: [Option<Piece>; 64],
    side_to_move: Color,
    score: i32,
}

/// Keys on the full board contents plus the side to move. Castling rights
/// and the en-passant target never feed the evaluation, so the shorter key
/// is exact for this evaluator; revisit if a term ever reads them.
#[derive(Debug)]
pub struct EvalCache {
    slots: Vec<Option<Slot>>,
    next: usize,
}

impl EvalCache {
    pub fn new() -> Self {
        Self {
            slots: vec![None; SLOTS],
            next: 0,
        }
    }

    pub fn probe(&self, pos: &Position) -> Option<i32> {
        self.slots
            .iter()
            .flatten()
            .find(|slot| slot.side_to_move == pos.side_to_move && slot.board == pos.board)
            .map(|slot| slot.score)
    }

    /// Insert or overwrite the next slot in rotation.
    pub fn insert(&mut self, pos: &Position, score: i32) {
        self.slots[self.next % SLOTS] = Some(Slot {
            board: pos.board,
            side_to_move: pos.side_to_move,
            score,
        });
        self.next += 1;
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.next = 0;
    }
}

impl Default for EvalCache {
    fn default() -> Self {
        Self::new()
    }
}
