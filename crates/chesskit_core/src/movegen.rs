use crate::{board::Position, types::*};

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only
/// once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. Every (from, to) pair whose source holds a side-to-move piece is
/// run through the legality filter; completeness is a hard requirement, so
/// nothing is skipped ahead of that filter.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from) else { continue };
        if pc.color != pos.side_to_move {
            continue;
        }
        for to in 0..64u8 {
            let mv = Move::new(from, to);
            if pos.is_legal_move_mut(mv) {
                out.push(mv);
            }
        }
    }
}

/// The quiescence subset: legal moves whose destination holds an enemy
/// piece. En-passant captures land on an empty square and are deliberately
/// not part of this set.
pub fn capture_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    let side = pos.side_to_move;
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from) else { continue };
        if pc.color != side {
            continue;
        }
        for to in 0..64u8 {
            if !matches!(pos.piece_at(to), Some(t) if t.color != side) {
                continue;
            }
            let mv = Move::new(from, to);
            if pos.is_legal_move_mut(mv) {
                out.push(mv);
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
