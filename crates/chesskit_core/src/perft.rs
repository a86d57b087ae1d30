use crate::{board::Position, movegen::legal_moves_into, types::*};

/// Count the leaf nodes of the legal-move tree to `depth`.
///
/// Uses one move buffer per remaining ply so the recursion allocates only
/// once up front. Note that a promotion is a single move here (the piece
/// choice arrives out-of-band), so expected values for promotion-heavy
/// positions differ from classical perft tables that count four.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    walk(pos, &mut layers)
}

fn walk(pos: &mut Position, layers: &mut [Vec<Move>]) -> u64 {
    let (buf, deeper) = layers
        .split_first_mut()
        .expect("perft walk requires one buffer per remaining ply");
    legal_moves_into(pos, buf);
    if deeper.is_empty() {
        return buf.len() as u64;
    }

    let moves = std::mem::take(buf);
    let mut nodes = 0u64;
    for &mv in &moves {
        let undo = pos.make_move(mv, |_, _| Promotion::Queen);
        nodes += walk(pos, deeper);
        pos.unmake_move(mv, undo);
    }
    *buf = moves; // hand the buffer back for the next sibling at this ply
    nodes
}
