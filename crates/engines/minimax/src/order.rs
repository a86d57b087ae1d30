//! Move ordering heuristics.
//!
//! Ordering affects only how quickly alpha-beta prunes, never which moves
//! exist; the generators below return every legal move of their class.

use std::cmp::Reverse;

use chesskit_core::{
    capture_moves_into, file_of, legal_moves_into, rank_of, Move, Position, Promotion,
};

use crate::eval::piece_value;

/// Any legal reply to a check resolves it, so the whole batch outranks
/// quiet positional scores.
const CHECK_ESCAPE_BONUS: i32 = 10_000;
const GIVES_CHECK_BONUS: i32 = 50;
const UNDER_ATTACK_BONUS: i32 = 20;
const CENTER_BONUS: i32 = 10;

/// All legal moves for the side to move with ordering scores, best first.
pub fn scored_moves(pos: &mut Position) -> Vec<(Move, i32)> {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    score_and_sort(pos, moves)
}

/// The capture subset, ordered the same way, for quiescence.
pub fn scored_captures(pos: &mut Position) -> Vec<(Move, i32)> {
    let mut moves = Vec::with_capacity(16);
    capture_moves_into(pos, &mut moves);
    score_and_sort(pos, moves)
}

fn score_and_sort(pos: &mut Position, moves: Vec<Move>) -> Vec<(Move, i32)> {
    let escaping_check = pos.in_check(pos.side_to_move);
    let mut scored: Vec<(Move, i32)> = moves
        .into_iter()
        .map(|mv| (mv, score_move(pos, mv, escaping_check)))
        .collect();
    scored.sort_by_key(|&(_, score)| Reverse(score));
    scored
}

fn score_move(pos: &mut Position, mv: Move, escaping_check: bool) -> i32 {
    let mut score = 0;

    // MVV-LVA: prefer grabbing the most valuable victim with the least
    // valuable attacker.
    if let (Some(attacker), Some(victim)) = (pos.piece_at(mv.from), pos.piece_at(mv.to)) {
        score += piece_value(victim.kind) - piece_value(attacker.kind) / 10;
    }

    if escaping_check {
        score += CHECK_ESCAPE_BONUS;
    }
    if pos.is_piece_attacked(mv.from) {
        score += UNDER_ATTACK_BONUS;
    }
    if is_central(mv.to) {
        score += CENTER_BONUS;
    }

    // Play the move to see whether it checks the opponent.
    let defender = pos.side_to_move.other();
    let undo = pos.make_move(mv, |_, _| Promotion::Queen);
    if pos.in_check(defender) {
        score += GIVES_CHECK_BONUS;
    }
    pos.unmake_move(mv, undo);

    score
}

fn is_central(square: u8) -> bool {
    (3..=4).contains(&file_of(square)) && (3..=4).contains(&rank_of(square))
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod order_tests;
