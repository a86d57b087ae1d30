//! Terminal-state detection: checkmate, stalemate, and the draw rules the
//! engine recognizes (fifty-move rule and insufficient material).

use crate::{board::Position, movegen::legal_moves, types::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    FiftyMoves,
    InsufficientMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl Position {
    /// The side to move is in check and has no legal reply.
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    /// The side to move is not in check and has no legal reply.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    /// Fifty full moves by each side without a pawn move or capture.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Dead positions: K vs K, K+minor vs K, and K+B vs K+B with both
    /// bishops on the same square shade. Any pawn, rook, or queen on the
    /// board is always enough material.
    pub fn is_insufficient_material(&self) -> bool {
        let mut bishops: Vec<(Color, u8)> = Vec::new();
        let mut knight_count = 0usize;
        for s in 0..64u8 {
            let Some(pc) = self.piece_at(s) else { continue };
            match pc.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Bishop => bishops.push((pc.color, s)),
                PieceKind::Knight => knight_count += 1,
                PieceKind::King => {}
            }
        }
        match bishops.len() + knight_count {
            0 | 1 => true,
            2 => {
                // With two minors only the opposed same-shade bishop ending
                // is dead; two knights or a bishop pair can still mate.
                bishops.len() == 2
                    && bishops[0].0 != bishops[1].0
                    && square_shade(bishops[0].1) == square_shade(bishops[1].1)
            }
            _ => false,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_insufficient_material()
    }

    /// Classify the position for a caller deciding whether the game is
    /// over. Draw rules are checked first; otherwise an empty move list
    /// means mate or stalemate depending on check.
    pub fn status(&self) -> GameStatus {
        if self.is_fifty_move_draw() {
            return GameStatus::Draw(DrawReason::FiftyMoves);
        }
        if self.is_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if legal_moves(self).is_empty() {
            if self.in_check(self.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.side_to_move.other(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else {
            GameStatus::InProgress
        }
    }
}

fn square_shade(sq: u8) -> i8 {
    (file_of(sq) + rank_of(sq)) % 2
}
