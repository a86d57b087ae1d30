//! Attack and pin analysis.
//!
//! Everything here is pure piece geometry over the current occupancy. None
//! of these queries consult the legality filter; layering runs strictly
//! geometry -> attack -> check/pin -> legality -> generation -> search.

use crate::{board::Position, types::*};

/// A pin that restricts a piece to one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinInfo {
    /// Unit vector (file, rank) from the pinned piece toward its own king.
    pub direction: (i8, i8),
    /// Square of the enemy slider enforcing the pin.
    pub pinner: u8,
}

impl Position {
    /// Does the piece on `from` attack `to` under its movement geometry
    /// alone? Pawns attack diagonally whether or not the target is
    /// occupied; sliders need a clear path; knights and kings use fixed
    /// offsets.
    pub fn attacks_square(&self, from: u8, to: u8) -> bool {
        if from == to {
            return false;
        }
        let Some(pc) = self.piece_at(from) else {
            return false;
        };
        let df = file_of(to) - file_of(from);
        let dr = rank_of(to) - rank_of(from);
        match pc.kind {
            PieceKind::Pawn => {
                let fwd: i8 = match pc.color {
                    Color::White => 1,
                    Color::Black => -1,
                };
                dr == fwd && df.abs() == 1
            }
            PieceKind::Knight => {
                (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1)
            }
            PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
            PieceKind::Bishop => df.abs() == dr.abs() && self.ray_clear(from, to),
            PieceKind::Rook => (df == 0 || dr == 0) && self.ray_clear(from, to),
            PieceKind::Queen => {
                (df == 0 || dr == 0 || df.abs() == dr.abs()) && self.ray_clear(from, to)
            }
        }
    }

    /// Every square strictly between `from` and `to` is empty. Callers
    /// guarantee the squares share a rank, file, or diagonal.
    pub(crate) fn ray_clear(&self, from: u8, to: u8) -> bool {
        let step_f = (file_of(to) - file_of(from)).signum();
        let step_r = (rank_of(to) - rank_of(from)).signum();
        let mut f = file_of(from) + step_f;
        let mut r = rank_of(from) + step_r;
        while let Some(s) = sq(f, r) {
            if s == to {
                return true;
            }
            if self.piece_at(s).is_some() {
                return false;
            }
            f += step_f;
            r += step_r;
        }
        false
    }

    /// Any piece of `by` attacks `target`.
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        for from in 0..64u8 {
            if let Some(pc) = self.piece_at(from)
                && pc.color == by
                && self.attacks_square(from, target)
            {
                return true;
            }
        }
        false
    }

    pub fn in_check(&self, color: Color) -> bool {
        let ksq = self.king_square(color);
        self.is_square_attacked(ksq, color.other())
    }

    /// The piece on `square` stands attacked by the other side. Empty
    /// squares are never "attacked" in this sense.
    pub fn is_piece_attacked(&self, square: u8) -> bool {
        match self.piece_at(square) {
            Some(pc) => self.is_square_attacked(square, pc.color.other()),
            None => false,
        }
    }

    /// Walk from the piece on `square` toward its own king. If the ray to
    /// the king is clear and the first occupied square on the far side of
    /// the king holds an enemy slider able to attack along that ray, the
    /// piece is pinned to the line. A piece has at most one pin.
    pub fn pin_info(&self, square: u8) -> Option<PinInfo> {
        let pc = self.piece_at(square)?;
        if pc.kind == PieceKind::King {
            return None;
        }
        let ksq = self.king_square(pc.color);
        let df = file_of(ksq) - file_of(square);
        let dr = rank_of(ksq) - rank_of(square);
        if !(df == 0 || dr == 0 || df.abs() == dr.abs()) {
            return None;
        }
        let step = (df.signum(), dr.signum());
        if !self.ray_clear(square, ksq) {
            return None;
        }
        let mut f = file_of(ksq) + step.0;
        let mut r = rank_of(ksq) + step.1;
        while let Some(s) = sq(f, r) {
            if let Some(other) = self.piece_at(s) {
                if other.color != pc.color && slides_along(other.kind, step) {
                    return Some(PinInfo {
                        direction: step,
                        pinner: s,
                    });
                }
                return None;
            }
            f += step.0;
            r += step.1;
        }
        None
    }
}

/// Whether `kind` is a slider that can attack along the given unit
/// direction.
fn slides_along(kind: PieceKind, dir: (i8, i8)) -> bool {
    let diagonal = dir.0 != 0 && dir.1 != 0;
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        _ => false,
    }
}

impl Move {
    /// A pinned piece may only slide along the pin line, toward or away
    /// from the pinning piece; any move off the line is rejected.
    pub fn along_pin_ray(&self, pin: &PinInfo) -> bool {
        let df = (file_of(self.to) - file_of(self.from)).signum();
        let dr = (rank_of(self.to) - rank_of(self.from)).signum();
        (df, dr) == pin.direction || (df, dr) == (-pin.direction.0, -pin.direction.1)
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
