//! The legality filter: cheap geometric rejections first, the pin-ray
//! filter next, and the self-check simulation last.

use crate::{board::Position, types::*};

impl Position {
    /// Is `mv` legal for the side to move? Composes, in order: bounds
    /// checks, source/destination ownership, per-piece geometry (castling
    /// delegated to its own validation), the pin-ray filter, and a
    /// make/unmake simulation rejecting any move that leaves the mover's
    /// own king in check.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        let mut scratch = self.clone();
        scratch.is_legal_move_mut(mv)
    }

    /// Same as [`Position::is_legal_move`], but uses `self` as the
    /// simulation scratch space and restores it before returning. Move
    /// generation calls this to avoid one clone per candidate.
    pub(crate) fn is_legal_move_mut(&mut self, mv: Move) -> bool {
        if mv.from >= 64 || mv.to >= 64 {
            return false;
        }
        let Some(piece) = self.piece_at(mv.from) else {
            return false;
        };
        if piece.color != self.side_to_move {
            return false;
        }
        if let Some(target) = self.piece_at(mv.to)
            && target.color == piece.color
        {
            return false;
        }

        let geometric = match piece.kind {
            PieceKind::Pawn => self.pawn_move_ok(piece.color, mv),
            PieceKind::Knight => knight_move_ok(mv),
            PieceKind::Bishop => self.bishop_move_ok(mv),
            PieceKind::Rook => self.rook_move_ok(mv),
            PieceKind::Queen => self.bishop_move_ok(mv) || self.rook_move_ok(mv),
            PieceKind::King => self.king_move_ok(piece.color, mv),
        };
        if !geometric {
            return false;
        }

        // A pinned piece may not leave its pin line.
        if let Some(pin) = self.pin_info(mv.from)
            && !mv.along_pin_ray(&pin)
        {
            return false;
        }

        // The move must not leave the mover's own king in check. The
        // promotion piece never changes that, so the simulation resolves
        // with a queen.
        let mover = self.side_to_move;
        let undo = self.make_move(mv, |_, _| Promotion::Queen);
        let exposes_king = self.in_check(mover);
        self.unmake_move(mv, undo);
        !exposes_king
    }

    fn pawn_move_ok(&self, color: Color, mv: Move) -> bool {
        let dir: i8 = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        let start_rank: i8 = match color {
            Color::White => 1,
            Color::Black => 6,
        };
        let ff = file_of(mv.from);
        let fr = rank_of(mv.from);
        let tf = file_of(mv.to);
        let tr = rank_of(mv.to);

        // One step forward onto an empty square.
        if tf == ff && tr == fr + dir && self.piece_at(mv.to).is_none() {
            return true;
        }

        // Two steps from the starting rank through two empty squares.
        if tf == ff && fr == start_rank && tr == fr + 2 * dir {
            return matches!(sq(ff, fr + dir), Some(mid) if self.piece_at(mid).is_none())
                && self.piece_at(mv.to).is_none();
        }

        // One diagonal step onto an enemy piece, or onto the en-passant
        // target square while it is empty.
        if (tf - ff).abs() == 1 && tr == fr + dir {
            if let Some(target) = self.piece_at(mv.to) {
                return target.color != color;
            }
            return self.en_passant == Some(mv.to);
        }
        false
    }

    fn rook_move_ok(&self, mv: Move) -> bool {
        let df = file_of(mv.to) - file_of(mv.from);
        let dr = rank_of(mv.to) - rank_of(mv.from);
        (df == 0) != (dr == 0) && self.ray_clear(mv.from, mv.to)
    }

    fn bishop_move_ok(&self, mv: Move) -> bool {
        let df = file_of(mv.to) - file_of(mv.from);
        let dr = rank_of(mv.to) - rank_of(mv.from);
        df != 0 && df.abs() == dr.abs() && self.ray_clear(mv.from, mv.to)
    }

    fn king_move_ok(&self, color: Color, mv: Move) -> bool {
        let df = file_of(mv.to) - file_of(mv.from);
        let dr = rank_of(mv.to) - rank_of(mv.from);
        if (df != 0 || dr != 0) && df.abs() <= 1 && dr.abs() <= 1 {
            return true;
        }
        if df.abs() == 2 && dr == 0 {
            return self.castling_ok(color, mv);
        }
        false
    }

    /// Castling needs the right still intact, the rook physically at its
    /// origin, an empty corridor, and no attacked square among the king's
    /// start, path, and destination.
    fn castling_ok(&self, color: Color, mv: Move) -> bool {
        let home_rank: i8 = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        if rank_of(mv.from) != home_rank || file_of(mv.from) != 4 {
            return false;
        }
        let kingside = file_of(mv.to) > file_of(mv.from);
        let allowed = match (color, kingside) {
            (Color::White, true) => self.castling.wk,
            (Color::White, false) => self.castling.wq,
            (Color::Black, true) => self.castling.bk,
            (Color::Black, false) => self.castling.bq,
        };
        if !allowed {
            return false;
        }

        let rook_file: i8 = if kingside { 7 } else { 0 };
        let Some(rook_sq) = sq(rook_file, home_rank) else {
            return false;
        };
        let rook_present = matches!(
            self.piece_at(rook_sq),
            Some(p) if p.color == color && p.kind == PieceKind::Rook
        );
        if !rook_present {
            return false;
        }

        // Squares strictly between king and rook must be empty.
        let step: i8 = if kingside { 1 } else { -1 };
        let mut f = file_of(mv.from) + step;
        while f != rook_file {
            if let Some(s) = sq(f, home_rank)
                && self.piece_at(s).is_some()
            {
                return false;
            }
            f += step;
        }

        // The king may not start in, pass through, or land in check.
        let enemy = color.other();
        let mut f = file_of(mv.from);
        loop {
            if let Some(s) = sq(f, home_rank)
                && self.is_square_attacked(s, enemy)
            {
                return false;
            }
            if f == file_of(mv.to) {
                break;
            }
            f += step;
        }
        true
    }
}

fn knight_move_ok(mv: Move) -> bool {
    let df = (file_of(mv.to) - file_of(mv.from)).abs();
    let dr = (rank_of(mv.to) - rank_of(mv.from)).abs();
    (df == 1 && dr == 2) || (df == 2 && dr == 1)
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
