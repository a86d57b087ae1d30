//! Forsyth-Edwards Notation: the board serialization boundary.
//!
//! Six space-separated fields: piece placement (eight `/`-separated ranks,
//! digits for runs of empty squares, `PNBRQK` white / lowercase black),
//! side to move, castling availability, en-passant target, halfmove clock,
//! fullmove number. `from_fen` and `to_fen` round-trip exactly; malformed
//! input is rejected without producing a partial position.

use thiserror::Error;

use crate::board::{CastlingRights, Position};
use crate::types::*;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error("board field must contain 8 ranks, found {0}")]
    BadRankCount(usize),
    #[error("rank {0} does not describe exactly 8 files")]
    BadRankWidth(usize),
    #[error("invalid piece character {0:?}")]
    BadPieceChar(char),
    #[error("invalid side to move {0:?}")]
    BadSideToMove(String),
    #[error("invalid castling character {0:?}")]
    BadCastling(char),
    #[error("invalid en-passant target {0:?}")]
    BadEnPassant(String),
    #[error("invalid halfmove clock {0:?}")]
    BadHalfmoveClock(String),
    #[error("invalid fullmove number {0:?}")]
    BadFullmoveNumber(String),
}

impl Position {
    /// Parse a FEN string. The two counters may be omitted (they default to
    /// 0 and 1), which several published test positions rely on.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(FenError::BadPieceChar(ch)),
                    };
                    let Some(square) = sq(file, rank) else {
                        return Err(FenError::BadRankWidth(8 - rank_idx));
                    };
                    board[square as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankWidth(8 - rank_idx));
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth(8 - rank_idx));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        };
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::BadCastling(c)),
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            match coord_to_sq(parts[3]) {
                Some(s) => Some(s),
                None => return Err(FenError::BadEnPassant(parts[3].to_string())),
            }
        };

        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| FenError::BadHalfmoveClock(halfmove_part.to_string()))?;

        let fullmove_part = parts.get(5).copied().unwrap_or("1");
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| FenError::BadFullmoveNumber(fullmove_part.to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Serialize the position to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();

        for rank in (0..8i8).rev() {
            let mut empties = 0;
            for file in 0..8i8 {
                let square = sq(file, rank).expect("rank and file are in range");
                match self.piece_at(square) {
                    Some(pc) => {
                        if empties > 0 {
                            out.push(char::from_digit(empties, 10).expect("at most 8 empties"));
                            empties = 0;
                        }
                        out.push(piece_char(pc));
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                out.push(char::from_digit(empties, 10).expect("at most 8 empties"));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling.wk || self.castling.wq || self.castling.bk || self.castling.bq {
            if self.castling.wk {
                out.push('K');
            }
            if self.castling.wq {
                out.push('Q');
            }
            if self.castling.bk {
                out.push('k');
            }
            if self.castling.bq {
                out.push('q');
            }
        } else {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(s) => out.push_str(&sq_to_coord(s)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

fn piece_char(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
