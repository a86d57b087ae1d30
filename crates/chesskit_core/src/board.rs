use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

/// The one mutable entity the engine operates on. Mutated in place by
/// [`Position::make_move`] and restored by [`Position::unmake_move`]; the
/// search never holds more than one of these at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything needed to revert one [`Position::make_move`] call.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Locate the king of `color`.
    ///
    /// Panics if no such king exists: every query above this layer assumes
    /// exactly one king per side, and a board without one is a broken
    /// precondition that must fail loudly rather than read as "not in
    /// check".
    pub fn king_square(&self, color: Color) -> u8 {
        for i in 0..64u8 {
            if let Some(pc) = self.piece_at(i)
                && pc.color == color
                && pc.kind == PieceKind::King
            {
                return i;
            }
        }
        panic!("position invariant violated: no {color:?} king on the board");
    }

    /// Apply a move that has already passed the legality filter, updating
    /// all auxiliary state (castling rook, en-passant victim, promotion,
    /// rights, target square, clocks, side to move). `promote` is the
    /// external resolver consulted only when a pawn reaches its last rank.
    ///
    /// Performs no legality checking of its own.
    pub fn make_move(
        &mut self,
        mv: Move,
        mut promote: impl FnMut(Color, u8) -> Promotion,
    ) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self
            .piece_at(from)
            .expect("make_move: no piece on from-square");

        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        // The target is good for exactly one move; clear it up front and
        // re-set it below only on a fresh double push.
        self.en_passant = None;

        let mut captured = self.piece_at(to);

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        // A king stepping two files is a castle; bring the rook across.
        let mut rook_move = None;
        if moved.kind == PieceKind::King && (file_of(to) - file_of(from)).abs() == 2 {
            let rank = rank_of(from);
            let (rook_from_file, rook_to_file) = if file_of(to) > file_of(from) {
                (7, file_of(to) - 1)
            } else {
                (0, file_of(to) + 1)
            };
            if let Some(rf) = sq(rook_from_file, rank)
                && let Some(rt) = sq(rook_to_file, rank)
                && let Some(rook) = self.piece_at(rf)
            {
                self.set_piece(rf, None);
                self.set_piece(rt, Some(rook));
                rook_move = Some((rf, rt));
            }
        }

        // A pawn landing diagonally on the recorded target captures the
        // pawn one rank behind the destination.
        let mut ep_captured_sq = None;
        if moved.kind == PieceKind::Pawn
            && prev_ep == Some(to)
            && captured.is_none()
            && file_of(from) != file_of(to)
            && let Some(cs) = sq(file_of(to), rank_of(from))
        {
            captured = self.piece_at(cs);
            self.set_piece(cs, None);
            ep_captured_sq = Some(cs);
        }

        // Promotion: the resolver supplies the replacement piece.
        let last_rank: i8 = match moved.color {
            Color::White => 7,
            Color::Black => 0,
        };
        if moved.kind == PieceKind::Pawn && rank_of(to) == last_rank {
            let choice = promote(moved.color, to);
            self.set_piece(
                to,
                Some(Piece {
                    color: moved.color,
                    kind: choice.kind(),
                }),
            );
        }

        // Rights are lost for good once the king or the relevant rook
        // leaves its origin square.
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }
        // A capture landing on a rook home square also kills the right.
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            match cp.color {
                Color::White => {
                    if to == 0 {
                        self.castling.wq = false;
                    }
                    if to == 7 {
                        self.castling.wk = false;
                    }
                }
                Color::Black => {
                    if to == 56 {
                        self.castling.bq = false;
                    }
                    if to == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }

        // A double pawn push exposes the square it passed over.
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        let reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();
        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    /// Mechanically revert the matching [`Position::make_move`] call.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let from = mv.from;
        let to = mv.to;

        // Send the castling rook home first.
        if let Some((rf, rt)) = undo.rook_move
            && let Some(rook) = self.piece_at(rt)
        {
            self.set_piece(rt, None);
            self.set_piece(rf, Some(rook));
        }

        // A promoted piece reverts to the pawn that reached the last rank.
        let restored = if undo.moved_piece.kind == PieceKind::Pawn {
            Piece {
                color: undo.moved_piece.color,
                kind: PieceKind::Pawn,
            }
        } else {
            undo.moved_piece
        };
        self.set_piece(to, None);
        self.set_piece(from, Some(restored));

        // Put the captured piece back where it actually stood.
        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(to, undo.captured),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
