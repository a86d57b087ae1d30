use super::*;
use crate::movegen::legal_moves;

fn queen_resolver(_: Color, _: u8) -> Promotion {
    Promotion::Queen
}

#[test]
fn test_make_unmake_round_trip() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2",
    ];
    for fen in fens {
        let original = Position::from_fen(fen).unwrap();
        let mut pos = original.clone();
        let mover = pos.side_to_move;
        for mv in legal_moves(&original) {
            let undo = pos.make_move(mv, queen_resolver);
            assert!(
                !pos.in_check(mover),
                "legal move {mv} left the mover's king in check in {fen}"
            );
            pos.unmake_move(mv, undo);
            assert_eq!(pos, original, "unmake of {mv} did not restore {fen}");
        }
    }
}

#[test]
fn test_double_push_sets_and_clears_en_passant() {
    let mut pos = Position::startpos();
    pos.make_move(Move::parse("e2e4").unwrap(), queen_resolver);
    assert_eq!(pos.en_passant, coord_to_sq("e3"));

    // Any following move clears the target unless it is a fresh double push.
    pos.make_move(Move::parse("g8f6").unwrap(), queen_resolver);
    assert_eq!(pos.en_passant, None);
}

#[test]
fn test_halfmove_clock_counts_quiet_moves_only() {
    let mut pos = Position::startpos();
    pos.make_move(Move::parse("g1f3").unwrap(), queen_resolver);
    assert_eq!(pos.halfmove_clock, 1);
    pos.make_move(Move::parse("b8c6").unwrap(), queen_resolver);
    assert_eq!(pos.halfmove_clock, 2);
    pos.make_move(Move::parse("e2e4").unwrap(), queen_resolver);
    assert_eq!(pos.halfmove_clock, 0, "pawn move resets the clock");
}

#[test]
fn test_fullmove_number_increments_after_black() {
    let mut pos = Position::startpos();
    pos.make_move(Move::parse("e2e4").unwrap(), queen_resolver);
    assert_eq!(pos.fullmove_number, 1);
    pos.make_move(Move::parse("e7e5").unwrap(), queen_resolver);
    assert_eq!(pos.fullmove_number, 2);
}

#[test]
fn test_castling_relocates_rook_and_unmake_restores() {
    let original = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut pos = original.clone();

    let mv = Move::parse("e1g1").unwrap();
    let undo = pos.make_move(mv, queen_resolver);
    let f1 = coord_to_sq("f1").unwrap();
    let g1 = coord_to_sq("g1").unwrap();
    assert_eq!(
        pos.piece_at(f1),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook
        })
    );
    assert_eq!(
        pos.piece_at(g1),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );
    assert!(!pos.castling.wk && !pos.castling.wq);

    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn test_en_passant_capture_removes_victim_from_its_rank() {
    // White pawn e5, black just played d7d5.
    let original =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3").unwrap();
    let mut pos = original.clone();

    let mv = Move::parse("e5d6").unwrap();
    let undo = pos.make_move(mv, queen_resolver);
    assert_eq!(pos.piece_at(coord_to_sq("d5").unwrap()), None);
    assert_eq!(
        pos.piece_at(coord_to_sq("d6").unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn
        })
    );
    assert_eq!(pos.halfmove_clock, 0);

    pos.unmake_move(mv, undo);
    assert_eq!(pos, original);
}

#[test]
fn test_promotion_consults_the_resolver() {
    let original = Position::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mut pos = original.clone();
    let mut calls = Vec::new();

    let mv = Move::parse("a7a8").unwrap();
    let undo = pos.make_move(mv, |color, square| {
        calls.push((color, square));
        Promotion::Rook
    });
    assert_eq!(calls, vec![(Color::White, coord_to_sq("a8").unwrap())]);
    assert_eq!(
        pos.piece_at(coord_to_sq("a8").unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook
        })
    );

    pos.unmake_move(mv, undo);
    assert_eq!(pos, original, "promotion must revert to the pawn");
}

#[test]
fn test_rook_capture_on_home_square_kills_the_right() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    pos.make_move(Move::parse("a1a8").unwrap(), queen_resolver);
    assert!(!pos.castling.bq, "capturing the a8 rook removes black's queenside right");
    assert!(!pos.castling.wq, "moving the a1 rook removes white's queenside right");
    assert!(pos.castling.bk && pos.castling.wk);
}

#[test]
#[should_panic(expected = "no Black king")]
fn test_missing_king_is_a_fatal_precondition() {
    let pos = Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    pos.king_square(Color::Black);
}
