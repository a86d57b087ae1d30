use super::*;
use crate::movegen::legal_moves;

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

fn legal(pos: &Position, mv: &str) -> bool {
    pos.is_legal_move(Move::parse(mv).unwrap())
}

#[test]
fn test_basic_geometry_from_the_start_position() {
    let pos = Position::startpos();
    assert!(legal(&pos, "e2e4"));
    assert!(legal(&pos, "e2e3"));
    assert!(legal(&pos, "g1f3"), "knights jump over the pawn rank");
    assert!(!legal(&pos, "e2e5"), "pawns advance at most two squares");
    assert!(!legal(&pos, "e2d3"), "no diagonal step without a capture");
    assert!(!legal(&pos, "f1c4"), "the e2 pawn blocks the bishop");
    assert!(!legal(&pos, "a1a3"), "the a2 pawn blocks the rook");
    assert!(!legal(&pos, "d1d2"), "own piece on the destination");
    assert!(!legal(&pos, "e1g1"), "castling through occupied squares");
}

#[test]
fn test_out_of_range_and_wrong_side_moves_are_rejected() {
    let pos = Position::startpos();
    assert!(!pos.is_legal_move(Move::new(64, 0)));
    assert!(!pos.is_legal_move(Move::new(0, 64)));
    assert!(!pos.is_legal_move(Move::new(255, 255)));
    assert!(!legal(&pos, "e7e5"), "it is not black's turn");
    assert!(!legal(&pos, "e4e5"), "empty source square");
}

#[test]
fn test_double_push_needs_both_squares_empty() {
    let pos = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    assert!(!legal(&pos, "e2e4"), "the knight sits on the intermediate square");
    assert!(!legal(&pos, "e2e3"));

    let pos = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    assert!(!legal(&pos, "e2e4"), "the destination itself is occupied");
    assert!(legal(&pos, "e2e3"));
}

#[test]
fn test_en_passant_window_lasts_exactly_one_ply() {
    let mut pos = Position::startpos();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        pos.make_move(Move::parse(mv).unwrap(), |_, _| Promotion::Queen);
    }
    // Black's double push just exposed d6.
    assert_eq!(pos.en_passant, coord_to_sq("d6"));
    assert!(legal(&pos, "e5d6"));

    // Let the chance pass and it is gone for good.
    pos.make_move(Move::parse("a2a3").unwrap(), |_, _| Promotion::Queen);
    pos.make_move(Move::parse("a6a5").unwrap(), |_, _| Promotion::Queen);
    assert!(!legal(&pos, "e5d6"));
}

#[test]
fn test_moves_exposing_the_king_are_rejected() {
    // The e2 knight shields its king from the e3 rook.
    let pos = Position::from_fen("4k3/8/8/8/8/4r3/4N3/4K3 w - - 0 1").unwrap();
    assert!(!legal(&pos, "e2c3"));
    assert!(!legal(&pos, "e2g3"));
    assert!(!legal(&pos, "e2d4"));
    assert!(legal(&pos, "e1d1"), "the king itself may step aside");
    assert!(!legal(&pos, "e1e2"), "own piece on the destination");
}

#[test]
fn test_must_resolve_an_existing_check() {
    let pos =
        Position::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2")
            .unwrap();
    assert!(legal(&pos, "g7g6"), "blocking the queen's diagonal");
    assert!(!legal(&pos, "a7a6"), "unrelated moves leave the king in check");
    assert!(!legal(&pos, "g8f6"));
}

#[test]
fn test_castling_both_directions_with_full_rights() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(legal(&pos, "e1g1"));
    assert!(legal(&pos, "e1c1"));

    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    assert!(legal(&pos, "e8g8"));
    assert!(legal(&pos, "e8c8"));
}

#[test]
fn test_castling_illegal_out_of_through_or_into_check() {
    // In check from e4: neither side castles out of it.
    let pos = Position::from_fen("r3k2r/8/8/8/4r3/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(!legal(&pos, "e1g1"));
    assert!(!legal(&pos, "e1c1"));

    // f1 is covered, so kingside passes through check; queenside is fine.
    let pos = Position::from_fen("r3k2r/8/8/8/5r2/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(!legal(&pos, "e1g1"));
    assert!(legal(&pos, "e1c1"));

    // g1 covered: the king would land in check.
    let pos = Position::from_fen("r3k2r/8/8/8/6r1/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(!legal(&pos, "e1g1"));
}

#[test]
fn test_castling_corridor_rules() {
    // b1 occupied blocks queenside even though the king never crosses b1.
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1").unwrap();
    assert!(!legal(&pos, "e1c1"));
    assert!(legal(&pos, "e1g1"));

    // An attacked-but-empty b1 does not matter: only the king's own squares do.
    let pos = Position::from_fen("r3k2r/8/8/8/1r6/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(legal(&pos, "e1c1"));
}

#[test]
fn test_castling_requires_rights_and_the_rook() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kk - 0 1").unwrap();
    assert!(legal(&pos, "e1g1"));
    assert!(!legal(&pos, "e1c1"), "queenside right already spent");

    // Flags can outlive the rook only in corrupt inputs; the rook check
    // still refuses.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w KQ - 0 1").unwrap();
    assert!(!legal(&pos, "e1g1"));
    assert!(legal(&pos, "e1c1"));
}

#[test]
fn test_rights_are_permanently_lost_after_king_or_rook_moves() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    // Shuffle the king out and back.
    for mv in ["e1d1", "e8d8", "d1e1", "d8e8"] {
        pos.make_move(Move::parse(mv).unwrap(), |_, _| Promotion::Queen);
    }
    assert!(!legal(&pos, "e1g1"));
    assert!(!legal(&pos, "e1c1"));
}

#[test]
fn test_promotion_square_is_a_single_move() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(legal(&pos, "a7a8"));
    let from = at("a7");
    let promotions = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.from == from)
        .count();
    assert_eq!(promotions, 1, "the piece choice is resolved out-of-band");
}
