//! Move generation throughput check for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p chesskit_core

use std::time::Instant;

use chesskit_core::{legal_moves_into, Position};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Sicilian",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Pinned pieces",
        "r1bqkbnr/ppp2ppp/2np4/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4",
    ),
];

const ITERATIONS: usize = 5_000;

fn main() {
    println!("move generation, {ITERATIONS} iterations per position");

    let mut buf = Vec::with_capacity(64);
    for (name, fen) in TEST_POSITIONS {
        let mut pos = Position::from_fen(fen).expect("benchmark FEN parses");

        let start = Instant::now();
        let mut generated = 0usize;
        for _ in 0..ITERATIONS {
            legal_moves_into(&mut pos, &mut buf);
            generated += buf.len();
        }
        let elapsed = start.elapsed();

        let per_call = generated as f64 / ITERATIONS as f64;
        let calls_per_sec = ITERATIONS as f64 / elapsed.as_secs_f64();
        println!("{name:<14} {per_call:>5.1} moves/call  {calls_per_sec:>9.0} calls/sec  ({elapsed:.2?})");
    }
}
