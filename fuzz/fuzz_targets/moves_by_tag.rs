#![no_main]

use chessmoves::{movegen, Board};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (piece, from) = input;
    let board = Board::new();
    let moves = movegen::moves_by_tag(piece, from, &board);
    match (piece.parse(), from.parse()) {
        (Ok(piece), Ok(from)) => assert_eq!(moves, movegen::moves(piece, from, &board)),
        _ => assert!(moves.is_empty()),
    }
});
