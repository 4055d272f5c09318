#![no_main]

use arbitrary::Arbitrary;
use chessmoves::{movegen, Bitboard, Board, CaptureMode, Piece, Role, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    board: Board,
    piece: Piece,
    from: Square,
    opponent: bool,
}

fuzz_target!(|data: Data| {
    let mode = if data.opponent {
        CaptureMode::Opponent
    } else {
        CaptureMode::Blocked
    };

    let before = data.board.clone();
    let moves = movegen::moves_with(mode, data.piece, data.from, &data.board);
    assert_eq!(data.board, before);
    assert_eq!(
        moves,
        movegen::moves_with(mode, data.piece, data.from, &data.board)
    );

    let set: Bitboard = moves.iter().collect();
    assert_eq!(set.count(), moves.len());
    assert!(!set.contains(data.from));

    if data.piece.role == Role::Queen {
        let rook: Bitboard =
            movegen::moves_with(mode, Role::Rook.of(data.piece.color), data.from, &data.board)
                .iter()
                .collect();
        let bishop: Bitboard =
            movegen::moves_with(mode, Role::Bishop.of(data.piece.color), data.from, &data.board)
                .iter()
                .collect();
        assert_eq!(set, rook | bishop);
    }

    for to in Square::ALL {
        let played = data.board.play_with(mode, data.from, to);
        if data.board.piece_at(data.from) == Some(data.piece) {
            assert_eq!(played.is_ok(), set.contains(to));
        }
    }
});
