use chessmoves::{
    board::PlayError, movegen, Bitboard, Board, CaptureMode, Color, Piece, Role, Square,
};

fn pieces() -> impl Iterator<Item = Piece> {
    Color::ALL
        .into_iter()
        .flat_map(|color| Role::ALL.into_iter().map(move |role| role.of(color)))
}

fn boards() -> [Board; 3] {
    let mut crowded = Board::new();
    crowded.play_unchecked(Square::E2, Square::E4);
    crowded.play_unchecked(Square::D7, Square::D5);
    crowded.play_unchecked(Square::G1, Square::F3);
    crowded.play_unchecked(Square::D8, Square::D6);
    [Board::empty(), Board::new(), crowded]
}

fn coords(sq: Square) -> (i32, i32) {
    (sq.file() as i32, sq.rank() as i32)
}

fn on_board(file: i32, rank: i32) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

#[test]
fn test_destinations_are_distinct_and_exclude_origin() {
    for board in boards() {
        for piece in pieces() {
            for sq in Square::ALL {
                let moves = movegen::moves(piece, sq, &board);
                let set: Bitboard = moves.iter().collect();
                assert_eq!(set.count(), moves.len(), "{piece} on {sq}");
                assert!(!set.contains(sq), "{piece} on {sq}");
            }
        }
    }
}

#[test]
fn test_generation_is_pure() {
    for board in boards() {
        let before = board.clone();
        for piece in pieces() {
            for sq in Square::ALL {
                let first = movegen::moves(piece, sq, &board);
                let second = movegen::moves(piece, sq, &board);
                assert_eq!(first, second, "{piece} on {sq}");
            }
        }
        assert_eq!(board, before);
    }
}

#[test]
fn test_queen_is_union_of_rook_and_bishop() {
    for board in boards() {
        for color in Color::ALL {
            for sq in Square::ALL {
                let rook: Bitboard = movegen::moves(color.rook(), sq, &board).iter().collect();
                let bishop: Bitboard = movegen::moves(color.bishop(), sq, &board)
                    .iter()
                    .collect();
                let queen: Bitboard = movegen::moves(color.queen(), sq, &board).iter().collect();
                assert!(rook.is_disjoint(bishop));
                assert_eq!(queen, rook | bishop, "{color} queen on {sq}");
            }
        }
    }
}

#[test]
fn test_non_pawns_never_land_on_occupied_squares() {
    for board in boards() {
        for piece in pieces().filter(|piece| piece.role != Role::Pawn) {
            for sq in Square::ALL {
                let moves: Bitboard = movegen::moves(piece, sq, &board).iter().collect();
                assert!(moves.is_disjoint(board.occupied()), "{piece} on {sq}");
            }
        }
    }
}

#[test]
fn test_pawn_diagonals_need_an_occupant() {
    for board in boards() {
        for color in Color::ALL {
            for sq in Square::ALL {
                for to in movegen::moves(color.pawn(), sq, &board) {
                    if to.file() != sq.file() {
                        assert!(board.is_occupied(to), "{color} pawn {sq} to {to}");
                    } else {
                        assert!(!board.is_occupied(to), "{color} pawn {sq} to {to}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_empty_board_counts() {
    let board = Board::empty();
    for sq in Square::ALL {
        let (file, rank) = coords(sq);

        let rook = movegen::moves(Color::White.rook(), sq, &board).len();
        assert_eq!(rook, 14);

        let bishop = movegen::moves(Color::White.bishop(), sq, &board).len();
        let diagonal = |df: i32, dr: i32| {
            (1..8)
                .take_while(|n| on_board(file + n * df, rank + n * dr))
                .count()
        };
        assert_eq!(
            bishop,
            diagonal(1, 1) + diagonal(1, -1) + diagonal(-1, 1) + diagonal(-1, -1),
            "bishop on {sq}"
        );

        let queen = movegen::moves(Color::Black.queen(), sq, &board).len();
        assert_eq!(queen, rook + bishop);

        let knight = movegen::moves(Color::White.knight(), sq, &board).len();
        let knight_targets = [(1, 2), (2, 1)]
            .into_iter()
            .flat_map(|(a, b)| [(a, b), (a, -b), (-a, b), (-a, -b)])
            .filter(|(df, dr)| on_board(file + df, rank + dr))
            .count();
        assert_eq!(knight, knight_targets, "knight on {sq}");

        let king = movegen::moves(Color::Black.king(), sq, &board).len();
        let king_targets = Square::ALL
            .into_iter()
            .filter(|&other| other != sq && other.distance(sq) == 1)
            .count();
        assert_eq!(king, king_targets, "king on {sq}");
    }
}

#[test]
fn test_pawn_double_step_only_from_pawn_rank() {
    let board = Board::empty();
    for color in Color::ALL {
        for sq in Square::ALL {
            let moves = movegen::moves(color.pawn(), sq, &board);
            let expected = if sq.rank() == color.pawn_rank() {
                2
            } else if sq.offset(0, color.forward()).is_some() {
                1
            } else {
                0
            };
            assert_eq!(moves.len(), expected, "{color} pawn on {sq}");
        }
    }
}

#[test]
fn test_opponent_mode_extends_blocked_mode() {
    for board in boards() {
        for piece in pieces().filter(|piece| piece.role != Role::Pawn) {
            for sq in Square::ALL {
                let blocked: Bitboard = movegen::moves(piece, sq, &board).iter().collect();
                let opponent: Bitboard =
                    movegen::moves_with(CaptureMode::Opponent, piece, sq, &board)
                        .iter()
                        .collect();
                assert!(blocked.is_subset(opponent), "{piece} on {sq}");

                let captures = opponent & !blocked;
                assert!(
                    captures.is_subset(board.by_color(!piece.color)),
                    "{piece} on {sq}"
                );
            }
        }
    }
}

#[test]
fn test_play_agrees_with_movegen() {
    for board in boards() {
        for occupant in &board {
            let moves: Bitboard = movegen::moves(occupant.piece, occupant.square, &board)
                .iter()
                .collect();
            for to in Square::ALL {
                match board.play(occupant.square, to) {
                    Ok(after) => {
                        assert!(moves.contains(to));
                        assert_eq!(after.piece_at(to), Some(occupant.piece));
                        assert_eq!(after.piece_at(occupant.square), None);
                    }
                    Err(err) => {
                        assert!(!moves.contains(to));
                        assert_eq!(
                            err,
                            PlayError::IllegalDestination {
                                from: occupant.square,
                                to
                            }
                        );
                    }
                }
            }
        }
    }

    assert_eq!(
        Board::new().play(Square::E4, Square::E5),
        Err(PlayError::EmptySquare(Square::E4))
    );
}
