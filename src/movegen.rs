// This file is part of the chessmoves library.
// Copyright (C) 2026 The chessmoves developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Destination squares of a piece.
//!
//! The rules are simplified: there is no notion of check, castling, en
//! passant, promotion or side to move. By default ([`CaptureMode::Blocked`])
//! every occupied square blocks, whatever the color of the occupant, and
//! only pawns step onto occupied squares (diagonally).
//!
//! # Examples
//!
//! ```
//! use chessmoves::{movegen, Bitboard, Board, Color, Square};
//!
//! let mut board = Board::empty();
//! board.set_piece_at(Square::D5, Color::Black.pawn());
//! board.set_piece_at(Square::F5, Color::Black.pawn());
//!
//! let moves = movegen::moves(Color::White.pawn(), Square::E4, &board);
//! assert_eq!(
//!     Bitboard::from_iter(&moves),
//!     Bitboard::from_iter([Square::E5, Square::D5, Square::F5])
//! );
//!
//! // Sliders stop in front of the first occupied square.
//! let moves = movegen::moves(Color::White.rook(), Square::D1, &board);
//! assert!(moves.contains(&Square::D4));
//! assert!(!moves.contains(&Square::D5));
//! ```

use arrayvec::ArrayVec;

use crate::{
    board::Board,
    color::Color,
    role::ByRole,
    square::Square,
    types::{CaptureMode, Piece},
};

/// Destination squares in generation order.
///
/// A queen in the middle of an empty board reaches 27 squares, more than
/// any other piece.
pub type MoveList = ArrayVec<Square, 32>;

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// Rook directions first, then bishop directions. The two sets are
// disjoint, so no destination is generated twice.
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

/// A movement rule of one piece type.
trait MoveRule: Sync {
    /// Appends the destinations of a piece of color `color` standing on
    /// `from` to `moves`.
    fn generate(
        &self,
        mode: CaptureMode,
        color: Color,
        from: Square,
        board: &Board,
        moves: &mut MoveList,
    );
}

/// Steps once forward, twice from the pawn rank, and diagonally forward
/// onto occupied squares.
struct Pawn;

impl MoveRule for Pawn {
    fn generate(
        &self,
        mode: CaptureMode,
        color: Color,
        from: Square,
        board: &Board,
        moves: &mut MoveList,
    ) {
        let forward = color.forward();

        if let Some(single) = from.offset(0, forward) {
            if !board.is_occupied(single) {
                moves.push(single);

                // Only reachable if the square passed over is free.
                if from.rank() == color.pawn_rank() {
                    if let Some(double) = from.offset(0, 2 * forward) {
                        if !board.is_occupied(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(to) = from.offset(file_delta, forward) else {
                continue;
            };
            if let Some(occupant) = board.color_at(to) {
                if mode.can_pawn_capture(color, occupant) {
                    moves.push(to);
                }
            }
        }
    }
}

/// Jumps by fixed offsets, landing only on squares that are not blocked.
struct Leaper {
    deltas: &'static [(i32, i32)],
}

impl MoveRule for Leaper {
    fn generate(
        &self,
        mode: CaptureMode,
        color: Color,
        from: Square,
        board: &Board,
        moves: &mut MoveList,
    ) {
        for &(file_delta, rank_delta) in self.deltas {
            let Some(to) = from.offset(file_delta, rank_delta) else {
                continue;
            };
            match board.color_at(to) {
                None => moves.push(to),
                Some(occupant) if mode.can_capture(color, occupant) => moves.push(to),
                Some(_) => (),
            }
        }
    }
}

/// Moves any number of squares along each direction.
///
/// Each ray continues while the next square is on the board and empty,
/// appending every square. It stops at the edge or at the first occupied
/// square, which is appended only if the mode allows capturing it.
struct Slider {
    directions: &'static [(i32, i32)],
}

impl MoveRule for Slider {
    fn generate(
        &self,
        mode: CaptureMode,
        color: Color,
        from: Square,
        board: &Board,
        moves: &mut MoveList,
    ) {
        for &(file_delta, rank_delta) in self.directions {
            let mut sq = from;
            while let Some(to) = sq.offset(file_delta, rank_delta) {
                match board.color_at(to) {
                    None => moves.push(to),
                    Some(occupant) => {
                        if mode.can_capture(color, occupant) {
                            moves.push(to);
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
    }
}

static PAWN: Pawn = Pawn;
static KNIGHT: Leaper = Leaper {
    deltas: &KNIGHT_DELTAS,
};
static BISHOP: Slider = Slider {
    directions: &BISHOP_DIRECTIONS,
};
static ROOK: Slider = Slider {
    directions: &ROOK_DIRECTIONS,
};
static QUEEN: Slider = Slider {
    directions: &QUEEN_DIRECTIONS,
};
static KING: Leaper = Leaper {
    deltas: &KING_DELTAS,
};

static RULES: ByRole<&'static dyn MoveRule> = ByRole {
    pawn: &PAWN,
    knight: &KNIGHT,
    bishop: &BISHOP,
    rook: &ROOK,
    queen: &QUEEN,
    king: &KING,
};

/// Gets the destinations of `piece` standing on `from`, under
/// [`CaptureMode::Blocked`].
///
/// The board may or may not hold `piece` on `from`; the origin square is
/// never looked at. The result contains only squares on the board, in a
/// deterministic order, without duplicates.
///
/// # Examples
///
/// ```
/// use chessmoves::{movegen, Board, Color, Square};
///
/// let board = Board::new();
/// let moves = movegen::moves(Color::White.knight(), Square::G1, &board);
/// assert_eq!(moves.len(), 2);
/// assert!(moves.contains(&Square::F3));
/// assert!(moves.contains(&Square::H3));
/// ```
pub fn moves(piece: Piece, from: Square, board: &Board) -> MoveList {
    moves_with(CaptureMode::Blocked, piece, from, board)
}

/// Gets the destinations of `piece` standing on `from`, treating occupied
/// squares according to `mode`.
pub fn moves_with(mode: CaptureMode, piece: Piece, from: Square, board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    RULES
        .get(piece.role)
        .generate(mode, piece.color, from, board, &mut moves);
    log::trace!(
        "{piece} on {from} ({mode:?}): {} destinations",
        moves.len()
    );
    moves
}

/// Gets the destinations of a piece given by its tag, like `pawn_white`,
/// standing on a square given by its name, like `e2`.
///
/// Unknown piece tags and malformed square names yield no destinations.
///
/// # Examples
///
/// ```
/// use chessmoves::{movegen, Board, Square};
///
/// let board = Board::new();
/// let moves = movegen::moves_by_tag("pawn_white", "e2", &board);
/// assert_eq!(moves.as_slice(), [Square::E3, Square::E4]);
///
/// assert!(movegen::moves_by_tag("dragon_white", "e2", &board).is_empty());
/// assert!(movegen::moves_by_tag("pawn_white", "e9", &board).is_empty());
/// ```
pub fn moves_by_tag(piece: &str, from: &str, board: &Board) -> MoveList {
    match (piece.parse::<Piece>(), from.parse::<Square>()) {
        (Ok(piece), Ok(from)) => moves(piece, from, board),
        (piece_result, square_result) => {
            log::debug!(
                "no destinations for {piece:?} on {from:?}: {:?} {:?}",
                piece_result.err(),
                square_result.err()
            );
            MoveList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bitboard::Bitboard, role::Role};

    fn set(squares: &[Square]) -> Bitboard {
        squares.iter().collect()
    }

    fn board_with(squares: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in squares {
            board.set_piece_at(sq, piece);
        }
        board
    }

    #[test]
    fn test_knight() {
        let empty = Board::empty();
        let knight = Color::White.knight();
        assert_eq!(moves(knight, Square::D4, &empty).len(), 8);
        assert_eq!(
            set(&moves(knight, Square::A1, &empty)),
            set(&[Square::B3, Square::C2])
        );
    }

    #[test]
    fn test_knight_blocked_by_any_color() {
        let board = board_with(&[
            (Square::E6, Color::White.pawn()),
            (Square::F5, Color::Black.pawn()),
        ]);
        let moves = moves(Color::White.knight(), Square::D4, &board);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Square::E6));
        assert!(!moves.contains(&Square::F5));
    }

    #[test]
    fn test_king() {
        let empty = Board::empty();
        let king = Color::Black.king();
        assert_eq!(moves(king, Square::D4, &empty).len(), 8);
        assert_eq!(
            set(&moves(king, Square::A1, &empty)),
            set(&[Square::A2, Square::B1, Square::B2])
        );
        assert_eq!(moves(king, Square::E1, &Board::new()).len(), 0);
    }

    #[test]
    fn test_rook() {
        let empty = Board::empty();
        assert_eq!(moves(Color::White.rook(), Square::D4, &empty).len(), 14);

        let board = board_with(&[(Square::D6, Color::Black.pawn())]);
        let moves = set(&moves(Color::White.rook(), Square::D4, &board));
        assert!(moves.contains(Square::D5));
        assert!(!moves.contains(Square::D6));
        assert!(!moves.contains(Square::D7));
        assert!(!moves.contains(Square::D8));
        assert_eq!(moves.count(), 11);
    }

    #[test]
    fn test_bishop() {
        let empty = Board::empty();
        assert_eq!(moves(Color::White.bishop(), Square::D4, &empty).len(), 13);
        assert_eq!(moves(Color::White.bishop(), Square::A1, &empty).len(), 7);
        assert_eq!(moves(Color::Black.bishop(), Square::C8, &Board::new()).len(), 0);
    }

    #[test]
    fn test_queen_is_rook_and_bishop() {
        let board = Board::new();
        for sq in Square::ALL {
            let queen = set(&moves(Color::White.queen(), sq, &board));
            let rook = set(&moves(Color::White.rook(), sq, &board));
            let bishop = set(&moves(Color::White.bishop(), sq, &board));
            assert!(rook.is_disjoint(bishop));
            assert_eq!(queen, rook | bishop, "queen on {sq}");
        }
        assert_eq!(moves(Color::White.queen(), Square::D4, &Board::empty()).len(), 27);
    }

    #[test]
    fn test_pawn_steps() {
        let empty = Board::empty();
        let white = Color::White.pawn();
        let black = Color::Black.pawn();
        assert_eq!(
            moves(white, Square::E2, &empty).as_slice(),
            [Square::E3, Square::E4]
        );
        assert_eq!(moves(white, Square::E3, &empty).as_slice(), [Square::E4]);
        assert_eq!(
            moves(black, Square::E7, &empty).as_slice(),
            [Square::E6, Square::E5]
        );
        assert_eq!(moves(black, Square::E6, &empty).as_slice(), [Square::E5]);
        assert!(moves(white, Square::E8, &empty).is_empty());
        assert!(moves(black, Square::E1, &empty).is_empty());
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        let white = Color::White.pawn();

        let board = board_with(&[(Square::E4, Color::Black.knight())]);
        assert_eq!(moves(white, Square::E2, &board).as_slice(), [Square::E3]);

        let board = board_with(&[(Square::E3, Color::Black.knight())]);
        assert!(moves(white, Square::E2, &board).is_empty());
    }

    #[test]
    fn test_pawn_captures_ignore_color() {
        let white = Color::White.pawn();

        let board = board_with(&[
            (Square::D5, Color::Black.pawn()),
            (Square::F5, Color::White.pawn()),
        ]);
        assert_eq!(
            set(&moves(white, Square::E4, &board)),
            set(&[Square::E5, Square::D5, Square::F5])
        );

        let board = board_with(&[(Square::E5, Color::Black.pawn())]);
        assert!(moves(white, Square::E4, &board).is_empty());
    }

    #[test]
    fn test_pawn_edge_files() {
        let board = board_with(&[(Square::B3, Color::Black.rook())]);
        assert_eq!(
            set(&moves(Color::White.pawn(), Square::A2, &board)),
            set(&[Square::A3, Square::A4, Square::B3])
        );
        let board = board_with(&[(Square::G6, Color::White.rook())]);
        assert_eq!(
            set(&moves(Color::Black.pawn(), Square::H7, &board)),
            set(&[Square::H6, Square::H5, Square::G6])
        );
    }

    #[test]
    fn test_opponent_mode() {
        let board = board_with(&[
            (Square::D6, Color::Black.pawn()),
            (Square::B4, Color::White.pawn()),
            (Square::E5, Color::White.pawn()),
            (Square::C5, Color::Black.pawn()),
        ]);
        let mode = CaptureMode::Opponent;

        let rook = set(&moves_with(mode, Color::White.rook(), Square::D4, &board));
        assert!(rook.contains(Square::D6));
        assert!(!rook.contains(Square::D7));
        assert!(!rook.contains(Square::B4));
        assert!(rook.contains(Square::C4));

        let bishop = set(&moves_with(mode, Color::White.bishop(), Square::D4, &board));
        assert!(bishop.contains(Square::C5));
        assert!(!bishop.contains(Square::E5));
        assert!(!bishop.contains(Square::F6));

        let pawn = set(&moves_with(mode, Color::White.pawn(), Square::D4, &board));
        assert_eq!(pawn, set(&[Square::D5, Square::C5]));

        let knight = set(&moves_with(mode, Color::Black.knight(), Square::D3, &board));
        assert!(knight.contains(Square::B4));
        assert!(!knight.contains(Square::C5));
    }

    #[test]
    fn test_origin_is_ignored() {
        let board = board_with(&[(Square::D4, Color::Black.queen())]);
        for role in Role::ALL {
            let piece = role.of(Color::White);
            assert_eq!(
                moves(piece, Square::D4, &board),
                moves(piece, Square::D4, &Board::empty())
            );
        }
    }

    #[test]
    fn test_moves_by_tag() {
        let board = Board::new();
        assert_eq!(
            moves_by_tag("knight_black", "b8", &board).as_slice(),
            [Square::C6, Square::A6]
        );
        assert!(moves_by_tag("knight", "b8", &board).is_empty());
        assert!(moves_by_tag("knight_black", "", &board).is_empty());
    }
}
