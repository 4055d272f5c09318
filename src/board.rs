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

//! Piece positions on a board.
//!
//! # Examples
//!
//! ```
//! use chessmoves::{Board, Color, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
//!
//! // Moving produces a new board and leaves the old one untouched.
//! let after = board.play(Square::G1, Square::F3)?;
//! assert_eq!(after.piece_at(Square::F3), Some(Color::White.knight()));
//! assert_eq!(board.piece_at(Square::F3), None);
//! # Ok::<_, chessmoves::board::PlayError>(())
//! ```

use core::{
    error,
    fmt::{self, Write as _},
    iter::FusedIterator,
};

use crate::{
    bitboard::{self, Bitboard},
    color::{ByColor, Color},
    movegen,
    role::{ByRole, Role},
    square::{File, Rank, Square},
    types::{CaptureMode, Occupant, Piece},
};

/// [`Piece`] positions on a board.
///
/// A square holds at most one piece. Placing a piece onto an occupied
/// square replaces the previous occupant.
///
/// # Examples
///
/// ```
/// use chessmoves::{Board, Occupant, Color, Square};
///
/// let board: Board = [
///     Occupant::new(Color::White.king(), Square::E1),
///     Occupant::new(Color::Black.king(), Square::E8),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(board.len(), 2);
/// assert_eq!(board.to_string(), concat!(
///     ". . . . k . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . . . . .\n",
///     ". . . . K . . .\n",
/// ));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    by_role: ByRole<Bitboard>,
    by_color: ByColor<Bitboard>,
    occupied: Bitboard,
}

impl Board {
    /// The standard starting arrangement, white on ranks 1 and 2, black on
    /// ranks 7 and 8.
    pub const fn new() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard(0x00ff_0000_0000_ff00),
                knight: Bitboard(0x4200_0000_0000_0042),
                bishop: Bitboard(0x2400_0000_0000_0024),
                rook: Bitboard(0x8100_0000_0000_0081),
                queen: Bitboard(0x0800_0000_0000_0008),
                king: Bitboard(0x1000_0000_0000_0010),
            },
            by_color: ByColor {
                white: Bitboard(0xffff),
                black: Bitboard(0xffff_0000_0000_0000),
            },
            occupied: Bitboard(0xffff_0000_0000_ffff),
        }
    }

    pub const fn empty() -> Board {
        Board {
            by_role: ByRole {
                pawn: Bitboard::EMPTY,
                knight: Bitboard::EMPTY,
                bishop: Bitboard::EMPTY,
                rook: Bitboard::EMPTY,
                queen: Bitboard::EMPTY,
                king: Bitboard::EMPTY,
            },
            by_color: ByColor {
                white: Bitboard::EMPTY,
                black: Bitboard::EMPTY,
            },
            occupied: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    #[inline]
    pub const fn by_color(&self, color: Color) -> Bitboard {
        *self.by_color.get(color)
    }

    #[inline]
    pub const fn by_role(&self, role: Role) -> Bitboard {
        *self.by_role.get(role)
    }

    #[inline]
    pub const fn by_piece(&self, piece: Piece) -> Bitboard {
        Bitboard(self.by_color(piece.color).0 & self.by_role(piece.role).0)
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.by_color.find(|bb| bb.contains(sq))
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        if self.is_occupied(sq) {
            self.by_role.find(|bb| bb.contains(sq))
        } else {
            None
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let role = self.role_at(sq)?;
        let color = self.color_at(sq)?;
        Some(Piece { color, role })
    }

    /// Removes and returns the piece on `sq`, if any.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.occupied.remove(sq);
        self.by_color.get_mut(piece.color).remove(sq);
        self.by_role.get_mut(piece.role).remove(sq);
        Some(piece)
    }

    /// Puts `piece` on `sq`, replacing any previous occupant.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.occupied.add(sq);
        self.by_color.get_mut(piece.color).add(sq);
        self.by_role.get_mut(piece.role).add(sq);
    }

    /// Number of pieces on the board.
    #[inline]
    pub const fn len(&self) -> usize {
        self.occupied.count()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Iterates over all pieces, ordered by square from `a1` to `h8`.
    pub fn occupants(&self) -> Occupants<'_> {
        Occupants {
            board: self,
            squares: self.occupied.into_iter(),
        }
    }

    /// Moves the piece on `from` to `to`, if `to` is one of its
    /// destinations under [`CaptureMode::Blocked`], and returns the
    /// resulting board.
    ///
    /// A piece that was standing on `to` is removed.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if there is no piece on `from` or if `to` is
    /// not a destination of that piece.
    pub fn play(&self, from: Square, to: Square) -> Result<Board, PlayError> {
        self.play_with(CaptureMode::default(), from, to)
    }

    /// Like [`Board::play()`], but validates the destination with the
    /// given capture mode.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if there is no piece on `from` or if `to` is
    /// not a destination of that piece.
    pub fn play_with(
        &self,
        mode: CaptureMode,
        from: Square,
        to: Square,
    ) -> Result<Board, PlayError> {
        let piece = self.piece_at(from).ok_or(PlayError::EmptySquare(from))?;

        if !movegen::moves_with(mode, piece, from, self).contains(&to) {
            log::debug!("rejected {piece} from {from} to {to}");
            return Err(PlayError::IllegalDestination { from, to });
        }

        let mut after = self.clone();
        after.play_unchecked(from, to);
        Ok(after)
    }

    /// Moves whatever stands on `from` to `to` without any validation.
    ///
    /// A piece that was standing on `to` is removed. Does nothing if `from`
    /// is empty.
    pub fn play_unchecked(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove_piece_at(from) {
            self.set_piece_at(to, piece);
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.occupants().map(|o| (o.square, o.piece)))
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let sq = Square::from_coords(file, rank);
                f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
                f.write_char(if file < File::H { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl Extend<Occupant> for Board {
    fn extend<T: IntoIterator<Item = Occupant>>(&mut self, iter: T) {
        for Occupant { piece, square } in iter {
            self.set_piece_at(square, piece);
        }
    }
}

impl FromIterator<Occupant> for Board {
    /// Builds a board snapshot. Later occupants of the same square replace
    /// earlier ones.
    fn from_iter<T>(iter: T) -> Board
    where
        T: IntoIterator<Item = Occupant>,
    {
        let mut board = Board::empty();
        board.extend(iter);
        board
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = Occupant;
    type IntoIter = Occupants<'a>;

    fn into_iter(self) -> Occupants<'a> {
        self.occupants()
    }
}

/// Iterator over the pieces of a [`Board`].
#[derive(Debug, Clone)]
pub struct Occupants<'a> {
    board: &'a Board,
    squares: bitboard::IntoIter,
}

impl Iterator for Occupants<'_> {
    type Item = Occupant;

    fn next(&mut self) -> Option<Occupant> {
        let square = self.squares.next()?;
        let piece = self.board.piece_at(square)?;
        Some(Occupant { piece, square })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.squares.size_hint()
    }
}

impl ExactSizeIterator for Occupants<'_> {}

impl FusedIterator for Occupants<'_> {}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Board {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Board> {
        let mut board = Board::empty();
        for occupant in u.arbitrary_iter::<Occupant>()? {
            board.extend([occupant?]);
        }
        Ok(board)
    }
}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// There is no piece on the origin square.
    EmptySquare(Square),
    /// The target is not a destination of the piece on the origin square.
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayError::EmptySquare(sq) => write!(f, "no piece on {sq}"),
            PlayError::IllegalDestination { from, to } => {
                write!(f, "illegal destination {to} for piece on {from}")
            }
        }
    }
}

impl error::Error for PlayError {}
