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

use core::{error, fmt, str::FromStr};

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces carry no identity: two white knights are interchangeable.
///
/// The [`Display`](fmt::Display) and [`FromStr`] implementations use tags
/// of the form `<role>_<color>`, as exchanged with user interfaces.
///
/// # Examples
///
/// ```
/// use chessmoves::{Color, Piece, Role};
///
/// let piece: Piece = "knight_black".parse()?;
/// assert_eq!(piece, Role::Knight.of(Color::Black));
/// assert_eq!(piece.char(), 'n');
/// assert_eq!(piece.to_string(), "knight_black");
/// # Ok::<_, chessmoves::ParsePieceError>(())
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Gets the English letter, uppercase for white and lowercase for black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.role, self.color)
    }
}

/// Error when parsing an invalid piece tag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid piece tag")
    }
}

impl error::Error for ParsePieceError {}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Piece, ParsePieceError> {
        let (role, color) = s.split_once('_').ok_or(ParsePieceError)?;
        Ok(Piece {
            role: role.parse().map_err(|_| ParsePieceError)?,
            color: color.parse().map_err(|_| ParsePieceError)?,
        })
    }
}

#[cfg(feature = "serde")]
serde_via_str!(Piece, "piece tag like pawn_white");

/// A piece standing on a square of a [`Board`](crate::Board).
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Occupant {
    pub piece: Piece,
    pub square: Square,
}

impl Occupant {
    #[inline]
    pub const fn new(piece: Piece, square: Square) -> Occupant {
        Occupant { piece, square }
    }
}

impl From<(Square, Piece)> for Occupant {
    #[inline]
    fn from((square, piece): (Square, Piece)) -> Occupant {
        Occupant { piece, square }
    }
}

/// How move generation treats squares that are already occupied.
///
/// # Examples
///
/// ```
/// use chessmoves::{movegen, Board, CaptureMode, Color, Square};
///
/// let mut board = Board::empty();
/// board.set_piece_at(Square::C6, Color::Black.pawn());
/// let knight = Color::White.knight();
///
/// let blocked = movegen::moves(knight, Square::D4, &board);
/// assert!(!blocked.contains(&Square::C6));
///
/// let captures = movegen::moves_with(CaptureMode::Opponent, knight, Square::D4, &board);
/// assert!(captures.contains(&Square::C6));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum CaptureMode {
    /// Every occupied square blocks, regardless of the occupant's color.
    ///
    /// Knights and kings never move onto occupied squares and sliders stop
    /// in front of the first occupied square. Only pawns land on occupied
    /// squares: their diagonal steps require an occupant of any color.
    #[default]
    Blocked,
    /// Pieces of the moving color block, opposing pieces can be captured.
    ///
    /// Deviates from [`CaptureMode::Blocked`]: knights, kings and sliders
    /// may land on an opposing piece, and pawn diagonals require an
    /// opposing piece.
    Opponent,
}

impl CaptureMode {
    pub const fn is_blocked(self) -> bool {
        matches!(self, CaptureMode::Blocked)
    }

    /// Checks if a piece of color `mover` may land on a square held by
    /// `occupant` with a regular move.
    #[inline]
    pub const fn can_capture(self, mover: Color, occupant: Color) -> bool {
        match self {
            CaptureMode::Blocked => false,
            CaptureMode::Opponent => mover as u8 != occupant as u8,
        }
    }

    /// Checks if a pawn of color `mover` may step diagonally onto a square
    /// held by `occupant`.
    #[inline]
    pub const fn can_pawn_capture(self, mover: Color, occupant: Color) -> bool {
        match self {
            CaptureMode::Blocked => true,
            CaptureMode::Opponent => mover as u8 != occupant as u8,
        }
    }
}
