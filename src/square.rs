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

use core::{error, fmt, num, str::FromStr};

use crate::util::out_of_range_error;

macro_rules! int_from_coord_impl {
    ($coord:ty; $($t:ty)+) => {
        $(impl From<$coord> for $t {
            #[inline]
            fn from(value: $coord) -> $t {
                value as $t
            }
        })+
    }
}

macro_rules! try_coord_from_int_impl {
    ($coord:ident; $($t:ty)+) => {
        $(impl TryFrom<$t> for $coord {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<$coord, Self::Error> {
                match usize::try_from(value) {
                    Ok(index) if index < 8 => Ok($coord::ALL[index]),
                    _ => Err(out_of_range_error()),
                }
            }
        })+
    }
}

macro_rules! coord_impls {
    ($t:ident, $($variant:ident),+) => {
        impl $t {
            /// Gets the element with the given zero-based index.
            ///
            /// # Panics
            ///
            /// Panics if the index is not in the range `0..=7`.
            #[track_caller]
            #[inline]
            pub const fn new(index: u32) -> $t {
                assert!(index < 8);
                $t::ALL[index as usize]
            }

            #[inline]
            pub const fn to_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            pub const fn to_usize(self) -> usize {
                self as usize
            }

            /// Steps by `delta`, or returns `None` if the result would be
            /// off the board.
            #[must_use]
            #[inline]
            pub const fn offset(self, delta: i32) -> Option<$t> {
                match (self as i32).checked_add(delta) {
                    Some(index) if 0 <= index && index < 8 => Some($t::new(index as u32)),
                    _ => None,
                }
            }

            pub const ALL: [$t; 8] = [$($t::$variant),+];
        }

        int_from_coord_impl! { $t; u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
        try_coord_from_int_impl! { $t; u8 i8 u16 i16 u32 i32 u64 i64 usize isize }
    };
}

/// A file of the board, `a` to `h`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

coord_impls!(File, A, B, C, D, E, F, G, H);

impl File {
    #[inline]
    pub const fn from_char(ch: char) -> Option<File> {
        match ch {
            'a'..='h' => Some(File::new(ch as u32 - 'a' as u32)),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'a' + self as u8) as char
    }

    #[inline]
    pub const fn upper_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// A rank of the board, `1` to `8`.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    First = 0,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

coord_impls!(Rank, First, Second, Third, Fourth, Fifth, Sixth, Seventh, Eighth);

impl Rank {
    #[inline]
    pub const fn from_char(ch: char) -> Option<Rank> {
        match ch {
            '1'..='8' => Some(Rank::new(ch as u32 - '1' as u32)),
            _ => None,
        }
    }

    #[inline]
    pub const fn char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.char())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl error::Error for ParseSquareError {}

/// A square of the 8x8 board.
///
/// Squares are indexed from `a1` (0) to `h8` (63), file first. Every value
/// of this type is on the board: stepping off an edge yields `None` instead.
///
/// # Examples
///
/// ```
/// use chessmoves::{File, Rank, Square};
///
/// let sq: Square = "e4".parse()?;
/// assert_eq!(sq, Square::E4);
/// assert_eq!(sq.file(), File::E);
/// assert_eq!(sq.rank(), Rank::Fourth);
/// assert_eq!(sq.to_string(), "e4");
///
/// assert_eq!(Square::H8.offset(1, 0), None);
/// # Ok::<_, chessmoves::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..=63`.
    #[track_caller]
    #[inline]
    pub const fn new(index: u32) -> Square {
        assert!(index < 64);
        Square(index as u8)
    }

    #[inline]
    pub const fn from_coords(file: File, rank: Rank) -> Square {
        Square(file as u8 | ((rank as u8) << 3))
    }

    /// Parses a square name like `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if `s` is not exactly a file letter
    /// `a`-`h` followed by a rank digit `1`-`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let &[file, rank] = s else {
            return Err(ParseSquareError);
        };
        match (
            File::from_char(char::from(file)),
            Rank::from_char(char::from(rank)),
        ) {
            (Some(file), Some(rank)) => Ok(Square::from_coords(file, rank)),
            _ => Err(ParseSquareError),
        }
    }

    #[inline]
    pub const fn file(self) -> File {
        File::new(self.0 as u32 & 7)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::new(self.0 as u32 >> 3)
    }

    /// Steps `file_delta` files to the right and `rank_delta` ranks up
    /// (from white's point of view).
    ///
    /// Returns `None` if the target would be off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessmoves::Square;
    ///
    /// assert_eq!(Square::B1.offset(1, 2), Some(Square::C3));
    /// assert_eq!(Square::B1.offset(-2, 1), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn offset(self, file_delta: i32, rank_delta: i32) -> Option<Square> {
        match (self.file().offset(file_delta), self.rank().offset(rank_delta)) {
            (Some(file), Some(rank)) => Some(Square::from_coords(file, rank)),
            _ => None,
        }
    }

    /// Chebyshev distance, i.e. the number of king steps between two
    /// squares.
    pub const fn distance(self, other: Square) -> u32 {
        let files = (self.file() as i32 - other.file() as i32).unsigned_abs();
        let ranks = (self.rank() as i32 - other.rank() as i32).unsigned_abs();
        if files > ranks {
            files
        } else {
            ranks
        }
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// All squares from `a1` to `h8`, file first.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };
}

macro_rules! square_consts {
    ($($name:ident = $index:expr),+ $(,)?) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    };
}

square_consts! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

macro_rules! int_from_square_impl {
    ($($t:ty)+) => {
        $(impl From<Square> for $t {
            #[inline]
            fn from(sq: Square) -> $t {
                sq.0 as $t
            }
        })+
    }
}

int_from_square_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

macro_rules! try_square_from_int_impl {
    ($($t:ty)+) => {
        $(impl TryFrom<$t> for Square {
            type Error = num::TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Square, Self::Error> {
                match u8::try_from(value) {
                    Ok(index) if index < 64 => Ok(Square(index)),
                    _ => Err(out_of_range_error()),
                }
            }
        })+
    }
}

try_square_from_int_impl! { u8 i8 u16 i16 u32 i32 u64 i64 usize isize }

impl From<(File, Rank)> for Square {
    #[inline]
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_coords(file, rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().upper_char(), self.rank())
    }
}

#[cfg(feature = "serde")]
serde_via_str!(Square, "square name");

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        Ok(Square(u.int_in_range(0..=63)?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u8 as arbitrary::Arbitrary>::size_hint(depth)
    }
}
