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

//! Destination squares for chess pieces on an 8x8 board, under simplified
//! rules: no check, castling, en passant, promotion or side to move.
//!
//! Generate the destinations of a piece:
//!
//! ```
//! use chessmoves::{movegen, Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = movegen::moves(Color::White.pawn(), Square::E2, &board);
//! assert_eq!(moves.as_slice(), [Square::E3, Square::E4]);
//! ```
//!
//! Play a move and look at the result:
//!
//! ```
//! use chessmoves::{Board, Color, Square};
//!
//! let board = Board::new().play(Square::B1, Square::C3)?;
//! assert_eq!(board.piece_at(Square::C3), Some(Color::White.knight()));
//! assert_eq!(board.piece_at(Square::B1), None);
//! # Ok::<_, chessmoves::board::PlayError>(())
//! ```
//!
//! By default every occupied square blocks, whatever its color, and only
//! pawns move onto occupied squares. See [`CaptureMode`] for capturing
//! opposing pieces instead.
//!
//! # Logging
//!
//! Emits records through the [`log`](https://docs.rs/log/0.4/log/) facade:
//! `trace` for every generated move list and `debug` for rejected input.
//!
//! # Feature flags
//!
//! * `std`: Links the standard library. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   squares, colors, piece types and pieces, using their names.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for fuzzing. Implies `std`.

#![no_std]
#![doc(html_root_url = "https://docs.rs/chessmoves/0.1.0")]
#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod util;
mod color;
mod role;
mod square;
mod types;

pub mod bitboard;
pub mod board;
pub mod movegen;

pub use bitboard::Bitboard;
pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
pub use movegen::MoveList;
pub use role::{ByRole, ParseRoleError, Role};
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::{CaptureMode, Occupant, ParsePieceError, Piece};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
