use std::str::FromStr;

use chessmoves::{movegen, Bitboard, Board, Occupant, Piece, Square};
use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, DisplayFromStr, StringWithSeparator};

#[derive(Deserialize, Copy, Clone)]
#[serde(rename_all = "lowercase")]
enum Setup {
    Start,
    Empty,
}

impl Setup {
    fn board(self) -> Board {
        match self {
            Setup::Start => Board::new(),
            Setup::Empty => Board::empty(),
        }
    }
}

/// An occupant written as piece letter and square, like `Nf3` or `pd5`.
struct Placed(Occupant);

impl FromStr for Placed {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Placed, &'static str> {
        let mut chars = s.chars();
        let piece = chars
            .next()
            .and_then(Piece::from_char)
            .ok_or("invalid piece letter")?;
        let square = chars.as_str().parse().map_err(|_| "invalid square")?;
        Ok(Placed(Occupant::new(piece, square)))
    }
}

#[serde_as]
#[derive(Deserialize)]
struct Record {
    setup: Setup,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Placed>")]
    occupants: Vec<Placed>,
    #[serde_as(as = "DisplayFromStr")]
    piece: Piece,
    #[serde_as(as = "DisplayFromStr")]
    from: Square,
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Square>")]
    destinations: Vec<Square>,
}

fn records() -> Vec<Record> {
    let mut reader = csv::Reader::from_path("tests/moves.csv").expect("reader");
    reader
        .deserialize()
        .map(|record| record.expect("record"))
        .collect()
}

#[test]
fn test_moves_reference() {
    for (i, record) in records().into_iter().enumerate() {
        let mut board = record.setup.board();
        board.extend(record.occupants.into_iter().map(|Placed(o)| o));

        let moves = movegen::moves(record.piece, record.from, &board);

        assert_eq!(
            moves.iter().collect::<Bitboard>(),
            record.destinations.iter().collect::<Bitboard>(),
            "line {}: {} on {}",
            i + 2,
            record.piece,
            record.from
        );
        assert_eq!(moves.len(), record.destinations.len(), "line {}", i + 2);
    }
}

#[test]
fn test_moves_by_tag_reference() {
    for (i, record) in records().into_iter().enumerate() {
        let mut board = record.setup.board();
        board.extend(record.occupants.into_iter().map(|Placed(o)| o));

        let by_tag = movegen::moves_by_tag(
            &record.piece.to_string(),
            &record.from.to_string(),
            &board,
        );

        assert_eq!(
            by_tag,
            movegen::moves(record.piece, record.from, &board),
            "line {}",
            i + 2
        );
    }
}

#[test]
fn test_moves_by_tag_rejects_malformed_input() {
    let board = Board::new();
    for (piece, from) in [
        ("", "e2"),
        ("pawn", "e2"),
        ("pawn_green", "e2"),
        ("Pawn_White", "e2"),
        ("pawn_white", ""),
        ("pawn_white", "e"),
        ("pawn_white", "i2"),
        ("pawn_white", "e0"),
        ("pawn_white", "e22"),
        ("pawn_white", "E2"),
    ] {
        assert!(
            movegen::moves_by_tag(piece, from, &board).is_empty(),
            "{piece:?} on {from:?}"
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_reference() {
    use chessmoves::{Color, Role};
    use serde::Serialize;

    #[derive(Deserialize)]
    struct Query {
        piece: Piece,
        from: Square,
    }

    let mut reader = csv::Reader::from_path("tests/moves.csv").expect("reader");
    let queries: Vec<Query> = reader
        .deserialize()
        .map(|query| query.expect("query"))
        .collect();
    assert_eq!(queries.len(), records().len());
    for (query, record) in queries.iter().zip(records()) {
        assert_eq!(query.piece, record.piece);
        assert_eq!(query.from, record.from);
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Row {
        color: Color,
        role: Role,
        piece: Piece,
        square: Square,
    }

    let rows: Vec<Row> = Color::ALL
        .into_iter()
        .flat_map(|color| Role::ALL.into_iter().map(move |role| (color, role)))
        .zip(Square::ALL)
        .map(|((color, role), square)| Row {
            color,
            role,
            piece: role.of(color),
            square,
        })
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &rows {
        writer.serialize(row).expect("serialize");
    }
    let data = String::from_utf8(writer.into_inner().expect("flush")).expect("utf-8");
    assert!(data.starts_with("color,role,piece,square\nwhite,pawn,pawn_white,a1\n"));

    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let roundtripped: Vec<Row> = reader
        .deserialize()
        .map(|row| row.expect("row"))
        .collect();
    assert_eq!(roundtripped, rows);

    let mut reader = csv::Reader::from_reader("piece,from\nknight_purple,e2\n".as_bytes());
    assert!(reader
        .deserialize::<Query>()
        .next()
        .expect("row")
        .is_err());
}
