use super::*;

const START_ROWS: [&str; 8] = [
    "bR bN bB bQ bK bB bN bR",
    "bP bP bP bP bP bP bP bP",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wP wP wP wP wP wP wP wP",
    "wR wN wB wQ wK wB wN wR",
];

#[test]
fn test_starting_layout() {
    let b = Board::starting();
    assert_eq!(b.code_at(Square { row: 0, col: 0 }), "bR");
    assert_eq!(b.code_at(Square { row: 0, col: 4 }), "bK");
    assert_eq!(b.code_at(Square { row: 7, col: 3 }), "wQ");
    assert_eq!(b.code_at(Square { row: 4, col: 4 }), "--");
    assert_eq!(b.pieces().count(), 32);
    assert_eq!(b.kings(Color::White), vec![Square { row: 7, col: 4 }]);
    assert_eq!(b.kings(Color::Black), vec![Square { row: 0, col: 4 }]);
}

#[test]
fn test_from_codes_matches_starting() {
    let b = Board::from_codes(&START_ROWS).unwrap();
    assert_eq!(b, Board::starting());
}

#[test]
fn test_from_codes_rejects_bad_input() {
    assert!(matches!(
        Board::from_codes(&START_ROWS[..7]),
        Err(RulesError::InvalidLayout(_))
    ));

    let mut rows = START_ROWS;
    rows[3] = "-- -- -- --";
    assert!(matches!(
        Board::from_codes(&rows),
        Err(RulesError::InvalidLayout(_))
    ));

    rows[3] = "-- -- -- xQ -- -- -- --";
    assert_eq!(
        Board::from_codes(&rows),
        Err(RulesError::InvalidPieceCode("xQ".to_string()))
    );
}

#[test]
fn test_index_by_square() {
    let mut b = Board::empty();
    let d4: Square = "d4".parse().unwrap();
    b[d4] = Some(Piece::new(Color::Black, PieceKind::Knight));
    assert_eq!(b.code_at(d4), "bN");
    assert_eq!(b[Square::new(4, 3).unwrap()], b.piece_at(d4));

    b.set_piece(d4, None);
    assert!(b[d4].is_none());
    assert_eq!((d4.row(), d4.col()), (4, 3));
}

#[test]
fn test_piece_codes() {
    for code in ["wP", "wR", "wN", "wB", "wQ", "wK", "bP", "bR", "bN", "bB", "bQ", "bK"] {
        let pc = Piece::from_code(code).unwrap().unwrap();
        assert_eq!(pc.code(), code);
    }
    assert_eq!(Piece::from_code("--"), Ok(None));
    assert!(Piece::from_code("wX").is_err());
    assert!(Piece::from_code("K").is_err());
    assert!(Piece::from_code("").is_err());
}

#[test]
fn test_square_names() {
    let a8: Square = "a8".parse().unwrap();
    assert_eq!(a8, Square { row: 0, col: 0 });
    let h1: Square = "h1".parse().unwrap();
    assert_eq!(h1, Square { row: 7, col: 7 });
    assert_eq!(Square { row: 6, col: 4 }.to_string(), "e2");

    assert!("i1".parse::<Square>().is_err());
    assert!("a9".parse::<Square>().is_err());
    assert!("a".parse::<Square>().is_err());
    assert_eq!(
        "e22".parse::<Square>(),
        Err(RulesError::InvalidSquare("e22".to_string()))
    );
}

#[test]
fn test_square_offset_clips_to_board() {
    let a8 = Square { row: 0, col: 0 };
    assert_eq!(a8.offset(-1, 0), None);
    assert_eq!(a8.offset(0, -1), None);
    assert_eq!(a8.offset(2, 1), Some(Square { row: 2, col: 1 }));
    assert_eq!(Square::new(8, 0), None);
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_display() {
    let text = Board::starting().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 bR bN bB bQ bK bB bN bR");
    assert_eq!(lines[4], "4 -- -- -- -- -- -- -- --");
    assert_eq!(lines[7], "1 wR wN wB wQ wK wB wN wR");
    assert_eq!(lines[8], "  a  b  c  d  e  f  g  h");
}

#[test]
fn test_serialize_as_codes() {
    let json = serde_json::to_value(Board::starting()).unwrap();
    assert_eq!(json[0][0], "bR");
    assert_eq!(json[7][4], "wK");
    assert_eq!(json[3][3], "--");
}
