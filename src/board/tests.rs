use std::str::FromStr;

use super::*;

#[test]
fn test_initial_board_has_twelve_men_per_side() {
    let board = initial_board();
    assert_eq!(board.count(Square::BlackMan), 12);
    assert_eq!(board.count(Square::WhiteMan), 12);
    assert_eq!(board.count(Square::BlackKing), 0);
    assert_eq!(board.count(Square::WhiteKing), 0);

    for position in Position::all() {
        let square = board.get(position);
        match position.row {
            0..=2 if position.is_dark() => assert_eq!(square, Square::BlackMan, "{}", position),
            5..=7 if position.is_dark() => assert_eq!(square, Square::WhiteMan, "{}", position),
            _ => assert_eq!(square, Square::Empty, "{}", position),
        }
    }
}

#[test]
fn test_pieces_iterates_row_major() {
    let board = initial_board();
    let white: Vec<Position> = board.pieces(Side::White).map(|(p, _)| p).collect();
    assert_eq!(white.len(), 12);
    assert_eq!(white[0], Position::new(5, 0));
    assert_eq!(white[1], Position::new(5, 2));
    assert_eq!(white[11], Position::new(7, 6));
    assert!(white.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_put_rejects_light_and_occupied_squares() {
    let mut board = Board::new();
    assert_eq!(
        board.put(Position::new(0, 0), Square::WhiteMan),
        Err(BoardError::LightSquarePutError {
            position: Position::new(0, 0)
        })
    );
    board.put(Position::new(0, 1), Square::WhiteKing).unwrap();
    assert_eq!(
        board.put(Position::new(0, 1), Square::BlackMan),
        Err(BoardError::SquareOccupiedBoardPutError {
            position: Position::new(0, 1)
        })
    );
    assert_eq!(board.remove(Position::new(0, 1)), Square::WhiteKing);
    assert_eq!(board.get(Position::new(0, 1)), Square::Empty);
}

#[test]
fn test_diagram_round_trip() {
    let board = checkers_position! {
        .B......
        ........
        ...b....
        ....w...
        ........
        ........
        ........
        W.......
    };
    let diagram = board.to_diagram();
    assert_eq!(
        diagram,
        ".B....../......../...b..../....w.../......../......../......../W......."
    );
    assert_eq!(Board::from_str(&diagram).unwrap(), board);
}

#[test]
fn test_parse_invalid_diagrams() {
    assert_eq!(
        Board::from_str("......../........"),
        Err(BoardError::InvalidRowCountError { rows: 2 })
    );
    assert_eq!(
        Board::from_str("......./......../......../......../......../......../......../........"),
        Err(BoardError::InvalidRowLengthError { row: 0, len: 7 })
    );
    assert_eq!(
        Board::from_str(".x....../......../......../......../......../......../......../........"),
        Err(BoardError::InvalidPieceCharError('x'))
    );
    assert!(matches!(
        Board::from_str("w......./......../......../......../......../......../......../........"),
        Err(BoardError::LightSquarePutError { .. })
    ));
}

#[test]
fn test_display() {
    let board = initial_board();
    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8  . b . b . b . b");
    assert_eq!(lines[7], "1  w . w . w . w .");
    assert_eq!(lines[8], "   a b c d e f g h");
}
