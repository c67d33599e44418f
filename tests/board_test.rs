//! Tests for the board contract.

use clever_tictactoe::{Board, BoardErrorKind, CELL_COUNT, Player, Position, Square};

fn board(text: &str) -> Board {
    Board::from_text(text).unwrap()
}

/// Every 9-symbol text over `0`, `1`, `2`.
fn all_texts() -> impl Iterator<Item = String> {
    (0..3u32.pow(9)).map(|mut n| {
        let mut text = String::with_capacity(CELL_COUNT);
        for _ in 0..CELL_COUNT {
            text.push(char::from(b'0' + (n % 3) as u8));
            n /= 3;
        }
        text
    })
}

#[test]
fn test_default_board_is_all_empty() {
    assert_eq!(Board::default().to_text(), "000000000");
    assert_eq!(Board::new(), Board::default());
    assert!(Board::new().is_empty());
    assert!(!Board::new().is_full());
}

#[test]
fn test_text_round_trip_for_every_board() {
    for text in all_texts() {
        let parsed = Board::from_text(&text).unwrap();
        assert_eq!(parsed.to_text(), text);
        assert_eq!(parsed.to_string(), text);
        assert_eq!(text.parse::<Board>().unwrap(), parsed);
    }
}

#[test]
fn test_construct_rejects_wrong_length() {
    for text in ["", "00000000", "0000000000", "1212121212"] {
        let err = Board::from_text(text).unwrap_err();
        assert!(matches!(err.kind(), BoardErrorKind::InvalidInput(_)), "{}", text);
    }
}

#[test]
fn test_construct_rejects_foreign_symbols() {
    for text in ["00000000a", "3000000000", "X00000000", "0000 0000", "00000000é"] {
        assert!(Board::from_text(text).is_err(), "{}", text);
    }
}

#[test]
fn test_apply_move_returns_new_board() {
    let before = board("120000000");
    let after = before.apply_move(Player::One, 4).unwrap();
    assert_eq!(after.to_text(), "120010000");
    assert_eq!(before.to_text(), "120000000");
    assert_eq!(after.get(4), Some(Square::Occupied(Player::One)));
}

#[test]
fn test_apply_move_rejects_occupied_cell() {
    let err = board("120000000").apply_move(Player::Two, 1).unwrap_err();
    assert_eq!(err.kind(), &BoardErrorKind::CellOccupied(1));
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_apply_move_rejects_out_of_range_index() {
    let err = Board::new().apply_move(Player::One, 9).unwrap_err();
    assert!(matches!(err.kind(), BoardErrorKind::InvalidInput(_)));
}

#[test]
fn test_invalid_player_number() {
    assert!(matches!(
        Player::from_number(0).unwrap_err().kind(),
        BoardErrorKind::InvalidInput(_)
    ));
    assert!(Player::try_from(3u8).is_err());
}

#[test]
fn test_opponent_of() {
    let b = Board::new();
    assert_eq!(b.opponent_of(Player::One), Player::Two);
    assert_eq!(b.opponent_of(Player::Two), Player::One);
}

#[test]
fn test_empty_cell_indices_ascending() {
    assert_eq!(board("121000201").empty_cell_indices(), vec![3, 4, 5, 7]);
    assert_eq!(Board::new().empty_cell_indices(), (0..9).collect::<Vec<_>>());
    assert!(board("121212121").empty_cell_indices().is_empty());
}

#[test]
fn test_is_empty_and_is_full() {
    assert!(!board("100000000").is_empty());
    assert!(board("121212121").is_full());
    assert!(!board("121212120").is_full());
}

#[test]
fn test_line_extraction() {
    let b = board("012120201");
    assert_eq!(b.row(0).unwrap().to_string(), "012");
    assert_eq!(b.row(2).unwrap().to_string(), "201");
    assert_eq!(b.column(0).unwrap().to_string(), "012");
    assert_eq!(b.column(1).unwrap().to_string(), "120");
    assert_eq!(b.diagonal(0).unwrap().to_string(), "021");
    assert_eq!(b.diagonal(1).unwrap().to_string(), "222");
    assert_eq!(b.diagonal(1).unwrap().owner(), Some(Player::Two));
}

#[test]
fn test_line_extraction_out_of_range() {
    let b = Board::new();
    assert!(b.row(3).is_err());
    assert!(b.column(3).is_err());
    assert!(b.diagonal(2).is_err());
}

#[test]
fn test_find_winner_is_deterministic() {
    for text in all_texts().step_by(7) {
        let b = board(&text);
        assert_eq!(b.find_winner(), b.find_winner());
    }
}

#[test]
fn test_board_serializes_as_text() {
    let b = board("120000002");
    assert_eq!(serde_json::to_string(&b).unwrap(), r#""120000002""#);
    assert_eq!(serde_json::from_str::<Board>(r#""120000002""#).unwrap(), b);
    assert!(serde_json::from_str::<Board>(r#""12""#).is_err());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let b = board("100020000");
    let valid = Position::valid_moves(&b);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
