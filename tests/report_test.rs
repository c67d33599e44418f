//! Tests for command-line output formats.

use clever_tictactoe::{Board, Player, report};

fn board(text: &str) -> Board {
    Board::from_text(text).unwrap()
}

fn output<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_score_output() {
    let b = board("111000000");
    assert_eq!(output(|out| report::write_score(out, &b, Player::One)), "1\n");
    assert_eq!(output(|out| report::write_score(out, &b, Player::Two)), "-1\n");
    assert_eq!(
        output(|out| report::write_score(out, &board("121212212"), Player::One)),
        "0\n"
    );
}

#[test]
fn test_analysis_lines() {
    let b = board("121200000");
    assert_eq!(
        output(|out| report::write_analysis(out, &b, Player::One)),
        "4: 1\n5: 0\n6: -1\n7: 0\n8: 1\n"
    );
}

#[test]
fn test_analysis_of_full_board_is_blank() {
    let b = board("121212121");
    assert_eq!(output(|out| report::write_analysis(out, &b, Player::One)), "");
}

#[test]
fn test_analysis_json() {
    let b = board("121200000");
    assert_eq!(
        output(|out| report::write_analysis_json(out, &b, Player::One)),
        "{\"4\":1,\"5\":0,\"6\":-1,\"7\":0,\"8\":1}\n"
    );
    assert_eq!(
        output(|out| report::write_analysis_json(out, &board("121212121"), Player::Two)),
        "{}\n"
    );
}

#[test]
fn test_suggestion_output() {
    assert_eq!(
        output(|out| report::write_suggestion(out, &board("121200000"), Player::One)),
        "4\n"
    );
    assert_eq!(
        output(|out| report::write_suggestion(out, &board("121212121"), Player::Two)),
        "none\n"
    );
}

#[test]
fn test_grid_output() {
    assert_eq!(
        output(|out| report::write_grid(out, &board("120000002"))),
        "X|O|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O\n"
    );
}
