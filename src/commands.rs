//! Command dispatch shared by the CLI and the MCP server.
//!
//! Each function takes the raw strings a member typed, validates them and
//! returns the reply to deliver back to the chat.

use crate::core::Leaderboard;
use crate::error::Result;
use crate::message;
use crate::models::Member;
use crate::parse::{parse_date, parse_run_time};
use chrono::{Local, NaiveDate};
use tracing::info;

/// Calendar date of "today" in the host's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Submit `time` for `date`, or for today when no date is given
pub fn submit(
    board: &Leaderboard,
    member: &Member,
    date: Option<&str>,
    time: &str,
) -> Result<String> {
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => today(),
    };
    let time = parse_run_time(time)?;

    info!(
        user_id = %member.user_id,
        name = member.display_name(),
        %date,
        %time,
        "submitting score"
    );
    board.submit_score(member, time, date)?;

    Ok(message::submitted(time, date))
}

pub fn nickname(board: &Leaderboard, user_id: &str, nickname: &str) -> Result<String> {
    info!(%user_id, nickname, "setting nickname");
    board.set_nickname(user_id, nickname)?;
    Ok(message::nickname_set(nickname))
}

pub fn leaderboard(board: &Leaderboard) -> Result<String> {
    let count = board.config().leaderboard_size();
    let scores = board.top_scores(count)?;
    Ok(message::leaderboard(count, &scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MelloError;
    use tempfile::TempDir;

    fn setup() -> (Leaderboard, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let board = Leaderboard::open_at(temp_dir.path().join("scores.sqlite"));
        board.initialize().unwrap();
        (board, temp_dir)
    }

    #[test]
    fn test_submit_for_date() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "alice");

        let reply = submit(&board, &member, Some("01/15/2024"), "5:30").unwrap();
        assert!(reply.contains("`5:30`"));
        assert!(reply.contains("`01/15/2024`"));

        let board_msg = leaderboard(&board).unwrap();
        assert!(board_msg.contains("1) 5:30 by alice on 1/15/2024"));
    }

    #[test]
    fn test_submit_today() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "alice");

        submit(&board, &member, None, "2:00").unwrap();

        let top = board.top_scores(1).unwrap();
        assert_eq!(top[0].date, today());
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "alice");

        assert!(matches!(
            submit(&board, &member, Some("2024-01-15"), "5:30"),
            Err(MelloError::InvalidDate(_))
        ));
        assert!(matches!(
            submit(&board, &member, None, "5:75"),
            Err(MelloError::InvalidTime(_))
        ));
        assert!(board.top_scores(10).unwrap().is_empty());
    }

    #[test]
    fn test_nickname_then_leaderboard() {
        let (board, _temp) = setup();
        let member = Member::new("u1", "bob");
        submit(&board, &member, Some("03/01/2024"), "1:59").unwrap();

        let reply = nickname(&board, "u1", "Bobby").unwrap();
        assert!(reply.contains("Bobby"));

        let board_msg = leaderboard(&board).unwrap();
        assert!(board_msg.contains("by Bobby"));
        assert!(!board_msg.contains("by bob "));
    }
}
