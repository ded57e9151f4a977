//! Chat message rendering.

use crate::models::{RankedScore, RunTime};
use chrono::NaiveDate;

/// Confirmation sent back after a successful submission
pub fn submitted(time: RunTime, date: NaiveDate) -> String {
    format!(
        "Your time of `{time}` on `{}` has been submitted successfully.",
        date.format("%m/%d/%Y")
    )
}

pub fn nickname_set(nickname: &str) -> String {
    format!("Your leaderboard name is now `{nickname}`.")
}

/// Leaderboard body, one numbered line per run inside a code block
pub fn leaderboard(count: i64, scores: &[RankedScore]) -> String {
    let lines: String = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            format!(
                "{}) {} by {} on {}\n",
                i + 1,
                score.time(),
                score.nickname,
                score.date.format("%-m/%-d/%Y")
            )
        })
        .collect();
    format!("Here are the top {count} scores of all time: ```\n{lines}```")
}
