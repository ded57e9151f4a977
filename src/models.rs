use crate::error::{MelloError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive upper bound for both minutes and seconds of a run
pub const TIME_FIELD_LIMIT: i64 = 60;

/// A validated run time, both fields in [0, 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunTime {
    pub minutes: i64,
    pub seconds: i64,
}

impl RunTime {
    pub fn new(minutes: i64, seconds: i64) -> Result<Self> {
        validate_time(minutes, seconds)?;
        Ok(RunTime { minutes, seconds })
    }
}

impl fmt::Display for RunTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Reject minutes or seconds outside [0, 60)
pub fn validate_time(minutes: i64, seconds: i64) -> Result<()> {
    if !(0..TIME_FIELD_LIMIT).contains(&minutes) {
        return Err(MelloError::InvalidArgument(format!(
            "minutes out of range: {minutes}"
        )));
    }
    if !(0..TIME_FIELD_LIMIT).contains(&seconds) {
        return Err(MelloError::InvalidArgument(format!(
            "seconds out of range: {seconds}"
        )));
    }
    Ok(())
}

/// One persisted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub minutes: i64,
    pub seconds: i64,
    pub date: NaiveDate,
    pub user_id: String,
}

/// A participant's display identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub nickname: String,
}

/// A score joined with its submitter's current nickname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScore {
    pub minutes: i64,
    pub seconds: i64,
    pub date: NaiveDate,
    pub nickname: String,
}

impl RankedScore {
    pub fn time(&self) -> RunTime {
        RunTime {
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }
}

/// Platform identity of whoever issued a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    /// Per-community nickname, empty or absent when unset
    pub nick: Option<String>,
    pub username: String,
}

impl Member {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Member {
            user_id: user_id.into(),
            nick: None,
            username: username.into(),
        }
    }

    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Community nickname when set, otherwise the account username
    pub fn display_name(&self) -> &str {
        match self.nick.as_deref() {
            Some(nick) if !nick.is_empty() => nick,
            _ => &self.username,
        }
    }
}
