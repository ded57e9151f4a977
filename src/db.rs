use crate::error::{MelloError, Result};
use crate::models::{RankedScore, validate_time};
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, Row};
use std::path::Path;
use std::time::Duration;

/// How long a connection waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database connection
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(MelloError::StorageUnavailable)?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(MelloError::StorageUnavailable)?;

        // WAL lets leaderboard reads proceed while a submission commits
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })
        .map_err(MelloError::StorageUnavailable)?;

        Ok(Database { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(MelloError::StorageUnavailable)?;
        Ok(Database { conn })
    }

    /// Create the `scores` and `users` tables if they are missing
    pub fn ensure_schema(&self) -> Result<()> {
        // year/month/day instead of a date column: calendar dates only, no time zone
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS scores (
                    minutes INT,
                    seconds INT,
                    year INT,
                    month INT,
                    day INT,
                    userid TEXT
                )",
                [],
            )
            .map_err(MelloError::StorageUnavailable)?;

        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS users (
                    userid TEXT PRIMARY KEY,
                    nickname TEXT
                )",
                [],
            )
            .map_err(MelloError::StorageUnavailable)?;

        Ok(())
    }

    // ==================== Score Operations ====================

    /// Record a run and register the submitter if this is their first run.
    ///
    /// Both inserts share one transaction. An existing nickname is never
    /// replaced by `default_nickname`.
    pub fn submit_score(
        &mut self,
        user_id: &str,
        default_nickname: &str,
        minutes: i64,
        seconds: i64,
        date: NaiveDate,
    ) -> Result<()> {
        validate_time(minutes, seconds)?;

        // Dropping `tx` without commit rolls both inserts back
        let tx = self
            .conn
            .transaction()
            .map_err(MelloError::TransactionFailure)?;

        tx.execute(
            "INSERT INTO scores (minutes, seconds, year, month, day, userid)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                minutes,
                seconds,
                date.year(),
                date.month(),
                date.day(),
                user_id,
            ),
        )
        .map_err(MelloError::TransactionFailure)?;

        tx.execute(
            "INSERT INTO users (userid, nickname) VALUES (?1, ?2)
             ON CONFLICT(userid) DO NOTHING",
            (user_id, default_nickname),
        )
        .map_err(MelloError::TransactionFailure)?;

        tx.commit().map_err(MelloError::TransactionFailure)
    }

    /// Top `count` runs, fastest first.
    ///
    /// Runs with equal minutes and seconds come back in no particular order.
    pub fn query_top_scores(&self, count: i64) -> Result<Vec<RankedScore>> {
        if count < 0 {
            return Err(MelloError::InvalidArgument(format!(
                "count must not be negative: {count}"
            )));
        }

        let mut stmt = self
            .conn
            .prepare(
                "SELECT s.minutes, s.seconds, s.year, s.month, s.day, u.nickname
                 FROM scores s
                 INNER JOIN users u ON s.userid = u.userid
                 ORDER BY s.minutes, s.seconds
                 LIMIT ?1",
            )
            .map_err(MelloError::QueryFailure)?;

        let scores = stmt
            .query_map([count], ranked_score_from_row)
            .map_err(MelloError::QueryFailure)?;
        scores
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(MelloError::QueryFailure)
    }

    // ==================== User Operations ====================

    /// Insert or overwrite the nickname for `user_id`
    pub fn set_nickname(&self, user_id: &str, nickname: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO users (userid, nickname) VALUES (?1, ?2)
                 ON CONFLICT(userid) DO UPDATE SET nickname = excluded.nickname",
                (user_id, nickname),
            )
            .map_err(MelloError::TransactionFailure)?;
        Ok(())
    }
}

// ==================== Row Parsers ====================

fn ranked_score_from_row(row: &Row) -> std::result::Result<RankedScore, rusqlite::Error> {
    Ok(RankedScore {
        minutes: row.get(0)?,
        seconds: row.get(1)?,
        date: date_from_row(row, 2)?,
        nickname: row.get(5)?,
    })
}

/// Rebuild a calendar date from the year, month and day columns starting at `idx`
fn date_from_row(row: &Row, idx: usize) -> std::result::Result<NaiveDate, rusqlite::Error> {
    let year: i32 = row.get(idx)?;
    let month: u32 = row.get(idx + 1)?;
    let day: u32 = row.get(idx + 2)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Integer,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid calendar date: {year}-{month}-{day}"),
            )),
        )
    })
}
