//! Parsing of user-typed command arguments.

use crate::error::{MelloError, Result};
use crate::models::RunTime;
use chrono::NaiveDate;

/// Date format members type dates in
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse `Minutes:Seconds`, e.g. `5:07`.
pub fn parse_run_time(input: &str) -> Result<RunTime> {
    let invalid = || MelloError::InvalidTime(input.to_string());

    let segments: Vec<&str> = input.split(':').collect();
    if segments.len() != 2 {
        return Err(invalid());
    }

    let minutes: i64 = segments[0].trim().parse().map_err(|_| invalid())?;
    let seconds: i64 = segments[1].trim().parse().map_err(|_| invalid())?;

    RunTime::new(minutes, seconds).map_err(|_| invalid())
}

/// Parse `MM/DD/YYYY`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| MelloError::InvalidDate(input.to_string()))
}
