use thiserror::Error;

/// All possible errors in the leaderboard bot
#[derive(Error, Debug)]
pub enum MelloError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] rusqlite::Error),

    #[error("Transaction failed: {0}")]
    TransactionFailure(#[source] rusqlite::Error),

    #[error("Query failed: {0}")]
    QueryFailure(#[source] rusqlite::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid time '{0}': expected Minutes:Seconds")]
    InvalidTime(String),

    #[error("Invalid date '{0}': expected MM/DD/YYYY")]
    InvalidDate(String),
}

impl MelloError {
    /// Stable code used in MCP error responses
    pub fn code(&self) -> &'static str {
        match self {
            MelloError::StorageUnavailable(_) => "storage_unavailable",
            MelloError::TransactionFailure(_) => "transaction_failure",
            MelloError::QueryFailure(_) => "query_failure",
            MelloError::InvalidArgument(_) => "invalid_argument",
            MelloError::InvalidTime(_) => "invalid_time",
            MelloError::InvalidDate(_) => "invalid_date",
        }
    }

    /// Message safe to show to chat members. Storage details never leak.
    pub fn user_message(&self) -> &'static str {
        match self {
            MelloError::InvalidTime(_) => {
                "I couldn't understand the time you submitted. Please make sure it's a real amount of time and it looks like Minutes:Seconds."
            }
            MelloError::InvalidDate(_) => {
                "I could not understand the date you sent. Please write it in the form MM/DD/YYYY."
            }
            MelloError::TransactionFailure(_) => {
                "There was an issue submitting your score. Please try again later."
            }
            _ => "There was an issue processing the command! Sorry ):",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MelloError>;
