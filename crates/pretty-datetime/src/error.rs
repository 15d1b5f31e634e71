//! Error types for pretty-datetime operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrettyError {
    #[error("Invalid difference: {0}")]
    InvalidDifference(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, PrettyError>;
