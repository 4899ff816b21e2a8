//! # Time Utilities
//!
//! Calendar-date conversion for the transaction wire format.
//!
//! The expense API stores transaction dates as epoch milliseconds. Forms work with
//! `YYYY-MM-DD` strings. Both directions use UTC midnight, so a date written and read
//! back for editing always yields the same calendar day:
//!
//! ```rust
//! use lib_utils::time::{date_to_epoch_millis, epoch_millis_to_date};
//!
//! let millis = date_to_epoch_millis("2023-01-01").unwrap();
//! assert_eq!(millis, 1_672_531_200_000);
//! assert_eq!(epoch_millis_to_date(millis).unwrap(), "2023-01-01");
//! ```

use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date format used by edit forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a `YYYY-MM-DD` string to epoch milliseconds at UTC midnight.
pub fn date_to_epoch_millis(date: &str) -> Result<i64, Error> {
    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| Error::FailToDateParse(date.to_string()))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::FailToDateParse(date.to_string()))?;

    Ok(midnight.and_utc().timestamp_millis())
}

/// Convert epoch milliseconds to the `YYYY-MM-DD` of its UTC calendar day.
pub fn epoch_millis_to_date(millis: i64) -> Result<String, Error> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|moment| moment.format(DATE_FORMAT).to_string())
        .ok_or(Error::TimestampOutOfRange(millis))
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_utc() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
    TimestampOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FailToDateParse(date) => {
                write!(fmt, "invalid date '{date}', expected YYYY-MM-DD")
            }
            Error::TimestampOutOfRange(millis) => {
                write!(fmt, "timestamp {millis} is out of range")
            }
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
