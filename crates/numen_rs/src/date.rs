//! Calendar-date parsing.

use chrono::NaiveDate;

use crate::error::NumenError;

/// Parse a `YYYY-MM-DD` date.
///
/// Leading and trailing whitespace is ignored. Impossible days such as
/// `2023-02-29` are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate, NumenError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| NumenError::InvalidDate(s.to_string()))
}
